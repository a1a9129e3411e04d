//! Dungeon map generation
//!
//! A level is built in three passes over one mutable grid: room placement
//! by rejection sampling, corridor carving between consecutive rooms, and
//! (elsewhere) entity scatter over the finished room list. The grid is
//! read-only once generation completes.

pub mod corridor;
pub mod generation;
pub mod grid;
pub mod room;

pub use corridor::connect_rooms;
pub use generation::generate_rooms;
pub use grid::{MapGrid, Tile};
pub use room::{Room, RoomKind};
