//! dc-core: Core logic for a top-down dungeon crawler
//!
//! Procedural level generation (room placement, corridor connection,
//! tile grid), real-time combat resolution, enemy AI, and
//! inventory/progression. No rendering, audio, or input handling lives
//! here: collaborators receive generated data (room list, entity stats,
//! damage events) and cannot affect generation or combat outcomes.
//!
//! Everything is deterministic under a seed and driven by a
//! host-supplied monotonic clock, so the whole crate is testable
//! without an engine loop.

pub mod combat;
pub mod config;
pub mod dungeon;
pub mod entity;
pub mod player;
pub mod progression;
pub mod session;

mod rng;

pub use config::{ConfigError, GameConfig};
pub use rng::GameRng;
pub use session::DungeonSession;
