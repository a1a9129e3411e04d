//! Rooms
//!
//! A room is an axis-aligned rectangle of floor, immutable once placed.
//! Lifetime is one dungeon level; the session replaces the whole list on
//! descent.

use serde::{Deserialize, Serialize};

use crate::rng::GameRng;

/// Cosmetic room category
///
/// Purely visual: the renderer picks floor decals from it. No gameplay
/// effect anywhere in the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum RoomKind {
    #[default]
    Plain = 0,
    Mossy = 1,
    Flooded = 2,
    Collapsed = 3,
}

impl RoomKind {
    /// All room kinds for uniform selection
    pub const ALL: [RoomKind; 4] = [
        RoomKind::Plain,
        RoomKind::Mossy,
        RoomKind::Flooded,
        RoomKind::Collapsed,
    ];

    /// Pick a kind uniformly at random
    pub fn random(rng: &mut GameRng) -> Self {
        *rng.choose(&Self::ALL).unwrap_or(&RoomKind::Plain)
    }
}

/// Rectangle representing a room, in grid coordinates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// X coordinate of left edge
    pub x: usize,
    /// Y coordinate of top edge
    pub y: usize,
    /// Width in cells
    pub width: usize,
    /// Height in cells
    pub height: usize,
    /// Cosmetic category
    pub kind: RoomKind,
}

impl Room {
    pub fn new(x: usize, y: usize, width: usize, height: usize, kind: RoomKind) -> Self {
        Self {
            x,
            y,
            width,
            height,
            kind,
        }
    }

    /// Center cell of the room
    pub fn center(&self) -> (usize, usize) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Check if this room overlaps another, with a spacing margin
    pub fn overlaps(&self, other: &Room, margin: usize) -> bool {
        let x1 = self.x.saturating_sub(margin);
        let y1 = self.y.saturating_sub(margin);
        let x2 = self.x + self.width + margin;
        let y2 = self.y + self.height + margin;

        let ox1 = other.x.saturating_sub(margin);
        let oy1 = other.y.saturating_sub(margin);
        let ox2 = other.x + other.width + margin;
        let oy2 = other.y + other.height + margin;

        !(x2 <= ox1 || x1 >= ox2 || y2 <= oy1 || y1 >= oy2)
    }

    /// Check if a grid cell lies inside the room
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Get a random cell inside the room
    pub fn random_point(&self, rng: &mut GameRng) -> (usize, usize) {
        let x = self.x + rng.rn2(self.width as u32) as usize;
        let y = self.y + rng.rn2(self.height as u32) as usize;
        (x, y)
    }

    /// Interior area in cells
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}
