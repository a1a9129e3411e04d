//! Entities placed into the dungeon
//!
//! Enemies and items live in continuous world space (grid cells scaled by
//! the tile size) so the AI's radii and speeds match what the renderer
//! sees. The grid itself stays in cell coordinates.

pub mod enemy;
pub mod item;
pub mod spawn;

pub use enemy::{Enemy, EnemyKind};
pub use item::{InventoryItem, Item, ItemKind, ItemUse, PotionEffect};
pub use spawn::{place_enemies, place_items};

use serde::{Deserialize, Serialize};

/// A position in world units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
}

impl WorldPos {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Center of a grid cell in world units
    pub fn from_cell(cell_x: usize, cell_y: usize, tile: f32) -> Self {
        Self {
            x: (cell_x as f32 + 0.5) * tile,
            y: (cell_y as f32 + 0.5) * tile,
        }
    }

    /// Grid cell containing this position
    pub fn to_cell(self, tile: f32) -> (usize, usize) {
        (
            (self.x / tile).max(0.0) as usize,
            (self.y / tile).max(0.0) as usize,
        )
    }

    pub fn distance_to(self, other: WorldPos) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Move up to `dist` units toward `target`, stopping on arrival
    pub fn step_toward(self, target: WorldPos, dist: f32) -> WorldPos {
        let d = self.distance_to(target);
        if d <= dist || d == 0.0 {
            return target;
        }
        let t = dist / d;
        WorldPos {
            x: self.x + (target.x - self.x) * t,
            y: self.y + (target.y - self.y) * t,
        }
    }
}

/// Overlap test for two square bounds of the given half-extent
pub fn bounds_overlap(a: WorldPos, b: WorldPos, half_extent: f32) -> bool {
    (a.x - b.x).abs() < half_extent * 2.0 && (a.y - b.y).abs() < half_extent * 2.0
}
