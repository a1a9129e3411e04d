//! Tile grid
//!
//! Rectangular matrix of wall/floor cells. Everything outside the grid
//! reads as wall, so callers never need their own bounds checks.

use serde::{Deserialize, Serialize};

use super::room::Room;

/// A single map cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tile {
    /// Solid rock, impassable
    #[default]
    Wall,
    /// Carved, walkable
    Floor,
}

/// 2D tile grid, row-major
///
/// Dimensions are fixed at construction. Mutated only during generation
/// (room footprints and corridor runs), read-only afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl MapGrid {
    /// Create a grid filled with walls
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::Wall; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Tile at (x, y); out-of-bounds reads as wall
    pub fn get(&self, x: usize, y: usize) -> Tile {
        if self.in_bounds(x, y) {
            self.tiles[y * self.width + x]
        } else {
            Tile::Wall
        }
    }

    /// Set tile at (x, y); out-of-bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, tile: Tile) {
        if self.in_bounds(x, y) {
            self.tiles[y * self.width + x] = tile;
        }
    }

    pub fn is_floor(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == Tile::Floor
    }

    /// Carve a room's footprint to floor
    pub fn carve_room(&mut self, room: &Room) {
        for y in room.y..room.y + room.height {
            for x in room.x..room.x + room.width {
                self.set(x, y, Tile::Floor);
            }
        }
    }

    /// Carve a horizontal run of floor at row `y` between `x0` and `x1`
    /// (order-insensitive, endpoints inclusive). Idempotent over floor.
    pub fn carve_h_run(&mut self, y: usize, x0: usize, x1: usize) {
        let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        for x in lo..=hi {
            self.set(x, y, Tile::Floor);
        }
    }

    /// Carve a vertical run of floor at column `x` between `y0` and `y1`
    /// (order-insensitive, endpoints inclusive). Idempotent over floor.
    pub fn carve_v_run(&mut self, x: usize, y0: usize, y1: usize) {
        let (lo, hi) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        for y in lo..=hi {
            self.set(x, y, Tile::Floor);
        }
    }

    /// Count floor cells
    pub fn floor_count(&self) -> usize {
        self.tiles.iter().filter(|t| **t == Tile::Floor).count()
    }
}
