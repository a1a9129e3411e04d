//! Generation configuration
//!
//! All recognized options are integers affecting generation bounds only.
//! Out-of-range values are a programming error caught at construction
//! time; the generator itself never validates at runtime.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cells left between any room and the grid edge during placement.
pub const EDGE_BORDER: usize = 2;

/// Minimum spacing kept between two rooms during placement.
pub const ROOM_MARGIN: usize = 1;

/// Errors raised by [`GameConfig::validate`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("map dimensions must be non-zero, got {width}x{height}")]
    ZeroMapDimension { width: usize, height: usize },

    #[error("invalid room size range {min}..={max}")]
    BadRoomSizeRange { min: usize, max: usize },

    #[error("room of size {size} cannot fit in a {width}x{height} map with a {border}-cell border")]
    RoomTooLarge {
        size: usize,
        width: usize,
        height: usize,
        border: usize,
    },

    #[error("max_rooms must be at least 1")]
    ZeroMaxRooms,

    #[error("tile_size must be non-zero")]
    ZeroTileSize,
}

/// Dungeon generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// World units per grid cell
    pub tile_size: u32,
    /// Grid width in cells
    pub map_width: usize,
    /// Grid height in cells
    pub map_height: usize,
    /// Smallest room side length
    pub room_min_size: usize,
    /// Largest room side length
    pub room_max_size: usize,
    /// Upper bound on rooms per level
    pub max_rooms: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_size: 32,
            map_width: 50,
            map_height: 50,
            room_min_size: 6,
            room_max_size: 12,
            max_rooms: 12,
        }
    }
}

impl GameConfig {
    /// Check construction-time invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }
        if self.map_width == 0 || self.map_height == 0 {
            return Err(ConfigError::ZeroMapDimension {
                width: self.map_width,
                height: self.map_height,
            });
        }
        if self.room_min_size == 0 || self.room_min_size > self.room_max_size {
            return Err(ConfigError::BadRoomSizeRange {
                min: self.room_min_size,
                max: self.room_max_size,
            });
        }
        if self.max_rooms == 0 {
            return Err(ConfigError::ZeroMaxRooms);
        }
        // The largest room plus its border must fit on both axes
        let needed = self.room_max_size + 2 * EDGE_BORDER;
        if needed > self.map_width || needed > self.map_height {
            return Err(ConfigError::RoomTooLarge {
                size: self.room_max_size,
                width: self.map_width,
                height: self.map_height,
                border: EDGE_BORDER,
            });
        }
        Ok(())
    }

    /// Side length of a grid cell in world units, as a float
    pub fn tile(&self) -> f32 {
        self.tile_size as f32
    }

    /// Map width in world units
    pub fn world_width(&self) -> f32 {
        self.map_width as f32 * self.tile()
    }

    /// Map height in world units
    pub fn world_height(&self) -> f32 {
        self.map_height as f32 * self.tile()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let cfg = GameConfig {
            map_width: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ZeroMapDimension { .. })
        ));
    }

    #[test]
    fn test_inverted_room_range_rejected() {
        let cfg = GameConfig {
            room_min_size: 10,
            room_max_size: 6,
            ..GameConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::BadRoomSizeRange { min: 10, max: 6 })
        ));
    }

    #[test]
    fn test_oversized_room_rejected() {
        let cfg = GameConfig {
            map_width: 12,
            map_height: 12,
            room_min_size: 6,
            room_max_size: 12,
            ..GameConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::RoomTooLarge { .. })
        ));
    }

    #[test]
    fn test_zero_max_rooms_rejected() {
        let cfg = GameConfig {
            max_rooms: 0,
            ..GameConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroMaxRooms));
    }

    #[test]
    fn test_world_dimensions() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.world_width(), 50.0 * 32.0);
        assert_eq!(cfg.world_height(), 50.0 * 32.0);
    }
}
