//! Room placement
//!
//! Rejection sampling: roll a rectangle, keep it if it fits, carve it,
//! repeat until the target count is reached or the attempt budget runs
//! out. No backtracking; exhaustion degrades gracefully to whatever
//! subset was placed.

use crate::config::{GameConfig, EDGE_BORDER, ROOM_MARGIN};
use crate::rng::GameRng;

use super::grid::MapGrid;
use super::room::{Room, RoomKind};

/// Attempt budget per level; bounds generation regardless of RNG luck
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 150;

/// Fewest rooms requested per level
pub const MIN_TARGET_ROOMS: u32 = 6;

/// Most rooms requested per level
pub const MAX_TARGET_ROOMS: u32 = 12;

/// Side cap for the fallback room carved when placement yields nothing
pub const FALLBACK_ROOM_CAP: usize = 15;

/// Place non-overlapping rooms into the grid
///
/// The target count is rolled per session in
/// `MIN_TARGET_ROOMS..=MAX_TARGET_ROOMS` and clamped to `cfg.max_rooms`.
/// Each accepted room is carved into the grid immediately. Placing fewer
/// rooms than requested is not an error; an empty result is replaced by a
/// deterministic centered fallback room so a level is never roomless.
pub fn generate_rooms(grid: &mut MapGrid, cfg: &GameConfig, rng: &mut GameRng) -> Vec<Room> {
    let target = rng
        .range_inclusive(MIN_TARGET_ROOMS, MAX_TARGET_ROOMS)
        .min(cfg.max_rooms as u32) as usize;

    let mut rooms: Vec<Room> = Vec::with_capacity(target);

    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        if rooms.len() >= target {
            break;
        }

        let width = rng.range_inclusive(cfg.room_min_size as u32, cfg.room_max_size as u32) as usize;
        let height =
            rng.range_inclusive(cfg.room_min_size as u32, cfg.room_max_size as u32) as usize;

        // Top-left position leaving the edge border on every side.
        // Config validation guarantees the largest room fits, so these
        // subtractions cannot underflow.
        let max_x = grid.width() - width - EDGE_BORDER;
        let max_y = grid.height() - height - EDGE_BORDER;
        let x = rng.range_inclusive(EDGE_BORDER as u32, max_x as u32) as usize;
        let y = rng.range_inclusive(EDGE_BORDER as u32, max_y as u32) as usize;

        let candidate = Room::new(x, y, width, height, RoomKind::random(rng));

        if rooms
            .iter()
            .any(|r| candidate.overlaps(r, ROOM_MARGIN))
        {
            continue;
        }

        grid.carve_room(&candidate);
        rooms.push(candidate);
    }

    if rooms.is_empty() {
        let fallback = fallback_room(grid);
        grid.carve_room(&fallback);
        rooms.push(fallback);
    }

    rooms
}

/// Deterministic centered room used when rejection sampling places nothing
fn fallback_room(grid: &MapGrid) -> Room {
    let width = grid
        .width()
        .saturating_sub(2 * EDGE_BORDER)
        .clamp(1, FALLBACK_ROOM_CAP);
    let height = grid
        .height()
        .saturating_sub(2 * EDGE_BORDER)
        .clamp(1, FALLBACK_ROOM_CAP);
    let x = (grid.width() - width) / 2;
    let y = (grid.height() - height) / 2;
    Room::new(x, y, width, height, RoomKind::Plain)
}
