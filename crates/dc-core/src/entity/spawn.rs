//! Entity placement
//!
//! Scatters enemies and items into rooms based on dungeon depth. Enemy
//! placement skips the start room (`rooms[0]`) entirely; item placement
//! covers every room but is depth-gated, so the first level has none.

use crate::config::GameConfig;
use crate::dungeon::Room;
use crate::rng::GameRng;

use super::enemy::{Enemy, EnemyKind};
use super::item::{Item, ItemKind};
use super::WorldPos;

/// Most enemies a single room can hold
pub const MAX_ENEMIES_PER_ROOM: u32 = 5;

/// How far enemy levels may stray from the dungeon depth
fn level_variation(depth: u32) -> u32 {
    (depth / 3).min(2)
}

/// Enemy count range for one room at the given depth
fn enemy_count_range(depth: u32) -> (u32, u32) {
    let min = (depth / 2).min(1);
    let max = (depth * 7 / 10 + 1).min(MAX_ENEMIES_PER_ROOM);
    (min, max)
}

/// Roll an enemy level around the dungeon depth
fn roll_enemy_level(depth: u32, rng: &mut GameRng) -> u32 {
    let lv = level_variation(depth);
    let lo = depth.saturating_sub(lv).max(1);
    let hi = depth + lv.div_ceil(2);
    rng.range_inclusive(lo, hi)
}

/// Spawn enemies into every room except the start room
///
/// Deeper levels unlock more archetypes: kind is uniform over the first
/// `min(6, depth + 1)` entries of [`EnemyKind::ALL`].
pub fn place_enemies(
    rooms: &[Room],
    depth: u32,
    cfg: &GameConfig,
    rng: &mut GameRng,
) -> Vec<Enemy> {
    let mut enemies = Vec::new();
    let unlocked = ((depth + 1).min(6)) as usize;

    for room in rooms.iter().skip(1) {
        let (lo, hi) = enemy_count_range(depth);
        let count = rng.range_inclusive(lo, hi);

        for _ in 0..count {
            let kind = EnemyKind::ALL[rng.rn2(unlocked as u32) as usize];
            let level = roll_enemy_level(depth, rng);
            let (cx, cy) = room.random_point(rng);
            let pos = WorldPos::from_cell(cx, cy, cfg.tile());
            enemies.push(Enemy::spawn(kind, level, pos));
        }
    }

    enemies
}

/// Scatter items over all rooms, including the start room
///
/// Per-room count is `min(randint(0, 2), depth / 2)`: deliberately sparse
/// and zero on the first level.
pub fn place_items(rooms: &[Room], depth: u32, cfg: &GameConfig, rng: &mut GameRng) -> Vec<Item> {
    let mut items = Vec::new();

    for room in rooms {
        let count = rng.range_inclusive(0, 2).min(depth / 2);
        for _ in 0..count {
            let kind = *rng.choose(&ItemKind::ALL).unwrap_or(&ItemKind::HealthPotion);
            let level = rng.range_inclusive(depth.saturating_sub(1).max(1), depth + 1);
            let (cx, cy) = room.random_point(rng);
            items.push(Item::new(kind, level, WorldPos::from_cell(cx, cy, cfg.tile())));
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::RoomKind;

    fn three_rooms() -> Vec<Room> {
        vec![
            Room::new(2, 2, 6, 6, RoomKind::Plain),
            Room::new(20, 2, 6, 6, RoomKind::Plain),
            Room::new(2, 20, 6, 6, RoomKind::Plain),
        ]
    }

    #[test]
    fn test_start_room_has_no_enemies() {
        let cfg = GameConfig::default();
        let rooms = three_rooms();
        for seed in 0..30 {
            let mut rng = GameRng::new(seed);
            let enemies = place_enemies(&rooms, 5, &cfg, &mut rng);
            for enemy in &enemies {
                let (cx, cy) = enemy.pos.to_cell(cfg.tile());
                assert!(
                    !rooms[0].contains(cx, cy),
                    "seed {seed}: enemy spawned in start room"
                );
            }
        }
    }

    #[test]
    fn test_enemy_counts_scale_with_depth() {
        assert_eq!(enemy_count_range(1), (0, 1));
        assert_eq!(enemy_count_range(2), (1, 2));
        assert_eq!(enemy_count_range(4), (1, 3));
        assert_eq!(enemy_count_range(10), (1, 5));
        // Cap holds however deep the run goes
        assert_eq!(enemy_count_range(100), (1, 5));
    }

    #[test]
    fn test_archetype_unlock_by_depth() {
        let cfg = GameConfig::default();
        let rooms = three_rooms();
        for seed in 0..30 {
            let mut rng = GameRng::new(seed);
            // Depth 1: only the first two archetypes exist
            for enemy in place_enemies(&rooms, 1, &cfg, &mut rng) {
                assert!(enemy.kind.index() < 2, "seed {seed}: {:?}", enemy.kind);
            }
            // Depth 2: first three
            for enemy in place_enemies(&rooms, 2, &cfg, &mut rng) {
                assert!(enemy.kind.index() < 3);
            }
        }
    }

    #[test]
    fn test_enemy_level_window() {
        let mut rng = GameRng::new(11);
        // Depth 1-2: no variation at all
        for _ in 0..100 {
            assert_eq!(roll_enemy_level(1, &mut rng), 1);
            assert_eq!(roll_enemy_level(2, &mut rng), 2);
        }
        // Depth 9: variation 2, so levels in [7, 10]
        for _ in 0..200 {
            let level = roll_enemy_level(9, &mut rng);
            assert!((7..=10).contains(&level), "level {level}");
        }
    }

    #[test]
    fn test_no_items_on_first_level() {
        let cfg = GameConfig::default();
        let rooms = three_rooms();
        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            assert!(place_items(&rooms, 1, &cfg, &mut rng).is_empty());
        }
    }

    #[test]
    fn test_items_in_rooms_with_depth_window() {
        let cfg = GameConfig::default();
        let rooms = three_rooms();
        let mut rng = GameRng::new(3);
        let items = place_items(&rooms, 4, &cfg, &mut rng);
        for item in &items {
            assert!((3..=5).contains(&item.level));
            let (cx, cy) = item.pos.to_cell(cfg.tile());
            assert!(rooms.iter().any(|r| r.contains(cx, cy)));
        }
        // At most 2 per room
        assert!(items.len() <= rooms.len() * 2);
    }

    #[test]
    fn test_items_may_land_in_start_room() {
        let cfg = GameConfig::default();
        let rooms = three_rooms();
        let mut seen_start_room = false;
        for seed in 0..200 {
            let mut rng = GameRng::new(seed);
            for item in place_items(&rooms, 6, &cfg, &mut rng) {
                let (cx, cy) = item.pos.to_cell(cfg.tile());
                if rooms[0].contains(cx, cy) {
                    seen_start_room = true;
                }
            }
        }
        assert!(seen_start_room, "items never landed in the start room");
    }
}
