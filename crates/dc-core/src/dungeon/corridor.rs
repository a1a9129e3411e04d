//! Corridor carving
//!
//! Links consecutive rooms with L-shaped corridors: one horizontal run
//! and one vertical run between the two centers, elbow corner picked
//! 50/50 per pair. Connectivity is a linear chain (room i to room i-1),
//! never a spanning structure, so there are no shortcuts between
//! non-adjacent rooms.

use crate::rng::GameRng;

use super::grid::MapGrid;
use super::room::Room;

/// Carve corridors joining each consecutive room pair
///
/// Corridors are not persisted entities; carving is their only effect.
/// Already-floor cells are unaffected.
pub fn connect_rooms(grid: &mut MapGrid, rooms: &[Room], rng: &mut GameRng) {
    for pair in rooms.windows(2) {
        let (px, py) = pair[0].center();
        let (cx, cy) = pair[1].center();

        if rng.one_in(2) {
            // Horizontal along the previous room's center row, then
            // vertical along the current room's center column.
            grid.carve_h_run(py, px, cx);
            grid.carve_v_run(cx, py, cy);
        } else {
            // Vertical first; the elbow lands on the other corner.
            grid.carve_v_run(px, py, cy);
            grid.carve_h_run(cy, px, cx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::room::RoomKind;
    use crate::dungeon::Tile;

    fn plain(x: usize, y: usize, w: usize, h: usize) -> Room {
        Room::new(x, y, w, h, RoomKind::Plain)
    }

    /// Count floor cells reachable from (x, y) by 4-way movement
    fn flood_fill_count(grid: &MapGrid, start: (usize, usize)) -> usize {
        let mut visited = vec![false; grid.width() * grid.height()];
        let mut stack = vec![start];
        let mut count = 0;

        while let Some((x, y)) = stack.pop() {
            if !grid.in_bounds(x, y) || visited[y * grid.width() + x] {
                continue;
            }
            visited[y * grid.width() + x] = true;
            if grid.get(x, y) != Tile::Floor {
                continue;
            }
            count += 1;

            if x > 0 {
                stack.push((x - 1, y));
            }
            stack.push((x + 1, y));
            if y > 0 {
                stack.push((x, y - 1));
            }
            stack.push((x, y + 1));
        }

        count
    }

    #[test]
    fn test_consecutive_rooms_are_connected() {
        for seed in 0..30 {
            let mut grid = MapGrid::new(60, 40);
            let mut rng = GameRng::new(seed);
            let rooms = vec![
                plain(5, 5, 6, 5),
                plain(40, 6, 7, 6),
                plain(20, 28, 8, 6),
                plain(48, 30, 6, 5),
            ];
            for room in &rooms {
                grid.carve_room(room);
            }

            connect_rooms(&mut grid, &rooms, &mut rng);

            // Every room center must be reachable from the first
            let reachable = flood_fill_count(&grid, rooms[0].center());
            let room_area: usize = rooms.iter().map(Room::area).sum();
            assert!(
                reachable >= room_area,
                "seed {seed}: only {reachable} cells reachable"
            );
        }
    }

    #[test]
    fn test_single_room_is_a_no_op() {
        let mut grid = MapGrid::new(30, 30);
        let mut rng = GameRng::new(1);
        let rooms = vec![plain(10, 10, 5, 5)];
        grid.carve_room(&rooms[0]);
        let before = grid.floor_count();

        connect_rooms(&mut grid, &rooms, &mut rng);
        assert_eq!(grid.floor_count(), before);
    }

    #[test]
    fn test_corridor_endpoints_touch_both_centers() {
        let mut grid = MapGrid::new(40, 40);
        let mut rng = GameRng::new(9);
        let rooms = vec![plain(3, 3, 5, 5), plain(28, 25, 6, 6)];
        for room in &rooms {
            grid.carve_room(room);
        }

        connect_rooms(&mut grid, &rooms, &mut rng);

        let (ax, ay) = rooms[0].center();
        let (bx, by) = rooms[1].center();
        assert!(grid.is_floor(ax, ay));
        assert!(grid.is_floor(bx, by));
        // Whichever elbow was chosen, one of the two candidate corners
        // must have been carved.
        assert!(grid.is_floor(bx, ay) || grid.is_floor(ax, by));
    }

    #[test]
    fn test_aligned_rooms_get_straight_corridor() {
        // Same center row: both elbow choices degenerate to one run
        let mut grid = MapGrid::new(40, 20);
        let mut rng = GameRng::new(4);
        let rooms = vec![plain(2, 5, 5, 5), plain(30, 5, 5, 5)];
        for room in &rooms {
            grid.carve_room(room);
        }

        connect_rooms(&mut grid, &rooms, &mut rng);

        let (_, y) = rooms[0].center();
        for x in rooms[0].center().0..=rooms[1].center().0 {
            assert!(grid.is_floor(x, y));
        }
    }
}
