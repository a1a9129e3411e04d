//! Leveling
//!
//! XP thresholds follow a 1.5x geometric curve. The level-up pass loops
//! until the residual XP no longer covers the next threshold, so one
//! large grant can apply several level-ups, each with independently
//! rolled stat bonuses.

use crate::player::PlayerStats;
use crate::rng::GameRng;

/// XP required to advance from `level` to `level + 1`
///
/// `floor(100 * 1.5^(level - 1))`; strictly increasing in `level`.
pub fn xp_for_next_level(level: u32) -> u32 {
    (100.0 * 1.5f64.powi(level as i32 - 1)).floor() as u32
}

/// Apply pending level-ups; returns how many levels were gained
///
/// Each level: +1 level, XP reduced by the old threshold, new threshold
/// from the curve, max health +10 plus 5..=15, full heal, attack +2 plus
/// 1..=3, defense +1 plus 0..=2.
pub fn check_level_up(stats: &mut PlayerStats, rng: &mut GameRng) -> u32 {
    let mut gained = 0;

    while stats.xp >= stats.next_level_xp {
        stats.xp -= stats.next_level_xp;
        stats.level += 1;
        stats.next_level_xp = xp_for_next_level(stats.level);

        stats.max_health += (10 + rng.range_inclusive(5, 15)) as i32;
        stats.health = stats.max_health;
        stats.attack += (2 + rng.range_inclusive(1, 3)) as i32;
        stats.defense += (1 + rng.range_inclusive(0, 2)) as i32;

        gained += 1;
    }

    gained
}
