//! Enemy engagement AI
//!
//! Re-evaluated every engine tick but gated by per-enemy timestamps
//! compared against a monotonic clock supplied by the host. No engine
//! timers: everything here is unit-testable with a hand-rolled clock.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::config::GameConfig;
use crate::entity::{bounds_overlap, Enemy, WorldPos};
use crate::rng::GameRng;

/// Distance within which an enemy pursues the player, world units
pub const CHASE_RADIUS: f32 = 250.0;

/// Per-enemy cooldown between attacks, ms
pub const ATTACK_COOLDOWN_MS: u64 = 1_000;

/// How long a wander heading is kept before re-rolling, ms
pub const WANDER_REPICK_MS: u64 = 1_500;

/// A cardinal wander heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
pub enum CardinalDir {
    North,
    South,
    East,
    West,
}

impl CardinalDir {
    pub const ALL: [CardinalDir; 4] = [
        CardinalDir::North,
        CardinalDir::South,
        CardinalDir::East,
        CardinalDir::West,
    ];

    /// Unit vector, y-down world coordinates
    pub fn unit(self) -> (f32, f32) {
        match self {
            CardinalDir::North => (0.0, -1.0),
            CardinalDir::South => (0.0, 1.0),
            CardinalDir::East => (1.0, 0.0),
            CardinalDir::West => (-1.0, 0.0),
        }
    }

    pub fn random(rng: &mut GameRng) -> Self {
        *rng.choose(&Self::ALL).unwrap_or(&CardinalDir::North)
    }
}

/// Advance one enemy by one tick; returns true if it wants to attack
///
/// Within [`CHASE_RADIUS`] of the player the enemy closes distance at its
/// chase speed; otherwise it drifts along a cardinal heading re-rolled
/// every [`WANDER_REPICK_MS`]. The attack fires when bounds overlap and
/// the per-enemy cooldown has elapsed; firing stamps `last_attack_ms`.
pub fn advance_enemy(
    enemy: &mut Enemy,
    player_pos: WorldPos,
    cfg: &GameConfig,
    now_ms: u64,
    dt_ms: u64,
    rng: &mut GameRng,
) -> bool {
    let dt = dt_ms as f32 / 1000.0;
    let dist = enemy.pos.distance_to(player_pos);

    if dist <= CHASE_RADIUS {
        enemy.wander_dir = None;
        enemy.pos = enemy.pos.step_toward(player_pos, enemy.chase_speed() * dt);
    } else {
        let dir = match enemy.wander_dir {
            Some(d) if now_ms.saturating_sub(enemy.last_move_ms) < WANDER_REPICK_MS => d,
            _ => {
                let d = CardinalDir::random(rng).unit();
                enemy.wander_dir = Some(d);
                enemy.last_move_ms = now_ms;
                d
            }
        };
        let speed = enemy.wander_speed() * dt;
        enemy.pos.x += dir.0 * speed;
        enemy.pos.y += dir.1 * speed;
    }

    // Keep enemies inside the map; wall collision is the engine's physics
    // layer, not the core's concern.
    let half = cfg.tile() / 2.0;
    enemy.pos.x = enemy.pos.x.clamp(half, cfg.world_width() - half);
    enemy.pos.y = enemy.pos.y.clamp(half, cfg.world_height() - half);

    if bounds_overlap(enemy.pos, player_pos, half)
        && now_ms.saturating_sub(enemy.last_attack_ms) >= ATTACK_COOLDOWN_MS
    {
        enemy.last_attack_ms = now_ms;
        return true;
    }
    false
}
