//! Enemy archetypes and stat derivation
//!
//! Six fixed archetypes; deeper dungeon levels unlock more of them.
//! All stats derive from the enemy's level and archetype index, so an
//! enemy is fully described by (kind, level, position).

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::WorldPos;

/// The six enemy archetypes, ordered by unlock depth
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum EnemyKind {
    Slime = 0,
    Rat = 1,
    Bat = 2,
    Skeleton = 3,
    Goblin = 4,
    Orc = 5,
}

impl EnemyKind {
    /// All archetypes in unlock order
    pub const ALL: [EnemyKind; 6] = [
        EnemyKind::Slime,
        EnemyKind::Rat,
        EnemyKind::Bat,
        EnemyKind::Skeleton,
        EnemyKind::Goblin,
        EnemyKind::Orc,
    ];

    /// Archetype index used in the stat formulas
    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            EnemyKind::Slime => "slime",
            EnemyKind::Rat => "giant rat",
            EnemyKind::Bat => "cave bat",
            EnemyKind::Skeleton => "skeleton",
            EnemyKind::Goblin => "goblin",
            EnemyKind::Orc => "orc",
        }
    }

    /// Scales base health; tougher archetypes trade speed for bulk
    pub fn health_multiplier(self) -> f32 {
        match self {
            EnemyKind::Slime => 1.0,
            EnemyKind::Rat => 0.7,
            EnemyKind::Bat => 0.8,
            EnemyKind::Skeleton => 1.1,
            EnemyKind::Goblin => 1.0,
            EnemyKind::Orc => 1.3,
        }
    }

    /// Scales chase speed only; wandering uses the unscaled base speed
    pub fn speed_multiplier(self) -> f32 {
        match self {
            EnemyKind::Slime => 0.7,
            EnemyKind::Rat => 1.4,
            EnemyKind::Bat => 1.2,
            EnemyKind::Skeleton => 0.9,
            EnemyKind::Goblin => 1.1,
            EnemyKind::Orc => 0.8,
        }
    }
}

/// A live enemy
///
/// Health is the only stat mutated after spawn; defeat is checked with
/// `health <= 0` (no floor clamp, unlike the player).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub level: u32,
    pub health: i32,
    pub max_health: i32,
    pub attack: i32,
    pub defense: i32,
    pub xp_reward: u32,
    pub pos: WorldPos,
    /// Current wander heading, if the enemy is out of chase range
    pub wander_dir: Option<(f32, f32)>,
    /// Monotonic clock value of the last attack, ms
    pub last_attack_ms: u64,
    /// Monotonic clock value of the last wander re-pick, ms
    pub last_move_ms: u64,
}

impl Enemy {
    /// Spawn an enemy with stats derived from level and archetype
    pub fn spawn(kind: EnemyKind, level: u32, pos: WorldPos) -> Self {
        let idx = kind.index();
        let health = ((30 + level * 12) as f32 * kind.health_multiplier()).floor() as i32;
        Self {
            kind,
            level,
            health,
            max_health: health,
            attack: (5 + level * 3 + idx) as i32,
            defense: (2 + level / 2 + idx / 2) as i32,
            xp_reward: 25 + level * 15 + idx * 5,
            pos,
            wander_dir: None,
            last_attack_ms: 0,
            last_move_ms: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Pursuit speed in world units per second
    pub fn chase_speed(&self) -> f32 {
        (40 + self.level * 2) as f32 * self.kind.speed_multiplier()
    }

    /// Idle wander speed in world units per second (no archetype scaling)
    pub fn wander_speed(&self) -> f32 {
        (40 + self.level * 2) as f32
    }
}
