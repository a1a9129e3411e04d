//! Combat resolution and enemy engagement
//!
//! Each attack is an independent transaction; no encounter state is held
//! across calls. The resolver emits events for the renderer/audio layer
//! to visualize, and never waits on them.

pub mod ai;
mod resolver;

pub use resolver::{
    base_damage, crit_chance, drop_chance, enemy_attack_player, player_attack_enemy,
    AttackOutcome, CRIT_NUM, CRIT_DEN,
};

use serde::{Deserialize, Serialize};

use crate::entity::{EnemyKind, Item, ItemKind, WorldPos};

/// Who dealt or received a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Combatant {
    Player,
    Enemy(EnemyKind),
}

/// One resolved hit, for the renderer to animate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackEvent {
    pub attacker: Combatant,
    pub defender: Combatant,
    pub damage: i32,
    pub is_crit: bool,
    pub pos: WorldPos,
}

/// An enemy defeat, for the renderer/audio layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefeatEvent {
    pub enemy_kind: EnemyKind,
    pub enemy_level: u32,
    pub xp_gained: u32,
    /// Item spawned by the drop roll, if any
    pub drop: Option<Item>,
}

/// Everything the core reports to its collaborators
///
/// Consumers drain these best-effort; the core functions identically
/// whether or not anyone is listening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Attack(AttackEvent),
    Defeat(DefeatEvent),
    LevelUp { new_level: u32 },
    PlayerDied,
    ItemPickedUp { kind: ItemKind, level: u32 },
    Descended { depth: u32 },
}
