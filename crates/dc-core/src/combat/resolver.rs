//! Damage resolution
//!
//! Player attacks can crit (1.5x, floored); enemy attacks cannot.
//! Damage is never below 1 however high the defender's defense. Defeat
//! awards XP, bumps the kill counter, rolls a drop, and runs the
//! level-up pass, all within the one transaction.

use crate::entity::{Enemy, Item, ItemKind};
use crate::player::PlayerStats;
use crate::progression::check_level_up;
use crate::rng::GameRng;

/// Crit damage multiplier as a ratio (x1.5, floored by integer division)
pub const CRIT_NUM: i32 = 3;
pub const CRIT_DEN: i32 = 2;

/// `max(1, attack - defense)`
pub fn base_damage(attack: i32, defense: i32) -> i32 {
    (attack - defense).max(1)
}

/// Player crit probability: 5% base plus 1% per level
pub fn crit_chance(player_level: u32) -> f64 {
    0.05 + player_level as f64 * 0.01
}

/// Drop probability on defeat, in percent, capped at 100
pub fn drop_chance(enemy_level: u32) -> u32 {
    (30 + enemy_level * 3).min(100)
}

/// Outcome of one player attack
#[derive(Debug, Clone, PartialEq)]
pub struct AttackOutcome {
    pub damage: i32,
    pub is_crit: bool,
    pub defeated: bool,
    /// XP awarded (zero unless the enemy was defeated)
    pub xp_gained: u32,
    /// Levels gained by the triggered level-up pass
    pub levels_gained: u32,
    /// Item spawned at the enemy's position by the drop roll
    pub drop: Option<Item>,
}

/// Resolve one player attack against a living enemy
///
/// The caller guarantees the enemy is still in the active set; attacks
/// against removed enemies are a no-op at the session layer.
pub fn player_attack_enemy(
    stats: &mut PlayerStats,
    enemy: &mut Enemy,
    rng: &mut GameRng,
) -> AttackOutcome {
    let mut damage = base_damage(stats.attack, enemy.defense);
    let is_crit = rng.chance(crit_chance(stats.level));
    if is_crit {
        damage = damage * CRIT_NUM / CRIT_DEN;
    }

    enemy.health -= damage;

    if !enemy.is_defeated() {
        return AttackOutcome {
            damage,
            is_crit,
            defeated: false,
            xp_gained: 0,
            levels_gained: 0,
            drop: None,
        };
    }

    // Defeat: XP, kill counter, drop roll, then the level-up pass
    stats.xp += enemy.xp_reward;
    stats.kills += 1;

    let drop = if rng.percent(drop_chance(enemy.level)) {
        let kind = *rng.choose(&ItemKind::ALL).unwrap_or(&ItemKind::HealthPotion);
        Some(Item::new(kind, enemy.level.max(1), enemy.pos))
    } else {
        None
    };

    let levels_gained = check_level_up(stats, rng);

    AttackOutcome {
        damage,
        is_crit,
        defeated: true,
        xp_gained: enemy.xp_reward,
        levels_gained,
        drop,
    }
}

/// Resolve one enemy attack against the player; returns damage dealt
///
/// No crit mechanic. Player health is clamped at zero; the session turns
/// a zero into the terminal death state.
pub fn enemy_attack_player(enemy: &Enemy, stats: &mut PlayerStats) -> i32 {
    let damage = base_damage(enemy.attack, stats.defense);
    stats.take_damage(damage);
    damage
}
