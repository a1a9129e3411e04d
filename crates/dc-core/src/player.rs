//! Player stats
//!
//! One instance per session, mutated by combat, item use, and leveling.
//! Player health is clamped to `[0, max_health]`; reaching 0 is terminal
//! until the session is restarted.

use serde::{Deserialize, Serialize};
use strum::Display;

/// How often an active poison ticks, ms
pub const STATUS_TICK_MS: u64 = 1_000;

/// Damage per poison tick
pub const POISON_TICK_DAMAGE: i32 = 2;

/// Timed status ailments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum StatusKind {
    Poisoned,
}

/// A timed status on the player, expired lazily against the host clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub kind: StatusKind,
    pub expires_at_ms: u64,
    /// Last time this status dealt its periodic effect
    pub last_tick_ms: u64,
}

/// The player's stat block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub level: u32,
    pub health: i32,
    pub max_health: i32,
    pub attack: i32,
    pub defense: i32,
    pub xp: u32,
    pub next_level_xp: u32,
    pub kills: u32,
    pub status_effects: Vec<StatusEffect>,
}

impl PlayerStats {
    /// Fresh level-1 stats
    pub fn new() -> Self {
        Self {
            level: 1,
            health: 100,
            max_health: 100,
            attack: 10,
            defense: 5,
            xp: 0,
            next_level_xp: 100,
            kills: 0,
            status_effects: Vec::new(),
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Restore health, clamped to max. Returns the amount actually healed.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = (self.health + amount.max(0)).min(self.max_health);
        self.health - before
    }

    /// Apply damage, clamped at zero
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount.max(0)).max(0);
    }

    /// Attach a timed status (refreshes the expiry if already present)
    pub fn add_status(&mut self, kind: StatusKind, expires_at_ms: u64, now_ms: u64) {
        if let Some(existing) = self.status_effects.iter_mut().find(|s| s.kind == kind) {
            existing.expires_at_ms = existing.expires_at_ms.max(expires_at_ms);
        } else {
            self.status_effects.push(StatusEffect {
                kind,
                expires_at_ms,
                last_tick_ms: now_ms,
            });
        }
    }

    pub fn has_status(&self, kind: StatusKind) -> bool {
        self.status_effects.iter().any(|s| s.kind == kind)
    }

    /// Run periodic status effects and drop expired ones
    pub fn tick_statuses(&mut self, now_ms: u64) {
        let mut poison_ticks = 0;
        for status in &mut self.status_effects {
            if status.kind == StatusKind::Poisoned
                && now_ms.saturating_sub(status.last_tick_ms) >= STATUS_TICK_MS
            {
                status.last_tick_ms = now_ms;
                poison_ticks += 1;
            }
        }
        for _ in 0..poison_ticks {
            self.take_damage(POISON_TICK_DAMAGE);
        }
        self.status_effects.retain(|s| s.expires_at_ms > now_ms);
    }
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_stats() {
        let stats = PlayerStats::new();
        assert_eq!(stats.level, 1);
        assert_eq!(stats.health, 100);
        assert_eq!(stats.next_level_xp, 100);
        assert!(!stats.is_dead());
    }

    #[test]
    fn test_heal_clamps_to_max() {
        let mut stats = PlayerStats::new();
        stats.health = 90;
        assert_eq!(stats.heal(25), 10);
        assert_eq!(stats.health, 100);
        // Negative heal is a no-op, not damage
        assert_eq!(stats.heal(-50), 0);
        assert_eq!(stats.health, 100);
    }

    #[test]
    fn test_damage_clamps_at_zero() {
        let mut stats = PlayerStats::new();
        stats.take_damage(250);
        assert_eq!(stats.health, 0);
        assert!(stats.is_dead());
    }

    #[test]
    fn test_status_refresh_extends_expiry() {
        let mut stats = PlayerStats::new();
        stats.add_status(StatusKind::Poisoned, 5_000, 0);
        stats.add_status(StatusKind::Poisoned, 8_000, 1_000);
        assert_eq!(stats.status_effects.len(), 1);
        assert_eq!(stats.status_effects[0].expires_at_ms, 8_000);
    }

    #[test]
    fn test_poison_ticks_and_expires() {
        let mut stats = PlayerStats::new();
        stats.add_status(StatusKind::Poisoned, 3_500, 0);

        stats.tick_statuses(500);
        assert_eq!(stats.health, 100); // not yet

        stats.tick_statuses(1_000);
        assert_eq!(stats.health, 100 - POISON_TICK_DAMAGE);

        stats.tick_statuses(2_000);
        assert_eq!(stats.health, 100 - 2 * POISON_TICK_DAMAGE);

        // Past expiry the status is dropped
        stats.tick_statuses(4_000);
        assert!(!stats.has_status(StatusKind::Poisoned));
        let health = stats.health;
        stats.tick_statuses(10_000);
        assert_eq!(stats.health, health);
    }
}
