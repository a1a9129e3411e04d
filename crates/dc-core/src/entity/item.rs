//! Items, drops, and use effects
//!
//! A world item is `{kind, level, position}`; on pickup it loses its
//! world presence and becomes a plain inventory record. Mystery potions
//! dispatch over an enumerated effect table selected uniformly at use
//! time, so effect selection stays deterministic under a seeded RNG.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::player::{PlayerStats, StatusKind};
use crate::rng::GameRng;

use super::WorldPos;

/// How long a mystery-potion poison lasts, ms
pub const POISON_DURATION_MS: u64 = 5_000;

/// The six item categories
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum ItemKind {
    HealthPotion = 0,
    MysteryPotion = 1,
    Sword = 2,
    Shield = 3,
    Scroll = 4,
    Amulet = 5,
}

impl ItemKind {
    /// All categories for uniform selection
    pub const ALL: [ItemKind; 6] = [
        ItemKind::HealthPotion,
        ItemKind::MysteryPotion,
        ItemKind::Sword,
        ItemKind::Shield,
        ItemKind::Scroll,
        ItemKind::Amulet,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ItemKind::HealthPotion => "health potion",
            ItemKind::MysteryPotion => "murky potion",
            ItemKind::Sword => "sword",
            ItemKind::Shield => "shield",
            ItemKind::Scroll => "scroll of insight",
            ItemKind::Amulet => "amulet of vigor",
        }
    }
}

/// An item lying in the dungeon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemKind,
    pub level: u32,
    pub pos: WorldPos,
}

impl Item {
    pub fn new(kind: ItemKind, level: u32, pos: WorldPos) -> Self {
        Self { kind, level, pos }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Strip world presence on pickup
    pub fn into_inventory(self) -> InventoryItem {
        InventoryItem {
            kind: self.kind,
            level: self.level,
        }
    }
}

/// An item held in the inventory (no world position)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub kind: ItemKind,
    pub level: u32,
}

impl InventoryItem {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Consume the item, applying its effect to the player
    ///
    /// XP from scrolls is added raw; the caller runs the level-up pass.
    pub fn apply(self, stats: &mut PlayerStats, now_ms: u64, rng: &mut GameRng) -> ItemUse {
        match self.kind {
            ItemKind::HealthPotion => {
                let healed = stats.heal((20 + self.level * 10) as i32);
                ItemUse::Healed(healed)
            }
            ItemKind::MysteryPotion => {
                let effect = *rng.choose(&PotionEffect::ALL).unwrap_or(&PotionEffect::Restore);
                effect.apply(stats, now_ms);
                ItemUse::Mystery(effect)
            }
            ItemKind::Sword => {
                let gain = (2 + self.level) as i32;
                stats.attack += gain;
                ItemUse::AttackUp(gain)
            }
            ItemKind::Shield => {
                let gain = (1 + self.level) as i32;
                stats.defense += gain;
                ItemUse::DefenseUp(gain)
            }
            ItemKind::Scroll => {
                let xp = 50 * self.level;
                stats.xp += xp;
                ItemUse::XpGained(xp)
            }
            ItemKind::Amulet => {
                let gain = (5 + 5 * self.level) as i32;
                stats.max_health += gain;
                stats.heal(gain);
                ItemUse::MaxHealthUp(gain)
            }
        }
    }
}

/// What using an item did (renderer/audio sink)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemUse {
    Healed(i32),
    AttackUp(i32),
    DefenseUp(i32),
    MaxHealthUp(i32),
    XpGained(u32),
    Mystery(PotionEffect),
}

/// Mystery potion outcomes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum PotionEffect {
    /// Heal 25
    Restore,
    /// Lose 10 health, never below 1
    Sicken,
    /// Permanent +2 attack
    Sharpen,
    /// Permanent +2 defense
    Harden,
    /// Poisoned status for [`POISON_DURATION_MS`]
    Venom,
}

impl PotionEffect {
    pub const ALL: [PotionEffect; 5] = [
        PotionEffect::Restore,
        PotionEffect::Sicken,
        PotionEffect::Sharpen,
        PotionEffect::Harden,
        PotionEffect::Venom,
    ];

    pub fn apply(self, stats: &mut PlayerStats, now_ms: u64) {
        match self {
            PotionEffect::Restore => {
                stats.heal(25);
            }
            PotionEffect::Sicken => {
                // A bad potion hurts but never kills outright
                stats.health = (stats.health - 10).max(1);
            }
            PotionEffect::Sharpen => stats.attack += 2,
            PotionEffect::Harden => stats.defense += 2,
            PotionEffect::Venom => {
                stats.add_status(StatusKind::Poisoned, now_ms + POISON_DURATION_MS, now_ms);
            }
        }
    }
}
