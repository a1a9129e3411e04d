//! Dungeon session
//!
//! One live instance owns all mutable state: grid, rooms, entities,
//! inventory, player stats, and the event queue for the renderer. A
//! level transition discards the previous level wholesale and generates
//! a fresh one; nothing drains gracefully. Single logical thread, no
//! locking.

use serde::{Deserialize, Serialize};

use crate::combat::ai::advance_enemy;
use crate::combat::{
    enemy_attack_player, player_attack_enemy, AttackEvent, Combatant, DefeatEvent, GameEvent,
};
use crate::config::{ConfigError, GameConfig};
use crate::dungeon::{connect_rooms, generate_rooms, MapGrid, Room};
use crate::entity::{place_enemies, place_items, Enemy, InventoryItem, Item, WorldPos};
use crate::entity::item::ItemUse;
use crate::player::PlayerStats;
use crate::progression::check_level_up;
use crate::rng::GameRng;

/// Radius within which an interact trigger can reach an enemy, world units
pub const INTERACT_RADIUS: f32 = 50.0;

/// Pickup reach, world units
pub const PICKUP_RADIUS: f32 = 24.0;

/// One dungeon run
///
/// Replaced-in-place on level transition (`descend`) and on `restart`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DungeonSession {
    config: GameConfig,
    rng: GameRng,
    depth: u32,
    grid: MapGrid,
    rooms: Vec<Room>,
    enemies: Vec<Enemy>,
    items: Vec<Item>,
    inventory: Vec<InventoryItem>,
    player: PlayerStats,
    player_pos: WorldPos,
    events: Vec<GameEvent>,
    game_over: bool,
}

impl DungeonSession {
    /// Start a session at depth 1
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut session = Self {
            rng: GameRng::new(seed),
            depth: 1,
            grid: MapGrid::new(config.map_width, config.map_height),
            rooms: Vec::new(),
            enemies: Vec::new(),
            items: Vec::new(),
            inventory: Vec::new(),
            player: PlayerStats::new(),
            player_pos: WorldPos::default(),
            events: Vec::new(),
            game_over: false,
            config,
        };
        session.generate_level();
        Ok(session)
    }

    /// Generate the current depth from scratch
    ///
    /// Runs once to completion; there is no suspension mid-generation.
    fn generate_level(&mut self) {
        self.grid = MapGrid::new(self.config.map_width, self.config.map_height);
        self.rooms = generate_rooms(&mut self.grid, &self.config, &mut self.rng);
        connect_rooms(&mut self.grid, &self.rooms, &mut self.rng);
        self.enemies = place_enemies(&self.rooms, self.depth, &self.config, &mut self.rng);
        self.items = place_items(&self.rooms, self.depth, &self.config, &mut self.rng);

        // The player always enters at the start room's center
        let (cx, cy) = self.rooms[0].center();
        self.player_pos = WorldPos::from_cell(cx, cy, self.config.tile());
    }

    /// Descend one level: previous level state is discarded wholesale
    ///
    /// Stats and inventory persist; enemies, items on the floor, rooms,
    /// and the grid do not.
    pub fn descend(&mut self) {
        self.depth += 1;
        self.generate_level();
        self.events.push(GameEvent::Descended { depth: self.depth });
    }

    /// Restart after death (or at will): fresh stats, depth 1
    pub fn restart(&mut self) {
        self.depth = 1;
        self.player = PlayerStats::new();
        self.inventory.clear();
        self.events.clear();
        self.game_over = false;
        self.generate_level();
    }

    /// Discrete interact trigger: attack the nearest living enemy within
    /// [`INTERACT_RADIUS`]; no-op if none. Returns whether an action
    /// occurred.
    pub fn interact(&mut self, _now_ms: u64) -> bool {
        if self.game_over {
            return false;
        }

        let target = self
            .enemies
            .iter()
            .enumerate()
            .map(|(i, e)| (i, e.pos.distance_to(self.player_pos)))
            .filter(|(_, d)| *d <= INTERACT_RADIUS)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i);

        let Some(idx) = target else {
            return false;
        };

        let outcome = player_attack_enemy(&mut self.player, &mut self.enemies[idx], &mut self.rng);
        let enemy_kind = self.enemies[idx].kind;
        let enemy_level = self.enemies[idx].level;
        let enemy_pos = self.enemies[idx].pos;

        self.events.push(GameEvent::Attack(AttackEvent {
            attacker: Combatant::Player,
            defender: Combatant::Enemy(enemy_kind),
            damage: outcome.damage,
            is_crit: outcome.is_crit,
            pos: enemy_pos,
        }));

        if outcome.defeated {
            // Removal guards against double-processing this defeat
            self.enemies.swap_remove(idx);
            if let Some(drop) = outcome.drop.clone() {
                self.items.push(drop);
            }
            self.events.push(GameEvent::Defeat(DefeatEvent {
                enemy_kind,
                enemy_level,
                xp_gained: outcome.xp_gained,
                drop: outcome.drop,
            }));
            if outcome.levels_gained > 0 {
                self.events.push(GameEvent::LevelUp {
                    new_level: self.player.level,
                });
            }
        }

        true
    }

    /// Advance the world by one engine tick
    ///
    /// Runs status effects, then every enemy's movement and attack
    /// decision. Combat resolution completes within this call; no
    /// partial state is held across ticks.
    pub fn tick(&mut self, now_ms: u64, dt_ms: u64) {
        if self.game_over {
            return;
        }

        self.player.tick_statuses(now_ms);
        if self.check_player_death() {
            return;
        }

        for i in 0..self.enemies.len() {
            let wants_attack = advance_enemy(
                &mut self.enemies[i],
                self.player_pos,
                &self.config,
                now_ms,
                dt_ms,
                &mut self.rng,
            );
            if wants_attack {
                let damage = enemy_attack_player(&self.enemies[i], &mut self.player);
                self.events.push(GameEvent::Attack(AttackEvent {
                    attacker: Combatant::Enemy(self.enemies[i].kind),
                    defender: Combatant::Player,
                    damage,
                    is_crit: false,
                    pos: self.player_pos,
                }));
                if self.check_player_death() {
                    return;
                }
            }
        }
    }

    fn check_player_death(&mut self) -> bool {
        if self.player.is_dead() && !self.game_over {
            self.game_over = true;
            self.events.push(GameEvent::PlayerDied);
        }
        self.game_over
    }

    /// Pick up the nearest item within reach, if any
    pub fn pickup(&mut self) -> Option<InventoryItem> {
        let idx = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| (i, item.pos.distance_to(self.player_pos)))
            .filter(|(_, d)| *d <= PICKUP_RADIUS)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)?;

        let picked = self.items.swap_remove(idx).into_inventory();
        self.events.push(GameEvent::ItemPickedUp {
            kind: picked.kind,
            level: picked.level,
        });
        self.inventory.push(picked);
        Some(picked)
    }

    /// Use an inventory item by index; silently ignores a stale index
    pub fn use_item(&mut self, index: usize, now_ms: u64) -> Option<ItemUse> {
        if self.game_over || index >= self.inventory.len() {
            return None;
        }
        let item = self.inventory.remove(index);
        let used = item.apply(&mut self.player, now_ms, &mut self.rng);
        // Scrolls add raw XP; resolve any level-ups now
        let gained = check_level_up(&mut self.player, &mut self.rng);
        if gained > 0 {
            self.events.push(GameEvent::LevelUp {
                new_level: self.player.level,
            });
        }
        Some(used)
    }

    /// Move the player, clamped to the map (input mapping is the host's
    /// concern; the core only owns the resulting position)
    pub fn set_player_pos(&mut self, pos: WorldPos) {
        let half = self.config.tile() / 2.0;
        self.player_pos = WorldPos::new(
            pos.x.clamp(half, self.config.world_width() - half),
            pos.y.clamp(half, self.config.world_height() - half),
        );
    }

    /// Drain queued events for the renderer/audio layer
    ///
    /// Best-effort sink: the core never depends on anyone draining.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn grid(&self) -> &MapGrid {
        &self.grid
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn player(&self) -> &PlayerStats {
        &self.player
    }

    pub fn player_pos(&self) -> WorldPos {
        self.player_pos
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{EnemyKind, ItemKind};

    fn session(seed: u64) -> DungeonSession {
        DungeonSession::new(GameConfig::default(), seed).unwrap()
    }

    #[test]
    fn test_new_session_shape() {
        let s = session(42);
        assert_eq!(s.depth(), 1);
        assert!(!s.rooms().is_empty());
        assert!(s.grid().floor_count() > 0);
        assert_eq!(s.player().level, 1);
        assert!(!s.is_game_over());
        // Depth 1 gates items to zero
        assert!(s.items().is_empty());
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let cfg = GameConfig {
            room_min_size: 0,
            ..GameConfig::default()
        };
        assert!(DungeonSession::new(cfg, 1).is_err());
    }

    #[test]
    fn test_player_starts_in_start_room() {
        for seed in 0..20 {
            let s = session(seed);
            let (cx, cy) = s.player_pos().to_cell(s.config().tile());
            assert!(s.rooms()[0].contains(cx, cy), "seed {seed}");
        }
    }

    #[test]
    fn test_same_seed_same_dungeon() {
        let a = session(99);
        let b = session(99);
        assert_eq!(a.rooms(), b.rooms());
        assert_eq!(a.enemies().len(), b.enemies().len());
    }

    #[test]
    fn test_descend_replaces_level_keeps_progress() {
        let mut s = session(42);
        s.inventory.push(InventoryItem {
            kind: ItemKind::Sword,
            level: 1,
        });
        s.player.xp = 55;
        let rooms_before = s.rooms().to_vec();

        s.descend();
        assert_eq!(s.depth(), 2);
        assert_ne!(s.rooms(), rooms_before.as_slice());
        assert_eq!(s.player().xp, 55);
        assert_eq!(s.inventory().len(), 1);
        assert!(s
            .drain_events()
            .contains(&GameEvent::Descended { depth: 2 }));
    }

    #[test]
    fn test_interact_no_enemy_is_noop() {
        let mut s = session(42);
        s.enemies.clear();
        assert!(!s.interact(0));
        assert!(s.drain_events().is_empty());
    }

    #[test]
    fn test_interact_hits_nearest_in_radius() {
        let mut s = session(42);
        s.enemies.clear();
        let near = Enemy::spawn(EnemyKind::Slime, 1, WorldPos {
            x: s.player_pos.x + 30.0,
            y: s.player_pos.y,
        });
        let far = Enemy::spawn(EnemyKind::Slime, 1, WorldPos {
            x: s.player_pos.x + 300.0,
            y: s.player_pos.y,
        });
        let near_hp = near.health;
        let far_hp = far.health;
        s.enemies.push(far.clone());
        s.enemies.push(near.clone());

        assert!(s.interact(0));
        assert_eq!(s.enemies[0].health, far_hp);
        assert!(s.enemies[1].health < near_hp);
        assert!(matches!(
            s.drain_events().as_slice(),
            [GameEvent::Attack(AttackEvent {
                attacker: Combatant::Player,
                ..
            })]
        ));
    }

    #[test]
    fn test_defeat_removes_enemy_and_emits_events() {
        let mut s = session(42);
        s.enemies.clear();
        let mut victim = Enemy::spawn(EnemyKind::Slime, 1, s.player_pos);
        victim.health = 1;
        s.enemies.push(victim);

        assert!(s.interact(0));
        assert!(s.enemies.is_empty());
        assert_eq!(s.player().kills, 1);

        let events = s.drain_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::Defeat(DefeatEvent { xp_gained: 40, .. }))));

        // A second interact finds nothing: the defeat cannot be
        // processed twice.
        assert!(!s.interact(0));
    }

    #[test]
    fn test_enemy_attacks_on_tick_and_player_death_is_terminal() {
        let mut s = session(42);
        s.enemies.clear();
        s.player.health = 1;
        s.player.defense = 0;
        s.enemies.push(Enemy::spawn(EnemyKind::Orc, 5, s.player_pos));

        s.tick(2_000, 16);
        assert!(s.is_game_over());
        assert!(s.drain_events().contains(&GameEvent::PlayerDied));

        // Terminal: further ticks and interacts are no-ops
        s.tick(3_000, 16);
        assert!(!s.interact(3_000));
        assert!(s.drain_events().is_empty());

        // Until explicitly restarted
        s.restart();
        assert!(!s.is_game_over());
        assert_eq!(s.player().health, 100);
        assert_eq!(s.depth(), 1);
    }

    #[test]
    fn test_pickup_moves_item_to_inventory() {
        let mut s = session(42);
        s.items.push(Item::new(ItemKind::HealthPotion, 2, s.player_pos));

        let picked = s.pickup().expect("item within reach");
        assert_eq!(picked.kind, ItemKind::HealthPotion);
        assert!(s.items().is_empty());
        assert_eq!(s.inventory().len(), 1);

        // Nothing left to pick up
        assert!(s.pickup().is_none());
    }

    #[test]
    fn test_use_item_stale_index_is_noop() {
        let mut s = session(42);
        assert!(s.use_item(3, 0).is_none());
    }

    #[test]
    fn test_use_scroll_can_level_up() {
        let mut s = session(42);
        s.player.xp = 60;
        s.inventory.push(InventoryItem {
            kind: ItemKind::Scroll,
            level: 1,
        });

        let used = s.use_item(0, 0);
        assert_eq!(used, Some(ItemUse::XpGained(50)));
        assert_eq!(s.player().level, 2);
        assert!(s
            .drain_events()
            .contains(&GameEvent::LevelUp { new_level: 2 }));
    }

    #[test]
    fn test_session_serde_round_trip() {
        let s = session(8);
        let json = serde_json::to_string(&s).unwrap();
        let restored: DungeonSession = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.depth(), s.depth());
        assert_eq!(restored.rooms(), s.rooms());
        assert_eq!(restored.player(), s.player());
    }

    #[test]
    fn test_set_player_pos_clamped() {
        let mut s = session(42);
        s.set_player_pos(WorldPos::new(-100.0, 1e9));
        let pos = s.player_pos();
        assert!(pos.x >= 0.0 && pos.y <= s.config().world_height());
    }

    #[test]
    fn test_events_queue_independent_of_drain() {
        // The core keeps functioning if nobody drains events
        let mut s = session(42);
        for i in 0..100 {
            s.tick(i * 100, 100);
        }
        assert!(!s.is_game_over() || !s.drain_events().is_empty());
    }
}
