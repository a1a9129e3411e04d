//! dc-sim: command-line harness for dungeon sessions
//!
//! Stands in for the rendering collaborator: generates levels, prints
//! them as ASCII, and can autoplay a run while printing the combat
//! events the core emits.

use anyhow::Result;
use clap::{Parser, Subcommand};

use dc_core::combat::GameEvent;
use dc_core::{DungeonSession, GameConfig};

#[derive(Parser)]
#[command(name = "dc-sim", about = "Inspect and simulate dungeon sessions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a level and print it
    Map {
        /// RNG seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Dungeon depth to generate
        #[arg(long, default_value_t = 1)]
        depth: u32,
        /// Map width in cells
        #[arg(long, default_value_t = 50)]
        width: usize,
        /// Map height in cells
        #[arg(long, default_value_t = 50)]
        height: usize,
        /// Dump the whole session as JSON instead of ASCII
        #[arg(long)]
        json: bool,
    },
    /// Autoplay a run, printing combat events
    Play {
        /// RNG seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Engine ticks to simulate
        #[arg(long, default_value_t = 2000)]
        ticks: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Map {
            seed,
            depth,
            width,
            height,
            json,
        } => run_map(seed, depth, width, height, json),
        Command::Play { seed, ticks } => run_play(seed, ticks),
    }
}

fn make_session(seed: Option<u64>, width: usize, height: usize) -> Result<DungeonSession> {
    let config = GameConfig {
        map_width: width,
        map_height: height,
        ..GameConfig::default()
    };
    let seed = seed.unwrap_or_else(rand_seed);
    eprintln!("seed: {seed}");
    Ok(DungeonSession::new(config, seed)?)
}

/// Entropy-based seed without pulling rand into this crate
fn rand_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn run_map(seed: Option<u64>, depth: u32, width: usize, height: usize, json: bool) -> Result<()> {
    let mut session = make_session(seed, width, height)?;
    for _ in 1..depth {
        session.descend();
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&session)?);
        return Ok(());
    }

    print_map(&session);
    println!(
        "depth {}: {} rooms, {} enemies, {} items",
        session.depth(),
        session.rooms().len(),
        session.enemies().len(),
        session.items().len()
    );
    for enemy in session.enemies() {
        println!(
            "  {} (level {}) hp {} atk {} def {}",
            enemy.name(),
            enemy.level,
            enemy.health,
            enemy.attack,
            enemy.defense
        );
    }
    Ok(())
}

fn print_map(session: &DungeonSession) {
    let grid = session.grid();
    let tile = session.config().tile();
    let mut glyphs: Vec<Vec<char>> = (0..grid.height())
        .map(|y| {
            (0..grid.width())
                .map(|x| if grid.is_floor(x, y) { '.' } else { '#' })
                .collect()
        })
        .collect();

    for item in session.items() {
        let (x, y) = item.pos.to_cell(tile);
        glyphs[y][x] = '?';
    }
    for enemy in session.enemies() {
        let (x, y) = enemy.pos.to_cell(tile);
        glyphs[y][x] = 'e';
    }
    let (px, py) = session.player_pos().to_cell(tile);
    glyphs[py][px] = '@';

    for row in glyphs {
        println!("{}", row.into_iter().collect::<String>());
    }
}

fn run_play(seed: Option<u64>, ticks: u64) -> Result<()> {
    let mut session = make_session(seed, 50, 50)?;
    const TICK_MS: u64 = 100;
    const PLAYER_SPEED: f32 = 150.0; // units/sec

    for tick in 0..ticks {
        let now = tick * TICK_MS;

        // Walk toward the nearest enemy, or descend when the level is clear
        let player_pos = session.player_pos();
        let target = session
            .enemies()
            .iter()
            .map(|e| e.pos)
            .min_by(|a, b| a.distance_to(player_pos).total_cmp(&b.distance_to(player_pos)));
        if let Some(target) = target {
            let step = PLAYER_SPEED * TICK_MS as f32 / 1000.0;
            let pos = player_pos.step_toward(target, step);
            session.set_player_pos(pos);
            session.interact(now);
        } else {
            let _ = session.pickup();
            session.descend();
        }

        session.tick(now, TICK_MS);
        for event in session.drain_events() {
            print_event(&event, now);
        }

        if session.is_game_over() {
            let stats = session.player();
            println!(
                "died at depth {} as level {} with {} kills",
                session.depth(),
                stats.level,
                stats.kills
            );
            return Ok(());
        }
    }

    let stats = session.player();
    println!(
        "survived to depth {} at level {} with {} kills",
        session.depth(),
        stats.level,
        stats.kills
    );
    Ok(())
}

fn print_event(event: &GameEvent, now: u64) {
    match event {
        GameEvent::Attack(a) => {
            let crit = if a.is_crit { " (crit!)" } else { "" };
            println!("[{now:>7}ms] {:?} hits {:?} for {}{crit}", a.attacker, a.defender, a.damage);
        }
        GameEvent::Defeat(d) => {
            let drop = d
                .drop
                .as_ref()
                .map(|i| format!(", drops {}", i.name()))
                .unwrap_or_default();
            println!(
                "[{now:>7}ms] {} (level {}) defeated, +{} xp{drop}",
                d.enemy_kind, d.enemy_level, d.xp_gained
            );
        }
        GameEvent::LevelUp { new_level } => {
            println!("[{now:>7}ms] level up! now level {new_level}");
        }
        GameEvent::PlayerDied => println!("[{now:>7}ms] the player dies..."),
        GameEvent::ItemPickedUp { kind, level } => {
            println!("[{now:>7}ms] picked up {kind} (level {level})");
        }
        GameEvent::Descended { depth } => {
            println!("[{now:>7}ms] descended to depth {depth}");
        }
    }
}
