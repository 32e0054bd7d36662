//! Paddle game entry point.
//!
//! Loads the tuning configuration once at startup and hands it to the game
//! systems that need it.
//!
//! Run with: `cargo run -p paddle-game -- --assets-dir <dir>`

mod spawn;

use std::path::PathBuf;

use clap::Parser;
use paddle_config::{CliArgs, GameConfig};
use tracing::{info, warn};

use spawn::SpawnTable;

fn log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("paddle-game").join("logs"))
}

fn main() {
    let args = CliArgs::parse();

    paddle_log::init_logging(
        log_dir().as_deref(),
        cfg!(debug_assertions),
        args.log_level.as_deref(),
    );

    let config = match args.resolve_assets_dir() {
        Some(assets_dir) if args.write_default => GameConfig::load_or_create(&assets_dir)
            .unwrap_or_else(|e| {
                warn!("{e}");
                GameConfig::load_or_default(&assets_dir)
            }),
        Some(assets_dir) => GameConfig::load_or_default(&assets_dir),
        None => {
            warn!("No streaming assets directory found; using default game config");
            GameConfig::default()
        }
    };

    info!(
        "Paddle: {} units/s | Ball: impulse={}, life={}s | Spawn delay: {}-{}s",
        config.paddle_move_units_per_second(),
        config.ball_impulse_force(),
        config.ball_life_seconds(),
        config.min_spawn_delay(),
        config.max_spawn_delay(),
    );
    info!(
        "Scoring: standard={}pt/{}hit, bonus={}pt/{}hit",
        config.standard_points(),
        config.standard_hits(),
        config.bonus_points(),
        config.bonus_hits(),
    );
    info!(
        "Effects: freezer={}s, speedup={}s x{}",
        config.freezer_seconds(),
        config.speedup_seconds(),
        config.speedup_factor(),
    );

    let spawn_table = SpawnTable::new(&config);
    info!(
        "Spawn chances: standard={}, bonus={}, freezer={}, speedup={} | mid-roll: {:?} after {}s",
        config.standard_ball_spawn_probability(),
        config.bonus_ball_spawn_probability(),
        config.freezer_pickup_spawn_probability(),
        config.speedup_pickup_spawn_probability(),
        spawn_table.choose(0.5),
        spawn_table.spawn_delay(0.5),
    );

    if args.print {
        match ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new()) {
            Ok(text) => println!("{text}"),
            Err(e) => warn!("Failed to serialize config: {e}"),
        }
    }
}
