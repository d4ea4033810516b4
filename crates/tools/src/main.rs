use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dungeon_core::Game;
use dungeon_tools::{LevelDump, format_snapshot_hash, init_tracing, load_config, render_ascii};

/// Generates a level and prints it as ASCII or JSON.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Settings TOML; defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Print a JSON document instead of the ASCII map
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;
    let game = Game::new(args.seed, &config)
        .with_context(|| format!("Failed to generate a level for seed {}", args.seed))?;

    if args.json {
        let dump = LevelDump::from_game(&game);
        let json = serde_json::to_string_pretty(&dump).context("Failed to serialize level")?;
        println!("{json}");
        return Ok(());
    }

    for row in render_ascii(&game) {
        println!("{row}");
    }
    println!("Seed: {}", game.seed());
    println!("Rooms: {}", game.state().rooms.len());
    println!("Monsters: {}", game.state().monsters.len());
    println!("Snapshot Hash: {}", format_snapshot_hash(game.snapshot_hash()));

    Ok(())
}
