use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use dungeon_core::{Game, Pos, TickContext, TickOutcome, Vec2};
use dungeon_tools::{format_snapshot_hash, init_tracing, load_config};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    ticks: u64,
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    println!("Starting Fuzz harness on seed {} for max {} ticks...", args.seed, args.ticks);
    let config = load_config(args.config.as_deref())?;
    let mut game = Game::new(args.seed, &config).context("Failed to start fuzz run")?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let axes = [-1.0_f32, 0.0, 1.0];
    let mut explored = explored_tiles(&game);

    for frame in 0..args.ticks {
        let ctx = TickContext {
            now_ms: frame * 16,
            direction: Vec2::new(choose(&mut rng, &axes), choose(&mut rng, &axes)),
            attack_pressed: rng.next_u64() % 4 == 0,
            quit_requested: false,
        };
        let outcome = game.tick(&ctx);

        // Assert invariants
        let state = game.state();
        ensure!(
            !state.grid.is_wall(state.player.center_tile()),
            "Invariant failed: player inside wall at tick {frame}"
        );
        for (id, monster) in &state.monsters {
            ensure!(monster.hp <= monster.max_hp, "Invariant failed: {id:?} HP > Max HP");
            ensure!(monster.hp > 0, "Invariant failed: dead {id:?} left in the arena");
            ensure!(
                !state.grid.is_wall(monster.center_tile()),
                "Invariant failed: {id:?} inside wall"
            );
        }
        let now_explored = explored_tiles(&game);
        ensure!(
            explored.iter().all(|pos| now_explored.contains(pos)),
            "Invariant failed: explored tile forgotten at tick {frame}"
        );
        explored = now_explored;

        if let TickOutcome::Finished(outcome) = outcome {
            println!("Finished with outcome {outcome:?} after {} ticks", frame + 1);
            break;
        }
    }

    println!("Snapshot Hash: {}", format_snapshot_hash(game.snapshot_hash()));
    println!("Fuzzing completed successfully.");
    Ok(())
}

fn explored_tiles(game: &Game) -> Vec<Pos> {
    let grid = &game.state().grid;
    grid.positions().filter(|&pos| grid.is_explored(pos)).collect()
}
