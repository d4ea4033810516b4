mod frame_input;
mod render;
mod window_config;

use anyhow::{Context, Result, bail};
use app::app_loop::AppState;
use app::seed::{generate_runtime_seed, resolve_launch_args};
use app::settings_file::SettingsFile;
use dungeon_core::{DungeonConfig, Game, GameError, GenerationError};
use macroquad::prelude::{get_time, next_frame};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::frame_input::capture_frame_input;
use crate::render::draw_frame;
use crate::window_config::build_window_conf;

/// Fresh seeds tried when a level places no room at all.
const MAX_GENERATION_ATTEMPTS: u32 = 8;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Builds a game from `seed`, moving to a fresh seed whenever generation fails.
fn new_game_with_retry(seed: u64, config: &DungeonConfig) -> Result<Game> {
    let mut seed = seed;
    for attempt in 1..=MAX_GENERATION_ATTEMPTS {
        match Game::new(seed, config) {
            Ok(game) => return Ok(game),
            Err(GameError::Generation(err @ GenerationError::NoRoomsPlaced { .. })) => {
                warn!(seed, attempt, %err, "level generation failed, retrying with a new seed");
                seed = generate_runtime_seed();
            }
            Err(err) => return Err(err).context("invalid dungeon settings"),
        }
    }
    bail!("no playable level after {MAX_GENERATION_ATTEMPTS} seeds")
}

fn frame_clock_ms() -> u64 {
    (get_time() * 1000.0) as u64
}

async fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let launch = resolve_launch_args(&args, generate_runtime_seed())
        .map_err(anyhow::Error::msg)
        .context("invalid command line")?;
    let settings = SettingsFile::resolve(launch.config_path.as_deref())
        .context("failed to load dungeon settings")?;
    let config = settings.dungeon;

    info!(seed = launch.seed.value(), "starting dungeon run");
    let mut game = new_game_with_retry(launch.seed.value(), &config)?;
    let mut app_state = AppState::new();

    loop {
        let now_ms = frame_clock_ms();
        let input = capture_frame_input();
        app_state.tick(&mut game, &input.keys_down, &input.keys_pressed, now_ms);

        if app_state.should_exit() {
            break;
        }
        if app_state.restart_requested {
            game = new_game_with_retry(generate_runtime_seed(), &config)?;
            app_state.restart();
        }

        draw_frame(&game, &app_state, now_ms);
        next_frame().await;
    }

    info!(tick = game.current_tick(), "dungeon closed");
    Ok(())
}

#[macroquad::main(build_window_conf)]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
}
