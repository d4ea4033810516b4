use dungeon_core::{Game, RunOutcome, TickContext, TickOutcome, Vec2};
use macroquad::prelude::KeyCode;

#[derive(Debug, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Playing,
    Finished(RunOutcome),
}

#[derive(Default)]
pub struct AppState {
    pub mode: AppMode,
    /// Set when the player asks for a fresh level after the run ended.
    /// Consumed by the caller, which builds the next game.
    pub restart_requested: bool,
    /// Set when the player closes the game from the end-of-run screen.
    pub exit_requested: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one frame of game logic from the keys held and pressed this frame.
    /// `now_ms` comes from the frame clock so tests can drive time directly.
    pub fn tick(
        &mut self,
        game: &mut Game,
        keys_down: &[KeyCode],
        keys_pressed: &[KeyCode],
        now_ms: u64,
    ) {
        match self.mode {
            AppMode::Playing => {
                let ctx = TickContext {
                    now_ms,
                    direction: direction_from_keys(keys_down),
                    attack_pressed: keys_pressed.contains(&KeyCode::Space),
                    quit_requested: keys_pressed.contains(&KeyCode::Escape),
                };
                if let TickOutcome::Finished(outcome) = game.tick(&ctx) {
                    self.mode = AppMode::Finished(outcome);
                }
            }
            AppMode::Finished(_) => {
                if keys_pressed.contains(&KeyCode::Escape) {
                    self.exit_requested = true;
                } else if keys_pressed.contains(&KeyCode::Enter) {
                    self.restart_requested = true;
                }
            }
        }
    }

    /// Resets the mode for a freshly built game.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    pub fn should_exit(&self) -> bool {
        self.exit_requested || self.mode == AppMode::Finished(RunOutcome::Quit)
    }
}

/// Arrow keys and WASD; opposite keys cancel out on each axis.
pub fn direction_from_keys(keys_down: &[KeyCode]) -> Vec2 {
    let held = |keys: [KeyCode; 2]| keys.iter().any(|key| keys_down.contains(key));
    Vec2::new(
        axis(held([KeyCode::Left, KeyCode::A]), held([KeyCode::Right, KeyCode::D])),
        axis(held([KeyCode::Up, KeyCode::W]), held([KeyCode::Down, KeyCode::S])),
    )
}

fn axis(negative: bool, positive: bool) -> f32 {
    match (negative, positive) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}
