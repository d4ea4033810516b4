//! Keyboard input collection for one rendered frame.

use macroquad::prelude::{KeyCode, is_key_down, is_key_pressed};

const MOVEMENT_KEYS: [KeyCode; 8] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::W,
    KeyCode::A,
    KeyCode::S,
    KeyCode::D,
];

const ACTION_KEYS: [KeyCode; 3] = [KeyCode::Space, KeyCode::Escape, KeyCode::Enter];

#[derive(Default)]
pub struct FrameInput {
    /// Held for the whole frame.
    pub keys_down: Vec<KeyCode>,
    /// Went down during this frame.
    pub keys_pressed: Vec<KeyCode>,
}

pub fn capture_frame_input() -> FrameInput {
    let keys_down = MOVEMENT_KEYS.into_iter().filter(|&key| is_key_down(key)).collect();
    let keys_pressed = ACTION_KEYS.into_iter().filter(|&key| is_key_pressed(key)).collect();
    FrameInput { keys_down, keys_pressed }
}
