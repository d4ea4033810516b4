//! Per-axis wall collision and sticky facing for actors.

use super::*;
use crate::state::{Actor, Grid};

impl Actor {
    /// Applies `dx` then `dy`, reverting each axis on its own when the center
    /// tile lands on a wall. Diagonal input against a wall slides along it.
    pub fn move_by(&mut self, dx: f32, dy: f32, grid: &Grid) {
        if dx != 0.0 {
            let previous = self.pos.x;
            self.pos.x += dx;
            if grid.is_wall(self.center_tile()) {
                self.pos.x = previous;
            }
        }
        if dy != 0.0 {
            let previous = self.pos.y;
            self.pos.y += dy;
            if grid.is_wall(self.center_tile()) {
                self.pos.y = previous;
            }
        }
    }

    /// The y axis is written last, so it wins on diagonal input.
    /// Zero input keeps the previous facing.
    pub fn update_facing(&mut self, direction: Vec2) {
        if direction.x > 0.0 {
            self.facing = Facing::Right;
        } else if direction.x < 0.0 {
            self.facing = Facing::Left;
        }
        if direction.y > 0.0 {
            self.facing = Facing::Down;
        } else if direction.y < 0.0 {
            self.facing = Facing::Up;
        }
    }
}

/// Clamps each input axis to `[-1, 1]`; NaN reads as no input.
pub(super) fn clamp_direction(direction: Vec2) -> Vec2 {
    let clamp_axis = |value: f32| if value.is_nan() { 0.0 } else { value.clamp(-1.0, 1.0) };
    Vec2::new(clamp_axis(direction.x), clamp_axis(direction.y))
}
