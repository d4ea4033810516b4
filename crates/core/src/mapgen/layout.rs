//! Room sampling and floor carving for the base level topology.

use rand_chacha::rand_core::Rng;

use crate::config::MapConfig;
use crate::state::Grid;
use crate::types::{Pos, TileKind};

use super::model::Room;
use super::random::random_range;

/// Samples a room whose outer ring stays inside the grid.
pub(super) fn sample_room<R: Rng>(rng: &mut R, config: &MapConfig) -> Room {
    let room_width = random_range(rng, config.room_min_size, config.room_max_size);
    let room_height = random_range(rng, config.room_min_size, config.room_max_size);
    let x = random_range(rng, 0, config.width as i32 - room_width - 1);
    let y = random_range(rng, 0, config.height as i32 - room_height - 1);
    Room::new(x, y, room_width, room_height)
}

pub(super) fn carve_room(grid: &mut Grid, room: &Room) {
    for pos in room.interior() {
        grid.set_tile(pos, TileKind::Floor);
    }
}

/// One-bend corridor: horizontal along the start row, then vertical along the end column.
pub(super) fn carve_corridor(grid: &mut Grid, start: Pos, end: Pos) {
    carve_horizontal_line(grid, start.y, start.x, end.x);
    carve_vertical_line(grid, end.x, start.y, end.y);
}

fn carve_horizontal_line(grid: &mut Grid, y: i32, from_x: i32, to_x: i32) {
    for x in from_x.min(to_x)..=from_x.max(to_x) {
        grid.set_tile(Pos { y, x }, TileKind::Floor);
    }
}

fn carve_vertical_line(grid: &mut Grid, x: i32, from_y: i32, to_y: i32) {
    for y in from_y.min(to_y)..=from_y.max(to_y) {
        grid.set_tile(Pos { y, x }, TileKind::Floor);
    }
}
