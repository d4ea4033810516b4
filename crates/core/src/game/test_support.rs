//! Shared test fixtures for the `game` submodule test suites.

use slotmap::SlotMap;

use super::*;
use crate::state::{Actor, GameState, Grid};

/// 50×50 floor with no walls, observer in the middle.
pub(crate) fn open_room_fixture() -> (Grid, Pos) {
    (Grid::filled(50, 50, TileKind::Floor), Pos { y: 25, x: 25 })
}

/// Single floor corridor along row 5 blocked by a wall at x=6.
pub(crate) fn wall_occlusion_fixture() -> (Grid, Pos) {
    let mut grid = Grid::filled(11, 11, TileKind::Floor);
    for y in 1..10 {
        for x in 1..10 {
            grid.set_tile(Pos { y, x }, TileKind::Wall);
        }
    }
    for x in 1..10 {
        grid.set_tile(Pos { y: 5, x }, TileKind::Floor);
    }
    grid.set_tile(Pos { y: 5, x: 6 }, TileKind::Wall);
    (grid, Pos { y: 5, x: 3 })
}

/// Open floor surrounded by a one-tile wall ring.
pub(crate) fn walled_arena(width: usize, height: usize) -> Grid {
    let mut grid = Grid::new(width, height);
    for y in 1..(height as i32 - 1) {
        for x in 1..(width as i32 - 1) {
            grid.set_tile(Pos { y, x }, TileKind::Floor);
        }
    }
    grid
}

pub(crate) fn arena_state(player_tile: Pos, config: &DungeonConfig) -> GameState {
    GameState {
        grid: walled_arena(30, 30),
        rooms: Vec::new(),
        player: Actor::player(player_tile, &config.player),
        monsters: SlotMap::with_key(),
    }
}

pub(crate) fn add_monster(state: &mut GameState, config: &DungeonConfig, pos: Vec2) -> MonsterId {
    let kind = MonsterKindId(0);
    let mut monster =
        Actor::monster(kind, config.monsters.types.get(kind), pos.tile(), config.monsters.extent);
    monster.pos = pos;
    state.monsters.insert(monster)
}
