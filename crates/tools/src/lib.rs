//! Helpers shared by the headless binaries.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dungeon_core::{ActorKind, DungeonConfig, Game, Pos, Room, TileKind};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

/// Reads a settings TOML file, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<DungeonConfig> {
    let Some(path) = path else {
        return Ok(DungeonConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
    let config: DungeonConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;
    Ok(config)
}

/// One string per grid row: `#` wall, `.` floor, `@` player, and the first
/// letter of each monster's type key.
pub fn render_ascii(game: &Game) -> Vec<String> {
    let state = game.state();
    let grid = &state.grid;
    let mut rows: Vec<Vec<char>> = (0..grid.height() as i32)
        .map(|y| {
            (0..grid.width() as i32)
                .map(|x| match grid.tile_at(Pos { y, x }) {
                    TileKind::Wall => '#',
                    TileKind::Floor => '.',
                })
                .collect()
        })
        .collect();

    let mut place = |pos: Pos, glyph: char| {
        if grid.in_bounds(pos) {
            rows[pos.y as usize][pos.x as usize] = glyph;
        }
    };
    for monster in state.monsters.values() {
        if let ActorKind::Monster(kind) = monster.kind {
            let key = &game.config().monsters.types.get(kind).key;
            place(monster.center_tile(), key.chars().next().unwrap_or('m'));
        }
    }
    place(state.player.center_tile(), '@');

    rows.into_iter().map(|row| row.into_iter().collect()).collect()
}

#[derive(Debug, Serialize)]
pub struct MonsterDump {
    pub kind: String,
    pub tile: Pos,
    pub hp: i32,
}

#[derive(Debug, Serialize)]
pub struct LevelDump {
    pub seed: u64,
    pub width: usize,
    pub height: usize,
    pub rooms: Vec<Room>,
    pub player: Pos,
    pub monsters: Vec<MonsterDump>,
    pub rows: Vec<String>,
}

impl LevelDump {
    pub fn from_game(game: &Game) -> Self {
        let state = game.state();
        let monsters = state
            .monsters
            .values()
            .filter_map(|monster| match monster.kind {
                ActorKind::Monster(kind) => Some(MonsterDump {
                    kind: game.config().monsters.types.get(kind).key.clone(),
                    tile: monster.center_tile(),
                    hp: monster.hp,
                }),
                ActorKind::Player => None,
            })
            .collect();
        Self {
            seed: game.seed(),
            width: state.grid.width(),
            height: state.grid.height(),
            rooms: state.rooms.clone(),
            player: state.player.center_tile(),
            monsters,
            rows: render_ascii(game),
        }
    }
}
