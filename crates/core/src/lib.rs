pub mod config;
pub mod content;
pub mod game;
pub mod mapgen;
pub mod state;
pub mod types;

pub use config::{ConfigError, DungeonConfig};
pub use content::{MonsterTable, MonsterTemplate};
pub use game::Game;
pub use mapgen::{Level, LevelGenerator, MonsterSpawn, Room};
pub use state::{Actor, GameState, Grid};
pub use types::*;
