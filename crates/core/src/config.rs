//! Every tunable of the dungeon core, gathered in one structure.
//! Generation, spawning, visibility and the tick loop all receive their slice of
//! this at construction time instead of reading module constants.

use serde::{Deserialize, Serialize};

use crate::content::MonsterTable;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    pub map: MapConfig,
    pub visibility: VisibilityConfig,
    pub player: PlayerConfig,
    pub monsters: MonsterConfig,
    pub spawn: SpawnConfig,
}

/// Grid size and room placement. Corridors are always a single-bend L shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub width: usize,
    pub height: usize,
    pub room_attempts: u32,
    pub room_min_size: i32,
    pub room_max_size: i32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self { width: 50, height: 50, room_attempts: 30, room_min_size: 6, room_max_size: 10 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    pub radius: i32,
    pub ray_step_degrees: u32,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self { radius: 8, ray_step_degrees: 5 }
    }
}

/// Distances are in tiles, speeds in tiles per tick, durations in milliseconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub max_hp: i32,
    pub speed: f32,
    pub extent: f32,
    pub attack_reach: f32,
    pub attack_damage: i32,
    pub attack_effect_ms: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_hp: 100,
            speed: 5.0 / 32.0,
            extent: 1.0,
            attack_reach: 1.5,
            attack_damage: 10,
            attack_effect_ms: 200,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonsterConfig {
    pub extent: f32,
    pub attack_range: f32,
    pub attack_cooldown_ms: u64,
    pub types: MonsterTable,
}

impl Default for MonsterConfig {
    fn default() -> Self {
        Self {
            extent: 1.0,
            attack_range: 1.25,
            attack_cooldown_ms: 1000,
            types: MonsterTable::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpawnMode {
    /// Uniform count in `[min, max]` for every eligible room.
    PerRoomRange { min: u32, max: u32 },
    /// One monster per eligible room with the given probability.
    PerRoomChance { probability: f64 },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub mode: SpawnMode,
    pub exclusion_radius: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_live_monsters: Option<usize>,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            mode: SpawnMode::PerRoomRange { min: 0, max: 3 },
            exclusion_radius: 5.0,
            max_live_monsters: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("map {width}x{height} is too small")]
    MapTooSmall { width: usize, height: usize },
    #[error("room attempt budget must be positive")]
    NoRoomAttempts,
    #[error("room size range {min}..={max} is invalid")]
    InvalidRoomSize { min: i32, max: i32 },
    #[error("rooms up to {max} tiles do not fit a {width}x{height} map")]
    RoomsDoNotFit { max: i32, width: usize, height: usize },
    #[error("visibility radius must be positive, got {0}")]
    InvalidRadius(i32),
    #[error("ray step must be within 1..=360 degrees, got {0}")]
    InvalidRayStep(u32),
    #[error("{0} must be positive")]
    NonPositive(&'static str),
    #[error("{0} must not be negative")]
    Negative(&'static str),
    #[error("monster type table is empty")]
    EmptyMonsterTable,
    #[error("monster type table has {0} entries, more than ids can address")]
    TooManyMonsterTypes(usize),
    #[error("monster type table has no positive spawn weight")]
    ZeroSpawnWeight,
    #[error("spawn count range {min}..={max} is invalid")]
    InvalidSpawnRange { min: u32, max: u32 },
    #[error("spawn probability {0} is outside 0..=1")]
    InvalidSpawnProbability(f64),
}

impl DungeonConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let map = &self.map;
        if map.width < 3 || map.height < 3 {
            return Err(ConfigError::MapTooSmall { width: map.width, height: map.height });
        }
        if map.room_attempts == 0 {
            return Err(ConfigError::NoRoomAttempts);
        }
        if map.room_min_size < 2 || map.room_min_size > map.room_max_size {
            return Err(ConfigError::InvalidRoomSize {
                min: map.room_min_size,
                max: map.room_max_size,
            });
        }
        // Placement samples x in [0, width - size - 1].
        let max_size = map.room_max_size as usize;
        if max_size + 1 > map.width || max_size + 1 > map.height {
            return Err(ConfigError::RoomsDoNotFit {
                max: map.room_max_size,
                width: map.width,
                height: map.height,
            });
        }

        if self.visibility.radius <= 0 {
            return Err(ConfigError::InvalidRadius(self.visibility.radius));
        }
        if !(1..=360).contains(&self.visibility.ray_step_degrees) {
            return Err(ConfigError::InvalidRayStep(self.visibility.ray_step_degrees));
        }

        let player = &self.player;
        for (name, value) in [
            ("player.speed", player.speed),
            ("player.extent", player.extent),
            ("player.attack_reach", player.attack_reach),
            ("monsters.extent", self.monsters.extent),
            ("monsters.attack_range", self.monsters.attack_range),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive(name));
            }
        }
        if player.max_hp <= 0 {
            return Err(ConfigError::NonPositive("player.max_hp"));
        }
        if player.attack_damage <= 0 {
            return Err(ConfigError::NonPositive("player.attack_damage"));
        }

        self.monsters.types.validate()?;

        match self.spawn.mode {
            SpawnMode::PerRoomRange { min, max } if min > max => {
                return Err(ConfigError::InvalidSpawnRange { min, max });
            }
            SpawnMode::PerRoomChance { probability } if !(0.0..=1.0).contains(&probability) => {
                return Err(ConfigError::InvalidSpawnProbability(probability));
            }
            _ => {}
        }
        let radius = self.spawn.exclusion_radius;
        if radius.is_nan() || radius < 0.0 {
            return Err(ConfigError::Negative("spawn.exclusion_radius"));
        }

        Ok(())
    }
}
