use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

use crate::config::ConfigError;

new_key_type! {
    pub struct MonsterId;
}

/// Integer tile coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn distance_squared(self, other: Pos) -> i64 {
        let dx = i64::from(self.x - other.x);
        let dy = i64::from(self.y - other.y);
        dx * dx + dy * dy
    }
}

/// Continuous world coordinate in tile units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(self, other: Vec2) -> f32 {
        Vec2::new(other.x - self.x, other.y - self.y).length()
    }

    /// Unit vector in the same direction, or zero for a zero-length vector.
    pub fn normalized(self) -> Vec2 {
        let length = self.length();
        if length <= f32::EPSILON {
            return Vec2::ZERO;
        }
        Vec2::new(self.x / length, self.y / length)
    }

    pub fn scaled(self, factor: f32) -> Vec2 {
        Vec2::new(self.x * factor, self.y * factor)
    }

    /// Tile containing this point.
    pub fn tile(self) -> Pos {
        Pos { y: self.y.floor() as i32, x: self.x.floor() as i32 }
    }
}

/// Axis-aligned rectangle in world tile units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    pub fn center(self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Strict overlap; rectangles that only share an edge do not overlap.
    pub fn overlaps(self, other: Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Wall,
    Floor,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

/// Index into the monster type table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonsterKindId(pub u16);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActorKind {
    Player,
    Monster(MonsterKindId),
}

/// Everything the simulation reads from its collaborators for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickContext {
    pub now_ms: u64,
    /// Two signed axes, each clamped to `[-1, 1]` before use.
    pub direction: Vec2,
    /// Edge event: true only on the tick the attack button went down.
    pub attack_pressed: bool,
    pub quit_requested: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Defeat,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    Finished(RunOutcome),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    LevelGenerated { rooms: usize, monsters: usize },
    PlayerAttacked { facing: Facing },
    MonsterHit { monster: MonsterId, remaining_hp: i32 },
    MonsterKilled { monster: MonsterId, kind: MonsterKindId },
    PlayerDamaged { by: MonsterId, amount: i32, remaining_hp: i32 },
    RunFinished(RunOutcome),
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("no room could be placed in {attempts} attempts")]
    NoRoomsPlaced { attempts: u32 },
    #[error("room size range {min}..={max} is invalid")]
    InvalidRoomSize { min: i32, max: i32 },
    #[error("rooms up to {max} tiles do not fit a {width}x{height} map")]
    RoomsDoNotFit { max: i32, width: usize, height: usize },
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
