use slotmap::SlotMap;

use crate::config::PlayerConfig;
use crate::content::MonsterTemplate;
use crate::mapgen::Room;
use crate::types::*;

/// Fixed-size tile matrix with per-tile sight flags. Anything outside the
/// matrix reads as an unseen wall.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
    visible: Vec<bool>,
    explored: Vec<bool>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, TileKind::Wall)
    }

    pub fn filled(width: usize, height: usize, tile: TileKind) -> Self {
        Self {
            width,
            height,
            tiles: vec![tile; width * height],
            visible: vec![false; width * height],
            explored: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if !self.in_bounds(pos) {
            return TileKind::Wall;
        }
        self.tiles[self.index(pos)]
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.tile_at(pos) == TileKind::Wall
    }

    pub fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    pub fn is_visible(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.visible[self.index(pos)]
    }

    pub fn is_explored(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.explored[self.index(pos)]
    }

    pub fn clear_visible(&mut self) {
        self.visible.fill(false);
    }

    /// Marks a tile visible for this tick and explored for good.
    pub fn mark_seen(&mut self, pos: Pos) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.visible[idx] = true;
        self.explored[idx] = true;
    }

    pub fn floor_count(&self) -> usize {
        self.tiles.iter().filter(|&&tile| tile == TileKind::Floor).count()
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| Pos { y, x }))
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.tiles.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for (idx, tile) in self.tiles.iter().enumerate() {
            let mut cell = match tile {
                TileKind::Wall => 0_u8,
                TileKind::Floor => 1,
            };
            cell |= u8::from(self.visible[idx]) << 1;
            cell |= u8::from(self.explored[idx]) << 2;
            bytes.push(cell);
        }
        bytes
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

/// Player and monsters share one record; `kind` tells them apart.
#[derive(Clone, Debug, PartialEq)]
pub struct Actor {
    pub kind: ActorKind,
    /// Top-left corner of the bounding box.
    pub pos: Vec2,
    pub extent: f32,
    pub hp: i32,
    pub max_hp: i32,
    pub speed: f32,
    pub facing: Facing,
    /// Player only: start of the current attack effect window.
    pub attack_started_ms: Option<u64>,
    /// Monsters only: time of the last damaging attack.
    pub last_attack_ms: Option<u64>,
}

impl Actor {
    pub fn player(tile: Pos, config: &PlayerConfig) -> Self {
        Self {
            kind: ActorKind::Player,
            pos: Vec2::new(tile.x as f32, tile.y as f32),
            extent: config.extent,
            hp: config.max_hp,
            max_hp: config.max_hp,
            speed: config.speed,
            facing: Facing::default(),
            attack_started_ms: None,
            last_attack_ms: None,
        }
    }

    pub fn monster(
        kind: MonsterKindId,
        template: &MonsterTemplate,
        tile: Pos,
        extent: f32,
    ) -> Self {
        Self {
            kind: ActorKind::Monster(kind),
            pos: Vec2::new(tile.x as f32, tile.y as f32),
            extent,
            hp: template.max_hp,
            max_hp: template.max_hp,
            speed: template.speed,
            facing: Facing::default(),
            attack_started_ms: None,
            last_attack_ms: None,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.extent, self.extent)
    }

    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    pub fn center_tile(&self) -> Pos {
        self.center().tile()
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn health_fraction(&self) -> f32 {
        if self.max_hp <= 0 {
            return 0.0;
        }
        (self.hp.max(0) as f32 / self.max_hp as f32).min(1.0)
    }
}

pub struct GameState {
    pub grid: Grid,
    pub rooms: Vec<Room>,
    pub player: Actor,
    pub monsters: SlotMap<MonsterId, Actor>,
}

impl GameState {
    /// Monsters whose center tile is lit this tick.
    pub fn visible_monsters(&self) -> impl Iterator<Item = (MonsterId, &Actor)> {
        self.monsters.iter().filter(|(_, monster)| self.grid.is_visible(monster.center_tile()))
    }
}
