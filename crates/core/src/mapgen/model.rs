//! Public data models for generated levels and monster spawns.

use serde::{Deserialize, Serialize};

use crate::state::Grid;
use crate::types::{MonsterKindId, Pos};

/// Axis-aligned room rectangle in tile coordinates. The outer ring stays wall;
/// the interior `x1+1..=x2-1` × `y1+1..=y2-1` is carved to floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Room {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x1: x, y1: y, x2: x + width, y2: y + height }
    }

    pub fn center(self) -> Pos {
        Pos { y: (self.y1 + self.y2) / 2, x: (self.x1 + self.x2) / 2 }
    }

    /// Inclusive test: rooms sharing an edge also intersect.
    pub fn intersects(self, other: &Room) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }

    pub fn contains(self, pos: Pos) -> bool {
        pos.x >= self.x1 && pos.x <= self.x2 && pos.y >= self.y1 && pos.y <= self.y2
    }

    pub fn interior_contains(self, pos: Pos) -> bool {
        pos.x > self.x1 && pos.x < self.x2 && pos.y > self.y1 && pos.y < self.y2
    }

    pub fn interior(self) -> impl Iterator<Item = Pos> {
        ((self.y1 + 1)..self.y2).flat_map(move |y| ((self.x1 + 1)..self.x2).map(move |x| Pos { y, x }))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    pub grid: Grid,
    /// Acceptance order; each room is corridor-linked to the one before it.
    pub rooms: Vec<Room>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterSpawn {
    pub kind: MonsterKindId,
    pub tile: Pos,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_truncates_toward_the_top_left() {
        let room = Room::new(3, 4, 7, 6);
        assert_eq!(room.center(), Pos { y: 7, x: 6 });
        assert!(room.interior_contains(room.center()));
    }

    #[test]
    fn rooms_sharing_an_edge_intersect() {
        let left = Room::new(0, 0, 6, 6);
        let right = Room::new(6, 0, 6, 6);
        let apart = Room::new(7, 0, 6, 6);
        assert!(left.intersects(&right));
        assert!(!left.intersects(&apart));
    }

    #[test]
    fn interior_excludes_the_outer_ring() {
        let room = Room::new(0, 0, 4, 3);
        let tiles: Vec<Pos> = room.interior().collect();
        assert_eq!(tiles.len(), 3 * 2);
        assert!(tiles.iter().all(|&pos| room.interior_contains(pos)));
    }
}
