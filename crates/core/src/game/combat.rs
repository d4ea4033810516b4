//! Player attack geometry and the two-phase hit/kill resolution against the
//! monster arena. Monsters are only removed after every hit is applied, so
//! ids stay valid while the reach rectangle is evaluated.

use slotmap::SlotMap;
use tracing::debug;

use super::*;
use crate::state::Actor;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit {
    pub monster: MonsterId,
    pub remaining_hp: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kill {
    pub monster: MonsterId,
    pub kind: MonsterKindId,
}

impl Actor {
    /// Starts the attack effect and returns the reach square on the facing side.
    /// There is no cooldown; every call yields a rectangle.
    pub fn attack(&mut self, now_ms: u64, reach: f32) -> Rect {
        self.attack_started_ms = Some(now_ms);
        self.reach_rect(reach)
    }

    /// Square of side `reach` adjacent to the bounding box on the facing side,
    /// centered on the perpendicular axis.
    pub fn reach_rect(&self, reach: f32) -> Rect {
        let bounds = self.bounds();
        let center = bounds.center();
        let half = reach / 2.0;
        match self.facing {
            Facing::Right => Rect::new(bounds.right(), center.y - half, reach, reach),
            Facing::Left => Rect::new(bounds.x - reach, center.y - half, reach, reach),
            Facing::Up => Rect::new(center.x - half, bounds.y - reach, reach, reach),
            Facing::Down => Rect::new(center.x - half, bounds.bottom(), reach, reach),
        }
    }

    pub fn attack_effect_active(&self, now_ms: u64, duration_ms: u64) -> bool {
        self.attack_started_ms
            .is_some_and(|started| now_ms >= started && now_ms - started < duration_ms)
    }
}

/// Applies flat damage to every live monster that strictly overlaps `reach`
/// and removes the ones that died.
pub fn resolve_attack(
    reach: Rect,
    monsters: &mut SlotMap<MonsterId, Actor>,
    damage: i32,
) -> Vec<Kill> {
    let hits = strike(reach, monsters, damage);
    collect_kills(monsters, &hits)
}

pub(super) fn strike(
    reach: Rect,
    monsters: &mut SlotMap<MonsterId, Actor>,
    damage: i32,
) -> Vec<Hit> {
    let targets: Vec<MonsterId> = monsters
        .iter()
        .filter(|(_, monster)| monster.is_alive() && monster.bounds().overlaps(reach))
        .map(|(id, _)| id)
        .collect();

    targets
        .into_iter()
        .filter_map(|id| {
            let monster = monsters.get_mut(id)?;
            monster.hp -= damage;
            Some(Hit { monster: id, remaining_hp: monster.hp })
        })
        .collect()
}

pub(super) fn collect_kills(monsters: &mut SlotMap<MonsterId, Actor>, hits: &[Hit]) -> Vec<Kill> {
    let mut kills = Vec::new();
    for hit in hits.iter().filter(|hit| hit.remaining_hp <= 0) {
        let Some(monster) = monsters.remove(hit.monster) else {
            continue;
        };
        if let ActorKind::Monster(kind) = monster.kind {
            debug!(monster = ?hit.monster, ?kind, "monster killed");
            kills.push(Kill { monster: hit.monster, kind });
        }
    }
    kills
}
