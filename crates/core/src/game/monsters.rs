//! Two-state monster behavior: direct-line pursuit and cooldown-gated attacks.
//! There is no pathfinding; a monster pressed against a wall simply stalls.

use super::*;
use crate::config::MonsterConfig;
use crate::state::{Actor, Grid};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonsterState {
    Pursue,
    Attack,
}

impl MonsterState {
    pub fn select(distance: f32, attack_range: f32) -> Self {
        if distance <= attack_range { Self::Attack } else { Self::Pursue }
    }
}

/// Advances one monster by a tick and returns the damage it dealt, if any.
pub(super) fn update_monster(
    monster: &mut Actor,
    damage: i32,
    rules: &MonsterConfig,
    player_center: Vec2,
    grid: &Grid,
    now_ms: u64,
) -> Option<i32> {
    let center = monster.center();
    match MonsterState::select(center.distance(player_center), rules.attack_range) {
        MonsterState::Pursue => {
            let step = Vec2::new(player_center.x - center.x, player_center.y - center.y)
                .normalized()
                .scaled(monster.speed);
            monster.move_by(step.x, step.y, grid);
            None
        }
        MonsterState::Attack => {
            let ready = monster
                .last_attack_ms
                .is_none_or(|last| now_ms.saturating_sub(last) >= rules.attack_cooldown_ms);
            if !ready {
                return None;
            }
            monster.last_attack_ms = Some(now_ms);
            Some(damage)
        }
    }
}
