//! Monster spawn selection and placement for a freshly generated level.

use rand_chacha::rand_core::Rng;
use tracing::debug;

use crate::config::{SpawnConfig, SpawnMode};
use crate::content::MonsterTable;
use crate::types::Pos;

use super::model::{MonsterSpawn, Room};
use super::random::{random_range, random_unit};

/// Places monsters in every room except the one holding the player spawn.
/// Candidates inside the exclusion radius are dropped, not re-rolled.
pub fn spawn_monsters<R: Rng>(
    rooms: &[Room],
    player_spawn: Pos,
    config: &SpawnConfig,
    table: &MonsterTable,
    rng: &mut R,
) -> Vec<MonsterSpawn> {
    let cap = config.max_live_monsters.unwrap_or(usize::MAX);
    let exclusion_squared = f64::from(config.exclusion_radius).powi(2);
    let mut spawns = Vec::new();

    for room in rooms {
        if room.contains(player_spawn) {
            continue;
        }

        let requested = requested_count(config.mode, rng);
        for _ in 0..requested {
            if spawns.len() >= cap {
                debug!(cap, "live monster cap reached");
                return spawns;
            }

            let tile = Pos {
                y: random_range(rng, room.y1 + 1, room.y2 - 1),
                x: random_range(rng, room.x1 + 1, room.x2 - 1),
            };
            if (tile.distance_squared(player_spawn) as f64) < exclusion_squared {
                debug!(?tile, "spawn candidate too close to the player");
                continue;
            }

            let kind = table.pick_weighted(rng.next_u64());
            spawns.push(MonsterSpawn { kind, tile });
        }
    }

    spawns
}

fn requested_count<R: Rng>(mode: SpawnMode, rng: &mut R) -> u32 {
    match mode {
        SpawnMode::PerRoomRange { min, max } => {
            random_range(rng, min as i32, max as i32).max(0) as u32
        }
        SpawnMode::PerRoomChance { probability } => u32::from(random_unit(rng) < probability),
    }
}
