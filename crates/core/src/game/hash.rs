//! Stable snapshot hashing for deterministic verification.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.tick);
        hasher.write_u8(match self.outcome {
            None => 0,
            Some(RunOutcome::Defeat) => 1,
            Some(RunOutcome::Quit) => 2,
        });
        write_actor(&mut hasher, &self.state.player);
        hasher.write_usize(self.state.monsters.len());
        for monster in self.state.monsters.values() {
            write_actor(&mut hasher, monster);
        }
        hasher.write(&self.state.grid.canonical_bytes());
        hasher.finish()
    }
}

fn write_actor(hasher: &mut Xxh3, actor: &Actor) {
    if let ActorKind::Monster(kind) = actor.kind {
        hasher.write_u16(kind.0);
    }
    hasher.write_u32(actor.pos.x.to_bits());
    hasher.write_u32(actor.pos.y.to_bits());
    hasher.write_i32(actor.hp);
    hasher.write_u8(actor.facing as u8);
    hasher.write_u64(actor.attack_started_ms.unwrap_or(u64::MAX));
    hasher.write_u64(actor.last_attack_ms.unwrap_or(u64::MAX));
}
