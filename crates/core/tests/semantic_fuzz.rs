use std::collections::BTreeMap;

use dungeon_core::{DungeonConfig, Game, LogEvent, MonsterId, TickContext, TickOutcome, Vec2};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn run_fuzz_simulation(map_seed: u64, input_seed: u64, max_ticks: u64) -> Result<(), String> {
    let config = DungeonConfig::default();
    let cooldown = config.monsters.attack_cooldown_ms;
    let radius_squared = i64::from(config.visibility.radius).pow(2);
    let mut game = Game::new(map_seed, &config).map_err(|err| err.to_string())?;
    let mut rng = ChaCha8Rng::seed_from_u64(input_seed);

    let mut last_damage_ms: BTreeMap<MonsterId, u64> = BTreeMap::new();
    let mut seen_logs = game.log().len();
    let mut explored = game.state().grid.canonical_bytes();
    let axes = [-1.0_f32, -0.5, 0.0, 0.5, 1.0];

    for frame in 0..max_ticks {
        let now_ms = frame * 16;
        let ctx = TickContext {
            now_ms,
            direction: Vec2::new(choose(&mut rng, &axes), choose(&mut rng, &axes)),
            attack_pressed: rng.next_u64() % 5 == 0,
            quit_requested: false,
        };
        let outcome = game.tick(&ctx);

        for event in &game.log()[seen_logs..] {
            if let LogEvent::PlayerDamaged { by, .. } = event
                && let Some(previous) = last_damage_ms.insert(*by, now_ms)
                && now_ms - previous < cooldown
            {
                return Err(format!(
                    "Invariant failed: {by:?} hit twice within {cooldown}ms on map_seed {map_seed}"
                ));
            }
        }
        seen_logs = game.log().len();

        let state = game.state();
        if state.grid.is_wall(state.player.center_tile()) {
            return Err(format!("Invariant failed: player inside wall on map_seed {map_seed}"));
        }
        for (id, monster) in &state.monsters {
            if monster.hp > monster.max_hp || monster.hp <= 0 {
                return Err(format!(
                    "Invariant failed: {id:?} has hp {} on map_seed {map_seed}",
                    monster.hp
                ));
            }
            if state.grid.is_wall(monster.center_tile()) {
                return Err(format!("Invariant failed: {id:?} inside wall on map_seed {map_seed}"));
            }
        }

        let observer = state.player.center_tile();
        let bytes = state.grid.canonical_bytes();
        for (index, (before, after)) in explored.iter().zip(&bytes).enumerate().skip(8) {
            if before & 0b100 != 0 && after & 0b100 == 0 {
                return Err(format!(
                    "Invariant failed: explored flag {index} reset on map_seed {map_seed}"
                ));
            }
        }
        for pos in state.grid.positions() {
            if state.grid.is_visible(pos) && pos.distance_squared(observer) > radius_squared {
                return Err(format!(
                    "Invariant failed: {pos:?} visible beyond radius on map_seed {map_seed}"
                ));
            }
        }
        explored = bytes;

        if let TickOutcome::Finished(_) = outcome {
            break;
        }
    }

    Ok(())
}

#[test]
fn test_fuzz_game_simulation() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(20));
    let seeds = (any::<u64>(), any::<u64>());

    runner
        .run(&seeds, |(map_seed, input_seed)| {
            run_fuzz_simulation(map_seed, input_seed, 1_500).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("semantic fuzz simulation should preserve invariants");
}
