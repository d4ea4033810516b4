//! Procedural level generation split into coherent submodules.

pub mod model;

mod generator;
mod layout;
mod random;
mod spawns;

use rand_chacha::rand_core::Rng;

use crate::config::MapConfig;
use crate::types::GenerationError;

pub use generator::LevelGenerator;
pub use model::{Level, MonsterSpawn, Room};
pub use spawns::spawn_monsters;

pub fn generate_level<R: Rng>(config: &MapConfig, rng: &mut R) -> Result<Level, GenerationError> {
    LevelGenerator::new(config).generate(rng)
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::{GenerationError, LevelGenerator, MapConfig};

    #[test]
    fn generate_level_matches_level_generator_output() {
        let config = MapConfig::default();
        let from_helper = super::generate_level(&config, &mut ChaCha8Rng::seed_from_u64(123))
            .expect("default map places rooms");
        let from_generator = LevelGenerator::new(&config)
            .generate(&mut ChaCha8Rng::seed_from_u64(123))
            .expect("default map places rooms");

        assert_eq!(from_helper, from_generator);
    }

    #[test]
    fn generate_level_reports_an_oversized_room_instead_of_panicking() {
        let config = MapConfig {
            width: 6,
            height: 6,
            room_attempts: 5,
            room_min_size: 6,
            room_max_size: 6,
        };
        let result = super::generate_level(&config, &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(result, Err(GenerationError::RoomsDoNotFit { max: 6, width: 6, height: 6 }));
    }
}
