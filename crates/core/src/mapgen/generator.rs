//! Rejection-sampled room placement composed with corridor carving.

use rand_chacha::rand_core::Rng;
use tracing::{debug, info};

use crate::config::MapConfig;
use crate::state::Grid;
use crate::types::GenerationError;

use super::layout::{carve_corridor, carve_room, sample_room};
use super::model::{Level, Room};

pub struct LevelGenerator {
    config: MapConfig,
}

impl LevelGenerator {
    pub fn new(config: &MapConfig) -> Self {
        Self { config: config.clone() }
    }

    /// Runs the full attempt budget. An intersecting candidate burns its attempt;
    /// it is never retried, so fewer rooms than attempts is normal.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Level, GenerationError> {
        self.check_room_fit()?;
        let mut grid = Grid::new(self.config.width, self.config.height);
        let mut rooms: Vec<Room> = Vec::new();

        for attempt in 0..self.config.room_attempts {
            let candidate = sample_room(rng, &self.config);
            if rooms.iter().any(|accepted| candidate.intersects(accepted)) {
                debug!(attempt, ?candidate, "room candidate rejected");
                continue;
            }

            carve_room(&mut grid, &candidate);
            if let Some(previous) = rooms.last() {
                carve_corridor(&mut grid, previous.center(), candidate.center());
            }
            rooms.push(candidate);
        }

        if rooms.is_empty() {
            return Err(GenerationError::NoRoomsPlaced { attempts: self.config.room_attempts });
        }

        info!(
            rooms = rooms.len(),
            attempts = self.config.room_attempts,
            floor_tiles = grid.floor_count(),
            "level generated"
        );
        Ok(Level { grid, rooms })
    }

    /// Placement samples the top-left corner in `[0, width - size - 1]`, so the
    /// largest room plus one tile must fit on both axes.
    fn check_room_fit(&self) -> Result<(), GenerationError> {
        let config = &self.config;
        if config.room_min_size < 1 || config.room_min_size > config.room_max_size {
            return Err(GenerationError::InvalidRoomSize {
                min: config.room_min_size,
                max: config.room_max_size,
            });
        }
        let needed = i64::from(config.room_max_size) + 1;
        let fits = |extent: usize| i64::try_from(extent).is_ok_and(|extent| needed <= extent);
        if !fits(config.width) || !fits(config.height) {
            return Err(GenerationError::RoomsDoNotFit {
                max: config.room_max_size,
                width: config.width,
                height: config.height,
            });
        }
        Ok(())
    }
}
