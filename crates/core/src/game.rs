//! Deterministic tick loop over a single generated level.
//! One call to [`Game::tick`] is one frame: the player moves, monsters act,
//! sight is recomputed and a pending attack is resolved, in that order.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use slotmap::SlotMap;
use tracing::{debug, info};

use crate::config::DungeonConfig;
use crate::mapgen::{Level, LevelGenerator, spawn_monsters};
use crate::state::{Actor, GameState};
use crate::types::*;

mod combat;
mod hash;
mod monsters;
mod movement;
mod visibility;

#[cfg(test)]
pub(crate) mod test_support;

pub use combat::{Hit, Kill, resolve_attack};
pub use monsters::MonsterState;
pub use visibility::compute_visibility;

pub struct Game {
    seed: u64,
    tick: u64,
    config: DungeonConfig,
    state: GameState,
    log: Vec<LogEvent>,
    outcome: Option<RunOutcome>,
}

impl Game {
    /// Generates a level from `seed` and populates it. A failed generation is
    /// returned so the caller can retry with another seed.
    pub fn new(seed: u64, config: &DungeonConfig) -> Result<Self, GameError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let level = LevelGenerator::new(&config.map).generate(&mut rng)?;
        Ok(Self::populate(seed, config, level, &mut rng))
    }

    /// Starts a run on a hand-built state. Nothing is generated or spawned.
    pub fn from_state(seed: u64, config: &DungeonConfig, state: GameState) -> Self {
        let mut game = Self {
            seed,
            tick: 0,
            config: config.clone(),
            state,
            log: Vec::new(),
            outcome: None,
        };
        game.refresh_visibility();
        game
    }

    fn populate(seed: u64, config: &DungeonConfig, level: Level, rng: &mut ChaCha8Rng) -> Self {
        let Level { grid, rooms } = level;
        // Generation guarantees at least one room.
        let spawn_tile = rooms.first().map(|room| room.center()).unwrap_or_default();
        let player = Actor::player(spawn_tile, &config.player);

        let spawns =
            spawn_monsters(&rooms, spawn_tile, &config.spawn, &config.monsters.types, rng);
        let mut monsters = SlotMap::with_key();
        for spawn in &spawns {
            let template = config.monsters.types.get(spawn.kind);
            monsters.insert(Actor::monster(
                spawn.kind,
                template,
                spawn.tile,
                config.monsters.extent,
            ));
        }

        let event = LogEvent::LevelGenerated { rooms: rooms.len(), monsters: monsters.len() };
        info!(seed, rooms = rooms.len(), monsters = monsters.len(), "run started");
        let mut game =
            Self::from_state(seed, config, GameState { grid, rooms, player, monsters });
        game.log.push(event);
        game
    }

    pub fn tick(&mut self, ctx: &TickContext) -> TickOutcome {
        if let Some(outcome) = self.outcome {
            return TickOutcome::Finished(outcome);
        }
        self.tick += 1;

        let direction = movement::clamp_direction(ctx.direction);
        let player = &mut self.state.player;
        let speed = player.speed;
        player.update_facing(direction);
        player.move_by(direction.x * speed, direction.y * speed, &self.state.grid);

        self.update_monsters(ctx.now_ms);
        self.refresh_visibility();

        if ctx.attack_pressed {
            self.player_attack(ctx.now_ms);
        }

        let outcome = if !self.state.player.is_alive() {
            Some(RunOutcome::Defeat)
        } else if ctx.quit_requested {
            Some(RunOutcome::Quit)
        } else {
            None
        };
        match outcome {
            Some(outcome) => {
                info!(?outcome, tick = self.tick, "run finished");
                self.outcome = Some(outcome);
                self.log.push(LogEvent::RunFinished(outcome));
                TickOutcome::Finished(outcome)
            }
            None => TickOutcome::Running,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        self.outcome
    }

    pub fn attack_effect_active(&self, now_ms: u64) -> bool {
        self.state.player.attack_effect_active(now_ms, self.config.player.attack_effect_ms)
    }

    fn update_monsters(&mut self, now_ms: u64) {
        let player_center = self.state.player.center();
        let rules = &self.config.monsters;
        for (id, monster) in self.state.monsters.iter_mut() {
            let ActorKind::Monster(kind) = monster.kind else {
                continue;
            };
            let damage = rules.types.get(kind).damage;
            let Some(amount) = monsters::update_monster(
                monster,
                damage,
                rules,
                player_center,
                &self.state.grid,
                now_ms,
            ) else {
                continue;
            };
            self.state.player.hp -= amount;
            debug!(monster = ?id, amount, remaining_hp = self.state.player.hp, "player damaged");
            self.log.push(LogEvent::PlayerDamaged {
                by: id,
                amount,
                remaining_hp: self.state.player.hp,
            });
        }
    }

    fn refresh_visibility(&mut self) {
        let observer = self.state.player.center_tile();
        let sight = &self.config.visibility;
        compute_visibility(&mut self.state.grid, observer, sight.radius, sight.ray_step_degrees);
    }

    fn player_attack(&mut self, now_ms: u64) {
        let reach = self.state.player.attack(now_ms, self.config.player.attack_reach);
        self.log.push(LogEvent::PlayerAttacked { facing: self.state.player.facing });

        let hits = combat::strike(reach, &mut self.state.monsters, self.config.player.attack_damage);
        for hit in &hits {
            self.log.push(LogEvent::MonsterHit {
                monster: hit.monster,
                remaining_hp: hit.remaining_hp,
            });
        }
        for kill in combat::collect_kills(&mut self.state.monsters, &hits) {
            self.log.push(LogEvent::MonsterKilled { monster: kill.monster, kind: kill.kind });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{add_monster, arena_state};
    use super::*;

    fn held(direction: Vec2, now_ms: u64) -> TickContext {
        TickContext { now_ms, direction, ..TickContext::default() }
    }

    #[test]
    fn new_game_spawns_player_at_first_room_center() {
        let game = Game::new(7, &DungeonConfig::default()).expect("default config generates");
        let state = game.state();
        let first = state.rooms[0];
        assert_eq!(state.player.pos, Vec2::new(first.center().x as f32, first.center().y as f32));
        assert!(state.grid.is_visible(state.player.center_tile()));
        assert!(state.monsters.values().all(|monster| !first.contains(monster.pos.tile())));
        assert!(matches!(game.log(), [LogEvent::LevelGenerated { .. }]));
    }

    #[test]
    fn invalid_config_is_rejected_before_generation() {
        let mut config = DungeonConfig::default();
        config.visibility.radius = 0;
        assert!(matches!(Game::new(1, &config), Err(GameError::Config(_))));
    }

    #[test]
    fn zero_attempt_budget_fails_validation() {
        let mut config = DungeonConfig::default();
        config.map.room_attempts = 0;
        assert!(Game::new(1, &config).is_err());
    }

    #[test]
    fn player_moves_by_speed_per_axis() {
        let config = DungeonConfig::default();
        let mut game = Game::from_state(1, &config, arena_state(Pos { y: 10, x: 10 }, &config));
        game.tick(&held(Vec2::new(1.0, 1.0), 16));
        let speed = config.player.speed;
        assert_eq!(game.state().player.pos, Vec2::new(10.0 + speed, 10.0 + speed));
        assert_eq!(game.state().player.facing, Facing::Down);
    }

    #[test]
    fn attack_hits_monster_on_the_reach_rectangle_once() {
        let config = DungeonConfig::default();
        let mut state = arena_state(Pos { y: 10, x: 10 }, &config);
        state.player.facing = Facing::Right;
        let monster = add_monster(&mut state, &config, Vec2::new(11.2, 10.0));
        state.monsters[monster].hp = 15;
        let mut game = Game::from_state(1, &config, state);

        let attack = TickContext { now_ms: 50, attack_pressed: true, ..TickContext::default() };
        assert_eq!(game.tick(&attack), TickOutcome::Running);
        assert_eq!(game.state().monsters[monster].hp, 5);
        assert!(game.attack_effect_active(100));
        assert!(!game.attack_effect_active(250));

        game.tick(&TickContext { now_ms: 300, attack_pressed: true, ..TickContext::default() });
        assert!(!game.state().monsters.contains_key(monster));
        assert!(game.log().contains(&LogEvent::MonsterKilled { monster, kind: MonsterKindId(0) }));
    }

    #[test]
    fn defeat_finishes_the_run_and_later_ticks_are_noops() {
        let config = DungeonConfig::default();
        let mut state = arena_state(Pos { y: 10, x: 10 }, &config);
        state.player.hp = 3;
        add_monster(&mut state, &config, Vec2::new(11.0, 10.0));
        let mut game = Game::from_state(1, &config, state);

        assert_eq!(game.tick(&held(Vec2::ZERO, 0)), TickOutcome::Finished(RunOutcome::Defeat));
        let hash = game.snapshot_hash();
        let tick = game.current_tick();
        assert_eq!(
            game.tick(&held(Vec2::new(1.0, 0.0), 5_000)),
            TickOutcome::Finished(RunOutcome::Defeat)
        );
        assert_eq!(game.current_tick(), tick);
        assert_eq!(game.snapshot_hash(), hash);
        assert_eq!(game.log().last(), Some(&LogEvent::RunFinished(RunOutcome::Defeat)));
    }

    #[test]
    fn quit_request_finishes_the_run() {
        let config = DungeonConfig::default();
        let mut game = Game::from_state(1, &config, arena_state(Pos { y: 4, x: 4 }, &config));
        let quit = TickContext { quit_requested: true, ..TickContext::default() };
        assert_eq!(game.tick(&quit), TickOutcome::Finished(RunOutcome::Quit));
        assert_eq!(game.outcome(), Some(RunOutcome::Quit));
    }
}
