//! Encounter director, the core of the game.
//!
//! `EncounterDirector` owns the hecs ECS world holding the live enemies,
//! exclusively owns the player fighter, processes player commands, runs all
//! systems and produces `EncounterSnapshot`s. Completely headless, enabling
//! deterministic testing: randomness comes from an injected `ChaCha8Rng` and
//! time from the `dt_ms` argument of `tick`.

use std::collections::VecDeque;

use glam::DVec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use brawler_core::actor::Actor;
use brawler_core::commands::PlayerCommand;
use brawler_core::config::CombatConfig;
use brawler_core::enums::{Direction, EncounterPhase, RemovalReason};
use brawler_core::events::CombatEvent;
use brawler_core::state::EncounterSnapshot;
use brawler_core::types::{sanitize_dt, EnemyId, SimTime};
use brawler_fighter::profiles::FighterProfile;

use crate::score::ScoreState;
use crate::systems;
use crate::systems::player::Fighter;
use crate::systems::spawner::SpawnTimer;
use crate::world_setup;

/// Configuration for starting a new encounter.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same encounter.
    pub seed: u64,
    /// Combat tuning.
    pub combat: CombatConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            combat: CombatConfig::default(),
        }
    }
}

/// The encounter director. Owns the ECS world, the player and all encounter state.
pub struct EncounterDirector {
    world: World,
    config: CombatConfig,
    player: Fighter,
    time: SimTime,
    phase: EncounterPhase,
    rng: ChaCha8Rng,
    next_enemy_id: u32,
    spawn_timer: SpawnTimer,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<(Entity, EnemyId, RemovalReason)>,
    events: Vec<CombatEvent>,
    score: ScoreState,
}

impl EncounterDirector {
    /// Create a new director with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self::with_rng(config.combat, ChaCha8Rng::seed_from_u64(config.seed))
    }

    /// Create a new director drawing spawn directions from `rng`.
    pub fn with_rng(config: CombatConfig, rng: ChaCha8Rng) -> Self {
        let player = new_fighter(&config);
        tracing::info!(
            arena_width = config.arena_width,
            spawn_interval_ms = config.spawn_interval_ms,
            "encounter started"
        );
        Self {
            world: World::new(),
            config,
            player,
            time: SimTime::default(),
            phase: EncounterPhase::default(),
            rng,
            next_enemy_id: 0,
            spawn_timer: SpawnTimer::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            score: ScoreState::default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the encounter by `dt_ms` milliseconds and return the resulting snapshot.
    ///
    /// Queued commands are always processed. Nothing advances while paused or
    /// after the player died, or when `dt_ms` is not a positive finite number.
    pub fn tick(&mut self, dt_ms: f64) -> EncounterSnapshot {
        let dt_ms = sanitize_dt(dt_ms);
        self.process_commands();

        if self.phase == EncounterPhase::Active && dt_ms > 0.0 {
            self.run_systems(dt_ms);
            self.time.advance(dt_ms);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.player,
            &self.time,
            self.phase,
            events,
            &self.score,
        )
    }

    /// Spawn an enemy on a random side, as the spawn timer does.
    pub fn spawn_enemy(&mut self) -> Entity {
        let origin = systems::spawner::random_origin(&mut self.rng);
        let position = world_setup::spawn_position(&self.config, origin, self.player.position());
        systems::spawner::spawn(
            &mut self.world,
            &self.config,
            &mut self.next_enemy_id,
            origin,
            position,
            &mut self.score,
            &mut self.events,
        )
    }

    /// Spawn an enemy coming from `origin` at horizontal position `x`, level with the player.
    pub fn spawn_enemy_at(&mut self, origin: Direction, x: f64) -> Entity {
        let position = DVec2::new(x, self.player.position().y);
        systems::spawner::spawn(
            &mut self.world,
            &self.config,
            &mut self.next_enemy_id,
            origin,
            position,
            &mut self.score,
            &mut self.events,
        )
    }

    /// Get the player fighter.
    pub fn player(&self) -> &Fighter {
        &self.player
    }

    /// Get the current encounter phase.
    pub fn phase(&self) -> EncounterPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the combat tuning in effect.
    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the running score.
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Number of enemies in the world, including those playing their knock-out.
    pub fn enemy_count(&self) -> usize {
        self.world.len() as usize
    }

    /// Mutable world access for tests that need to remove enemies behind the director's back.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Attack { direction } => {
                if self.phase == EncounterPhase::Active {
                    systems::player::attack(&self.world, &mut self.player, direction, &mut self.events);
                }
            }
            PlayerCommand::Special => {
                if self.phase == EncounterPhase::Active {
                    self.player.special();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == EncounterPhase::Active {
                    self.phase = EncounterPhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == EncounterPhase::Paused {
                    self.phase = EncounterPhase::Active;
                }
            }
            PlayerCommand::Restart => self.restart(),
        }
    }

    /// Reset the player, enemies, timers and score. The RNG stream continues.
    fn restart(&mut self) {
        self.world.clear();
        self.player = new_fighter(&self.config);
        self.time = SimTime::default();
        self.phase = EncounterPhase::Active;
        self.next_enemy_id = 0;
        self.spawn_timer.reset();
        self.events.clear();
        self.score = ScoreState::default();
        tracing::info!("encounter restarted");
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt_ms: f64) {
        // 1. Player state machine (strike and whiff resolution)
        systems::player::run(
            &mut self.world,
            &mut self.player,
            &self.config,
            dt_ms,
            &mut self.score,
            &mut self.events,
        );
        // 2. Spawn timer
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &self.config,
            &mut self.spawn_timer,
            &mut self.next_enemy_id,
            self.player.position(),
            dt_ms,
            &mut self.score,
            &mut self.events,
        );
        // 3. Enemy movement
        systems::movement::run(&mut self.world, dt_ms);
        // 4. Enemy contact against the player
        let died = systems::contact::run(
            &mut self.world,
            &mut self.player,
            &self.config,
            &mut self.score,
            &mut self.events,
        );
        if died {
            self.phase = EncounterPhase::Defeated;
            tracing::info!(
                survival_secs = (self.time.elapsed_ms + dt_ms) / 1000.0,
                defeated = self.score.enemies_defeated,
                "encounter over"
            );
        }
        // 5. Cleanup (knock-out timers, off-arena)
        systems::cleanup::run(
            &mut self.world,
            &self.config,
            dt_ms,
            &mut self.despawn_buffer,
            &mut self.events,
        );
    }
}

fn new_fighter(config: &CombatConfig) -> Fighter {
    Fighter::new(
        FighterProfile::from_config(config),
        DVec2::new(config.player_start_x, config.player_start_y),
    )
}
