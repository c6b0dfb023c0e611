//! Spawn system: releases one enemy per elapsed spawn interval.

use hecs::{Entity, World};
use rand::Rng;

use brawler_core::config::CombatConfig;
use brawler_core::enums::Direction;
use brawler_core::events::CombatEvent;
use brawler_core::types::{EnemyId, Position};

use crate::score::ScoreState;
use crate::world_setup;

/// Accumulates encounter time toward the next spawn.
#[derive(Debug, Clone, Default)]
pub struct SpawnTimer {
    elapsed_ms: f64,
}

impl SpawnTimer {
    /// Accumulate `dt_ms` and return how many spawns came due.
    pub fn tick(&mut self, dt_ms: f64, interval_ms: f64) -> u32 {
        if interval_ms <= 0.0 {
            return 0;
        }
        self.elapsed_ms += dt_ms;
        let mut due = 0;
        while self.elapsed_ms >= interval_ms {
            self.elapsed_ms -= interval_ms;
            due += 1;
        }
        due
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
    }
}

/// Pick the side an enemy enters from, uniformly.
pub fn random_origin(rng: &mut impl Rng) -> Direction {
    if rng.gen_bool(0.5) {
        Direction::Left
    } else {
        Direction::Right
    }
}

/// Spawn one enemy, record it and announce it.
pub fn spawn(
    world: &mut World,
    config: &CombatConfig,
    next_enemy_id: &mut u32,
    origin: Direction,
    position: Position,
    score: &mut ScoreState,
    events: &mut Vec<CombatEvent>,
) -> Entity {
    let id = EnemyId(*next_enemy_id);
    *next_enemy_id += 1;

    let entity = world_setup::spawn_enemy(world, config, id, origin, position);
    score.enemies_spawned += 1;
    events.push(CombatEvent::EnemySpawned {
        enemy: id,
        position,
        origin,
    });
    tracing::debug!(%id, ?origin, x = position.x, "enemy spawned");
    entity
}

/// Advance the spawn timer and spawn any enemies that came due.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut impl Rng,
    config: &CombatConfig,
    timer: &mut SpawnTimer,
    next_enemy_id: &mut u32,
    player: Position,
    dt_ms: f64,
    score: &mut ScoreState,
    events: &mut Vec<CombatEvent>,
) {
    for _ in 0..timer.tick(dt_ms, config.spawn_interval_ms) {
        let origin = random_origin(rng);
        let position = world_setup::spawn_position(config, origin, player);
        spawn(world, config, next_enemy_id, origin, position, score, events);
    }
}
