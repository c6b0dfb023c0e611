//! Snapshot system: queries the ECS world and builds a complete EncounterSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use brawler_core::actor::Actor;
use brawler_core::components::EnemyBody;
use brawler_core::enums::{Direction, EncounterPhase};
use brawler_core::events::CombatEvent;
use brawler_core::state::*;
use brawler_core::types::SimTime;

use crate::score::ScoreState;
use crate::systems::player::Fighter;

/// Build a complete EncounterSnapshot from the current encounter state.
pub fn build_snapshot(
    world: &World,
    fighter: &Fighter,
    time: &SimTime,
    phase: EncounterPhase,
    events: Vec<CombatEvent>,
    score: &ScoreState,
) -> EncounterSnapshot {
    EncounterSnapshot {
        time: *time,
        phase,
        player: build_player(world, fighter),
        enemies: build_enemies(world),
        events,
        score: ScoreView {
            enemies_spawned: score.enemies_spawned,
            enemies_defeated: score.enemies_defeated,
            hits_taken: score.hits_taken,
            attacks_whiffed: score.attacks_whiffed,
            survival_secs: time.elapsed_secs(),
        },
    }
}

fn build_player(world: &World, fighter: &Fighter) -> PlayerView {
    // The target is reported only while it still resolves to a live enemy.
    let target = fighter
        .target()
        .and_then(|entity| world.get::<&EnemyBody>(entity).ok().map(|body| body.id));

    PlayerView {
        position: fighter.position(),
        facing: fighter.facing(),
        state: fighter.state(),
        hp: fighter.hp(),
        max_hp: fighter.max_hp(),
        health_fraction: fighter.health_fraction(),
        hurt_zone: fighter.hurt_zone(),
        attack_zone_left: fighter.attack_zone(Direction::Left),
        attack_zone_right: fighter.attack_zone(Direction::Right),
        target,
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<&EnemyBody>()
        .iter()
        .map(|(_, body)| EnemyView {
            id: body.id,
            position: body.position,
            origin: body.origin,
            hit_region: body.hit_region,
            damaged: body.is_damaged(),
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}
