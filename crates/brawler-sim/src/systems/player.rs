//! Player system: feeds commands to the fighter and resolves what it reports.
//!
//! The fighter only knows enemy handles. Every handle it reports back is
//! looked up again here, so a target despawned mid-charge is a lookup miss
//! and produces nothing.

use hecs::{Entity, World};

use brawler_core::components::EnemyBody;
use brawler_core::config::CombatConfig;
use brawler_core::enums::{Direction, RemovalReason};
use brawler_core::events::CombatEvent;
use brawler_fighter::targeting::TargetCandidate;
use brawler_fighter::{FighterSignal, PlayerCombatant};

use crate::score::ScoreState;
use crate::systems::cleanup;

pub type Fighter = PlayerCombatant<Entity>;

/// Every enemy that can still be struck.
pub fn candidates(world: &World) -> Vec<TargetCandidate<Entity>> {
    world
        .query::<&EnemyBody>()
        .iter()
        .filter(|(_, body)| body.is_hittable())
        .map(|(entity, body)| TargetCandidate {
            handle: entity,
            x: body.position.x,
            hit_region: body.hit_region,
        })
        .collect()
}

/// Start an attack toward `direction` if the fighter is ready.
pub fn attack(world: &World, fighter: &mut Fighter, direction: Direction, events: &mut Vec<CombatEvent>) {
    if let Some(start) = fighter.attack(direction, candidates(world)) {
        events.push(CombatEvent::AttackStarted {
            direction: start.direction,
            zone: start.zone,
        });
    }
}

/// Advance the fighter by `dt_ms` and resolve its strike and whiff signals.
pub fn run(
    world: &mut World,
    fighter: &mut Fighter,
    config: &CombatConfig,
    dt_ms: f64,
    score: &mut ScoreState,
    events: &mut Vec<CombatEvent>,
) {
    for signal in fighter.advance(dt_ms) {
        match signal {
            FighterSignal::StrikeLanded { target } => {
                resolve_strike(world, config, target, score, events);
            }
            FighterSignal::Whiffed { direction } => {
                score.attacks_whiffed += 1;
                events.push(CombatEvent::AttackFailed { direction });
            }
        }
    }
}

/// Land a charged strike on `target` if it is still live and unspent.
fn resolve_strike(
    world: &mut World,
    config: &CombatConfig,
    target: Entity,
    score: &mut ScoreState,
    events: &mut Vec<CombatEvent>,
) {
    let (id, position, origin) = {
        let Ok(mut body) = world.get::<&mut EnemyBody>(target) else {
            tracing::debug!(?target, "strike target no longer exists");
            return;
        };
        if !body.mark_damaged() {
            tracing::debug!(enemy = %body.id, "strike target already spent");
            return;
        }
        (body.id, body.position, body.origin)
    };

    score.enemies_defeated += 1;
    events.push(CombatEvent::SuccessfulHit {
        enemy: id,
        position,
    });
    cleanup::begin_removal(world, config, target, id, origin, RemovalReason::Defeated, events);
}
