//! Contact system: enemy hit regions against the player's hurt zone.
//!
//! An overlapping enemy is marked damaged before the hit is handed to the
//! fighter, so it is spent whether or not the fighter accepts the hit and can
//! never also be struck by the player afterward.

use hecs::{Entity, World};

use brawler_core::components::EnemyBody;
use brawler_core::config::CombatConfig;
use brawler_core::enums::{Direction, RemovalReason};
use brawler_core::events::CombatEvent;
use brawler_core::types::EnemyId;
use brawler_fighter::HitOutcome;

use crate::score::ScoreState;
use crate::systems::cleanup;
use crate::systems::player::Fighter;

/// Apply enemy contact to the player. Returns true if the player died.
pub fn run(
    world: &mut World,
    fighter: &mut Fighter,
    config: &CombatConfig,
    score: &mut ScoreState,
    events: &mut Vec<CombatEvent>,
) -> bool {
    let hurt_zone = fighter.hurt_zone();
    let mut contacts: Vec<(Entity, EnemyId, Direction)> = Vec::new();

    for (entity, body) in world.query_mut::<&mut EnemyBody>() {
        if body.is_hittable() && body.hit_region.overlaps(&hurt_zone) && body.mark_damaged() {
            contacts.push((entity, body.id, body.origin));
        }
    }

    let mut died = false;
    for (entity, enemy, from) in contacts {
        match fighter.receive_hit(from) {
            HitOutcome::Stunned { damage, hp } => {
                score.hits_taken += 1;
                events.push(CombatEvent::PlayerDamaged { from, damage, hp });
            }
            HitOutcome::Killed { damage } => {
                score.hits_taken += 1;
                events.push(CombatEvent::PlayerDamaged {
                    from,
                    damage,
                    hp: fighter.hp(),
                });
                events.push(CombatEvent::PlayerDied);
                died = true;
            }
            HitOutcome::Ignored => {
                tracing::debug!(%enemy, state = ?fighter.state(), "contact absorbed");
            }
        }
        cleanup::begin_removal(world, config, entity, enemy, from, RemovalReason::Expended, events);
    }
    died
}
