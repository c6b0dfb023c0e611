//! Cleanup system: schedules and performs enemy removal.
//!
//! Spent enemies carry a `PendingRemoval` until their knock-out effect has
//! played. Live enemies that walk off the far side of the arena are removed
//! immediately.

use hecs::{Entity, World};

use brawler_core::components::{EnemyBody, PendingRemoval};
use brawler_core::config::CombatConfig;
use brawler_core::enums::{Direction, RemovalReason};
use brawler_core::events::CombatEvent;
use brawler_core::types::EnemyId;
use glam::DVec2;

/// Start the knock-out sequence for an enemy that was just marked damaged.
///
/// The enemy is pushed back toward the side it came from while it fades.
pub fn begin_removal(
    world: &mut World,
    config: &CombatConfig,
    entity: Entity,
    enemy: EnemyId,
    origin: Direction,
    reason: RemovalReason,
    events: &mut Vec<CombatEvent>,
) {
    let pending = PendingRemoval {
        reason,
        remaining_ms: config.knockout_duration_ms,
    };
    if world.insert_one(entity, pending).is_err() {
        return;
    }
    events.push(CombatEvent::EnemyKnockedOut {
        enemy,
        offset: DVec2::new(origin.sign() * config.knockout_offset_x, config.knockout_offset_y),
        duration_ms: config.knockout_duration_ms,
    });
}

/// Count down pending removals, cull off-arena enemies and despawn both.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    config: &CombatConfig,
    dt_ms: f64,
    despawn_buffer: &mut Vec<(Entity, EnemyId, RemovalReason)>,
    events: &mut Vec<CombatEvent>,
) {
    despawn_buffer.clear();

    for (entity, (body, pending)) in world.query_mut::<(&EnemyBody, &mut PendingRemoval)>() {
        pending.remaining_ms -= dt_ms;
        if pending.remaining_ms <= 0.0 {
            despawn_buffer.push((entity, body.id, pending.reason));
        }
    }

    let min_x = -config.arena_cull_margin;
    let max_x = config.arena_width + config.arena_cull_margin;
    for (entity, body) in world.query_mut::<&EnemyBody>() {
        // Only the far edge counts: enemies may spawn outside the arena and walk in.
        let gone = if body.velocity_x < 0.0 {
            body.hit_region.right() < min_x
        } else if body.velocity_x > 0.0 {
            body.hit_region.x > max_x
        } else {
            false
        };
        if body.is_hittable() && gone {
            despawn_buffer.push((entity, body.id, RemovalReason::OutOfBounds));
        }
    }

    for (entity, enemy, reason) in despawn_buffer.drain(..) {
        if world.despawn(entity).is_ok() {
            tracing::debug!(%enemy, ?reason, "enemy removed");
            events.push(CombatEvent::EnemyRemoved { enemy, reason });
        }
    }
}
