//! Kinematic integration for enemies.
//!
//! Each live enemy walks at its constant horizontal speed and refreshes its
//! hit region. Spent enemies hold still; their knock-out motion is a
//! presentation tween.

use hecs::World;

use brawler_core::components::EnemyBody;

/// Advance every undamaged enemy by `dt_ms`.
pub fn run(world: &mut World, dt_ms: f64) {
    for (_entity, body) in world.query_mut::<&mut EnemyBody>() {
        if body.is_damaged() {
            continue;
        }
        body.advance(dt_ms);
    }
}
