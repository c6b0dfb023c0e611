//! Entity spawn factories for setting up the encounter world.

use glam::DVec2;
use hecs::{Entity, World};

use brawler_core::components::EnemyBody;
use brawler_core::config::CombatConfig;
use brawler_core::enums::{Direction, SpawnLayout};
use brawler_core::types::{EnemyId, Position};

/// Where an enemy coming from `origin` enters the arena.
///
/// `ScreenEdge` puts it on the arena edge of that side at the player's start
/// height; `PlayerOffset` puts it a fixed distance from the player's current
/// position on that side.
pub fn spawn_position(config: &CombatConfig, origin: Direction, player: Position) -> Position {
    match config.spawn_layout {
        SpawnLayout::ScreenEdge => {
            let x = match origin {
                Direction::Left => 0.0,
                Direction::Right => config.arena_width,
            };
            DVec2::new(x, config.player_start_y)
        }
        SpawnLayout::PlayerOffset { distance } => DVec2::new(player.x + origin.sign() * distance, player.y),
    }
}

/// Spawn an enemy entity walking away from `origin`.
pub fn spawn_enemy(
    world: &mut World,
    config: &CombatConfig,
    id: EnemyId,
    origin: Direction,
    position: Position,
) -> Entity {
    world.spawn((EnemyBody::new(
        id,
        position,
        origin,
        config.enemy_speed,
        config.enemy_hit_region,
    ),))
}
