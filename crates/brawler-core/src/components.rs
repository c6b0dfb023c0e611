//! ECS components for hecs entities.
//!
//! Components are plain data. The only behavior they carry is keeping their
//! own derived regions in step with their position; anything that looks at
//! more than one entity lives in the sim systems.

use serde::{Deserialize, Serialize};

use crate::actor::Actor;
use crate::enums::{Direction, RemovalReason};
use crate::geometry::{Rect, RegionSpec};
use crate::types::{EnemyId, Position};

/// An enemy walking across the arena at constant speed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyBody {
    pub id: EnemyId,
    pub position: Position,
    /// Side of the arena the enemy came from. It walks toward the opposite side.
    pub origin: Direction,
    /// Signed horizontal speed (px/s).
    pub velocity_x: f64,
    pub hit_spec: RegionSpec,
    /// Derived from `position` and `hit_spec`.
    pub hit_region: Rect,
    damaged: bool,
}

impl EnemyBody {
    pub fn new(id: EnemyId, position: Position, origin: Direction, speed: f64, hit_spec: RegionSpec) -> Self {
        Self {
            id,
            position,
            origin,
            velocity_x: origin.opposite().sign() * speed.abs(),
            hit_spec,
            hit_region: hit_spec.at(position),
            damaged: false,
        }
    }

    /// Walk for `dt_ms` milliseconds and refresh the hit region.
    pub fn advance(&mut self, dt_ms: f64) {
        self.position.x += self.velocity_x * dt_ms / 1000.0;
        self.update_regions();
    }

    /// Flag the enemy as spent. Returns true only for the call that flipped the flag;
    /// that caller alone may schedule the removal.
    pub fn mark_damaged(&mut self) -> bool {
        if self.damaged {
            return false;
        }
        self.damaged = true;
        true
    }

    pub fn is_damaged(&self) -> bool {
        self.damaged
    }

    /// Whether the hit region may take part in hit tests.
    pub fn is_hittable(&self) -> bool {
        !self.damaged
    }
}

impl Actor for EnemyBody {
    fn position(&self) -> Position {
        self.position
    }

    fn facing(&self) -> Direction {
        self.origin.opposite()
    }

    fn update_regions(&mut self) {
        self.hit_region = self.hit_spec.at(self.position);
    }
}

/// Attached once an enemy is spent; the entity is despawned when the timer runs out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PendingRemoval {
    pub reason: RemovalReason,
    pub remaining_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn body(origin: Direction) -> EnemyBody {
        EnemyBody::new(
            EnemyId(1),
            DVec2::new(300.0, 300.0),
            origin,
            100.0,
            RegionSpec::new(-20.0, -40.0, 40.0, 80.0),
        )
    }

    #[test]
    fn test_advance_moves_away_from_origin() {
        let mut from_left = body(Direction::Left);
        from_left.advance(1000.0);
        assert!((from_left.position.x - 400.0).abs() < 1e-9);
        assert!((from_left.hit_region.x - 380.0).abs() < 1e-9);

        let mut from_right = body(Direction::Right);
        from_right.advance(500.0);
        assert!((from_right.position.x - 250.0).abs() < 1e-9);
        assert_eq!(from_right.facing(), Direction::Left);
    }

    #[test]
    fn test_mark_damaged_is_idempotent() {
        let mut e = body(Direction::Left);
        assert!(e.is_hittable());
        assert!(e.mark_damaged());
        assert!(!e.mark_damaged());
        assert!(e.is_damaged());
        assert!(!e.is_hittable());
    }
}
