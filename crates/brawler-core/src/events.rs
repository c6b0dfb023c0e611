//! Notifications emitted by the simulation for the presentation layer.
//!
//! These are the only way the core asks for sounds, flashes, shakes or
//! tweens. Nothing here feeds back into combat resolution.

use serde::{Deserialize, Serialize};

use crate::enums::{Direction, RemovalReason};
use crate::geometry::Rect;
use crate::types::{EnemyId, Position};

/// Combat outcome notifications, drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    /// An attack began; `zone` is the attack zone that was scanned.
    AttackStarted { direction: Direction, zone: Rect },
    /// A charged strike connected with its target.
    SuccessfulHit {
        enemy: EnemyId,
        position: Position,
    },
    /// An attack into empty space finished its recovery window.
    AttackFailed { direction: Direction },
    /// The player took a hit coming from `from`.
    PlayerDamaged {
        from: Direction,
        damage: f64,
        hp: f64,
    },
    /// The player's health reached zero.
    PlayerDied,
    EnemySpawned {
        enemy: EnemyId,
        position: Position,
        origin: Direction,
    },
    /// Knock-out tween: displace by `offset` and fade over `duration_ms`, then removal follows.
    EnemyKnockedOut {
        enemy: EnemyId,
        offset: Position,
        duration_ms: f64,
    },
    EnemyRemoved {
        enemy: EnemyId,
        reason: RemovalReason,
    },
}
