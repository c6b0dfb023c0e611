//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Horizontal direction, used for facing, attacks and enemy travel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    /// -1.0 for left, 1.0 for right.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Player combat state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatState {
    /// Ready to accept an attack.
    #[default]
    Idle,
    /// Closing distance toward an acquired target.
    Charging,
    /// Strike window.
    Attacking,
    /// Punishable recovery after a whiffed attack.
    Vulnerable,
    /// Recovering from a hit.
    Stunned,
    /// Health exhausted. Terminal.
    Dead,
}

impl CombatState {
    /// States in which incoming hits are ignored.
    pub fn is_invulnerable(self) -> bool {
        matches!(
            self,
            CombatState::Charging | CombatState::Attacking | CombatState::Stunned | CombatState::Dead
        )
    }
}

/// Where enemies enter the arena.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SpawnLayout {
    /// At the left (x = 0) or right (x = arena width) edge.
    #[default]
    ScreenEdge,
    /// A fixed horizontal distance from the player on the chosen side.
    PlayerOffset { distance: f64 },
}

/// Why an enemy left the live set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemovalReason {
    /// Struck by the player.
    Defeated,
    /// Spent itself hitting the player.
    Expended,
    /// Walked off the arena.
    OutOfBounds,
}

/// Encounter phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterPhase {
    #[default]
    Active,
    Paused,
    /// The player died; nothing advances until a restart.
    Defeated,
}
