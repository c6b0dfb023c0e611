//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. Attack
//! commands are edge-triggered: the host sends one per key press, never one
//! per frame while a key is held.

use serde::{Deserialize, Serialize};

use crate::enums::Direction;

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Combat ---
    /// Attack toward `direction`.
    Attack { direction: Direction },
    /// Directionless defensive move.
    Special,

    // --- Encounter control ---
    /// Pause the encounter.
    Pause,
    /// Resume the encounter.
    Resume,
    /// Reset the encounter to its initial state (player, enemies, timers, score).
    Restart,
}
