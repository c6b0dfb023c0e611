//! Encounter snapshot: the complete visible state handed to the host each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::CombatEvent;
use crate::geometry::Rect;
use crate::types::{EnemyId, Position, SimTime};

/// Complete encounter state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncounterSnapshot {
    pub time: SimTime,
    pub phase: EncounterPhase,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    /// Events produced since the previous snapshot, in emission order.
    pub events: Vec<CombatEvent>,
    pub score: ScoreView,
}

/// The player character.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub facing: Direction,
    pub state: CombatState,
    pub hp: f64,
    pub max_hp: f64,
    /// hp / max_hp in [0, 1], for the health bar overlay.
    pub health_fraction: f64,
    pub hurt_zone: Rect,
    pub attack_zone_left: Rect,
    pub attack_zone_right: Rect,
    /// Enemy the player is charging or striking, if any.
    pub target: Option<EnemyId>,
}

/// A live enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EnemyId,
    pub position: Position,
    pub origin: Direction,
    pub hit_region: Rect,
    /// Spent and playing its knock-out effect.
    pub damaged: bool,
}

/// Running tallies for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub enemies_spawned: u32,
    pub enemies_defeated: u32,
    pub hits_taken: u32,
    pub attacks_whiffed: u32,
    pub survival_secs: f64,
}
