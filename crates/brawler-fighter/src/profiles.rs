//! Fighter tuning extracted from the combat configuration.
//!
//! Consolidates the per-fighter parameters the state machine reads, so the
//! FSM never reaches back into the full config.

use brawler_core::config::CombatConfig;
use brawler_core::geometry::RegionSpec;

/// Behavioral profile for the player fighter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FighterProfile {
    pub max_hp: f64,
    /// Damage taken per accepted hit.
    pub hit_damage: f64,
    pub hurt_zone: RegionSpec,
    pub attack_zone_left: RegionSpec,
    pub attack_zone_right: RegionSpec,
    /// Gap kept from the target when the charge ends (px).
    pub strike_reach: f64,
    pub charge_duration_ms: f64,
    pub strike_duration_ms: f64,
    pub vulnerable_duration_ms: f64,
    pub stun_duration_ms: f64,
    pub knockback_distance: f64,
    pub knockback_duration_ms: f64,
}

impl FighterProfile {
    pub fn from_config(config: &CombatConfig) -> Self {
        Self {
            max_hp: config.max_hp,
            hit_damage: config.hit_damage,
            hurt_zone: config.hurt_zone,
            attack_zone_left: config.attack_zone_left,
            attack_zone_right: config.attack_zone_right,
            strike_reach: config.strike_reach,
            charge_duration_ms: config.charge_duration_ms,
            strike_duration_ms: config.strike_duration_ms,
            vulnerable_duration_ms: config.vulnerable_duration_ms,
            stun_duration_ms: config.stun_duration_ms,
            knockback_distance: config.knockback_distance,
            knockback_duration_ms: config.knockback_duration_ms,
        }
    }
}

impl Default for FighterProfile {
    fn default() -> Self {
        Self::from_config(&CombatConfig::default())
    }
}
