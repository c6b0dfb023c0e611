//! Tunable combat parameters.
//!
//! Everything defaults to [`crate::constants`]. Hosts may override any subset
//! from JSON; missing fields keep their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::SpawnLayout;
use crate::geometry::RegionSpec;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse combat config")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be finite")]
    NotFinite { field: &'static str },

    #[error("player start ({x}, {y}) lies outside the {width}x{height} arena")]
    StartOutsideArena { x: f64, y: f64, width: f64, height: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    // --- Arena ---
    pub arena_width: f64,
    pub arena_height: f64,
    pub arena_cull_margin: f64,
    pub player_start_x: f64,
    pub player_start_y: f64,

    // --- Player ---
    pub max_hp: f64,
    pub hit_damage: f64,
    pub hurt_zone: RegionSpec,
    pub attack_zone_left: RegionSpec,
    pub attack_zone_right: RegionSpec,
    pub strike_reach: f64,

    // --- Timing (ms) ---
    pub charge_duration_ms: f64,
    pub strike_duration_ms: f64,
    pub vulnerable_duration_ms: f64,
    pub stun_duration_ms: f64,
    pub knockback_distance: f64,
    pub knockback_duration_ms: f64,

    // --- Enemies ---
    pub enemy_speed: f64,
    pub enemy_hit_region: RegionSpec,
    pub spawn_interval_ms: f64,
    pub spawn_layout: SpawnLayout,
    pub knockout_offset_x: f64,
    pub knockout_offset_y: f64,
    pub knockout_duration_ms: f64,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            arena_cull_margin: ARENA_CULL_MARGIN,
            player_start_x: PLAYER_START_X,
            player_start_y: PLAYER_START_Y,
            max_hp: PLAYER_MAX_HP,
            hit_damage: ENEMY_CONTACT_DAMAGE,
            hurt_zone: RegionSpec::new(
                PLAYER_HURT_OFFSET_X,
                PLAYER_HURT_OFFSET_Y,
                PLAYER_HURT_WIDTH,
                PLAYER_HURT_HEIGHT,
            ),
            attack_zone_left: RegionSpec::new(
                ATTACK_ZONE_LEFT_OFFSET_X,
                ATTACK_ZONE_OFFSET_Y,
                ATTACK_ZONE_WIDTH,
                ATTACK_ZONE_HEIGHT,
            ),
            attack_zone_right: RegionSpec::new(
                ATTACK_ZONE_RIGHT_OFFSET_X,
                ATTACK_ZONE_OFFSET_Y,
                ATTACK_ZONE_WIDTH,
                ATTACK_ZONE_HEIGHT,
            ),
            strike_reach: STRIKE_REACH,
            charge_duration_ms: CHARGE_DURATION_MS,
            strike_duration_ms: STRIKE_DURATION_MS,
            vulnerable_duration_ms: VULNERABLE_DURATION_MS,
            stun_duration_ms: STUN_DURATION_MS,
            knockback_distance: KNOCKBACK_DISTANCE,
            knockback_duration_ms: KNOCKBACK_DURATION_MS,
            enemy_speed: ENEMY_SPEED,
            enemy_hit_region: RegionSpec::new(
                ENEMY_HIT_OFFSET_X,
                ENEMY_HIT_OFFSET_Y,
                ENEMY_HIT_WIDTH,
                ENEMY_HIT_HEIGHT,
            ),
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            spawn_layout: SpawnLayout::default(),
            knockout_offset_x: KNOCKOUT_OFFSET_X,
            knockout_offset_y: KNOCKOUT_OFFSET_Y,
            knockout_duration_ms: KNOCKOUT_DURATION_MS,
        }
    }
}

impl CombatConfig {
    /// Parse a (possibly partial) JSON override and validate the result.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: CombatConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("max_hp", self.max_hp),
            ("charge_duration_ms", self.charge_duration_ms),
            ("strike_duration_ms", self.strike_duration_ms),
            ("vulnerable_duration_ms", self.vulnerable_duration_ms),
            ("stun_duration_ms", self.stun_duration_ms),
            ("knockback_duration_ms", self.knockback_duration_ms),
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("knockout_duration_ms", self.knockout_duration_ms),
        ];
        for (field, value) in positive {
            check_finite(field, value)?;
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let mut non_negative = vec![
            ("arena_cull_margin", self.arena_cull_margin),
            ("hit_damage", self.hit_damage),
            ("strike_reach", self.strike_reach),
            ("knockback_distance", self.knockback_distance),
            ("enemy_speed", self.enemy_speed),
        ];
        if let SpawnLayout::PlayerOffset { distance } = self.spawn_layout {
            non_negative.push(("spawn_layout.distance", distance));
        }
        for (field, spec) in [
            ("hurt_zone", &self.hurt_zone),
            ("attack_zone_left", &self.attack_zone_left),
            ("attack_zone_right", &self.attack_zone_right),
            ("enemy_hit_region", &self.enemy_hit_region),
        ] {
            check_finite(field, spec.offset_x)?;
            check_finite(field, spec.offset_y)?;
            non_negative.push((field, spec.width));
            non_negative.push((field, spec.height));
        }
        for (field, value) in non_negative {
            check_finite(field, value)?;
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        for (field, value) in [
            ("player_start_x", self.player_start_x),
            ("player_start_y", self.player_start_y),
            ("knockout_offset_x", self.knockout_offset_x),
            ("knockout_offset_y", self.knockout_offset_y),
        ] {
            check_finite(field, value)?;
        }

        let inside_x = (0.0..=self.arena_width).contains(&self.player_start_x);
        let inside_y = (0.0..=self.arena_height).contains(&self.player_start_y);
        if !inside_x || !inside_y {
            return Err(ConfigError::StartOutsideArena {
                x: self.player_start_x,
                y: self.player_start_y,
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        Ok(())
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field })
    }
}
