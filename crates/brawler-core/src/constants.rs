//! Combat constants and tuning parameters.
//!
//! These are the defaults behind [`crate::config::CombatConfig`]. Units are
//! pixels and milliseconds unless stated otherwise; y grows downward.

/// Nominal host tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Milliseconds per tick at the nominal rate.
pub const TICK_MS: f64 = 1000.0 / TICK_RATE as f64;

// --- Arena ---

/// Arena width. Enemies enter at x = 0 or x = ARENA_WIDTH.
pub const ARENA_WIDTH: f64 = 800.0;

/// Arena height.
pub const ARENA_HEIGHT: f64 = 600.0;

/// Horizontal slack beyond the arena before a stray enemy is culled.
pub const ARENA_CULL_MARGIN: f64 = 100.0;

/// Player start position.
pub const PLAYER_START_X: f64 = 400.0;
pub const PLAYER_START_Y: f64 = 300.0;

// --- Player ---

/// Maximum (and starting) health.
pub const PLAYER_MAX_HP: f64 = 100.0;

/// Damage dealt to the player by a single enemy contact.
pub const ENEMY_CONTACT_DAMAGE: f64 = 10.0;

/// Hurt zone relative to the player anchor.
pub const PLAYER_HURT_OFFSET_X: f64 = -24.0;
pub const PLAYER_HURT_OFFSET_Y: f64 = -40.0;
pub const PLAYER_HURT_WIDTH: f64 = 48.0;
pub const PLAYER_HURT_HEIGHT: f64 = 80.0;

/// Attack zone extents. The left zone starts 260 px behind the anchor,
/// the right zone 20 px ahead of it; both are 240 px wide.
pub const ATTACK_ZONE_WIDTH: f64 = 240.0;
pub const ATTACK_ZONE_HEIGHT: f64 = 96.0;
pub const ATTACK_ZONE_OFFSET_Y: f64 = -48.0;
pub const ATTACK_ZONE_LEFT_OFFSET_X: f64 = -260.0;
pub const ATTACK_ZONE_RIGHT_OFFSET_X: f64 = 20.0;

/// Horizontal gap the player keeps from its target when a charge ends.
pub const STRIKE_REACH: f64 = 80.0;

// --- Timing windows (ms) ---

/// Duration of the dash toward a target.
pub const CHARGE_DURATION_MS: f64 = 100.0;

/// Strike animation window.
pub const STRIKE_DURATION_MS: f64 = 100.0;

/// Punishable recovery after an attack into empty space.
pub const VULNERABLE_DURATION_MS: f64 = 400.0;

/// Recovery after being hit.
pub const STUN_DURATION_MS: f64 = 300.0;

/// Knockback applied when hit.
pub const KNOCKBACK_DISTANCE: f64 = 20.0;
pub const KNOCKBACK_DURATION_MS: f64 = 150.0;

// --- Enemies ---

/// Enemy walking speed (px/s).
pub const ENEMY_SPEED: f64 = 100.0;

/// Enemy hit region relative to the enemy anchor.
pub const ENEMY_HIT_OFFSET_X: f64 = -20.0;
pub const ENEMY_HIT_OFFSET_Y: f64 = -40.0;
pub const ENEMY_HIT_WIDTH: f64 = 40.0;
pub const ENEMY_HIT_HEIGHT: f64 = 80.0;

/// Interval between enemy spawns.
pub const SPAWN_INTERVAL_MS: f64 = 2000.0;

/// Distance from the player used by the player-offset spawn layout.
pub const SPAWN_PLAYER_OFFSET: f64 = 400.0;

/// Knock-out effect played before an enemy is removed: outward, then up.
pub const KNOCKOUT_OFFSET_X: f64 = 50.0;
pub const KNOCKOUT_OFFSET_Y: f64 = -20.0;
pub const KNOCKOUT_DURATION_MS: f64 = 250.0;
