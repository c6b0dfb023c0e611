//! Player fighter logic for the brawler simulation.
//!
//! Implements the player combat state machine, its owned timer queue,
//! target acquisition and clamped health. No ECS dependency; operates on
//! plain data and caller-supplied enemy handles.

pub mod fsm;
pub mod health;
pub mod profiles;
pub mod targeting;
pub mod timers;

pub use brawler_core as core;
pub use fsm::{AttackStart, FighterSignal, HitOutcome, PlayerCombatant};

#[cfg(test)]
mod tests;
