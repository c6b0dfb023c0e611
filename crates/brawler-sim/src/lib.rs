//! Encounter simulation for the brawler.
//!
//! Owns the hecs ECS world, runs systems once per host tick,
//! and produces EncounterSnapshots for the presentation layer.

pub mod engine;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use brawler_core as core;
pub use engine::{EncounterDirector, SimConfig};
