//! Core types and definitions for the brawler combat simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, components, commands, snapshots, events, constants and
//! configuration. It has no dependency on any runtime or presentation layer.

pub mod actor;
pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod geometry;
pub mod state;
pub mod types;
