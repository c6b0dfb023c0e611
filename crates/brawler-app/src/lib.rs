//! Headless host for the brawler encounter.
//!
//! This crate wires the simulation crates to a real-time loop thread and
//! exposes them to a front end through plain control functions, a
//! [`presenter::Presenter`] for output and a [`input::KeyLatch`] for input.

pub mod control;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod presenter;
pub mod state;

pub use brawler_core as core;
pub use error::HostError;
