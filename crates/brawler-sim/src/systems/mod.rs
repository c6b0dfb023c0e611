//! ECS systems that operate on the encounter world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only)
//! plus whatever director state they need passed in explicitly. They own no
//! state of their own.

pub mod cleanup;
pub mod contact;
pub mod movement;
pub mod player;
pub mod snapshot;
pub mod spawner;
