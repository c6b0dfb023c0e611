//! Capability set shared by everything that stands in the arena.

use crate::enums::Direction;
use crate::types::Position;

/// A positioned, facing entity whose collision regions derive from its position.
///
/// Implementors must leave every region consistent with [`Actor::position`]
/// once [`Actor::update_regions`] returns.
pub trait Actor {
    fn position(&self) -> Position;

    fn facing(&self) -> Direction;

    /// Recompute all derived regions from the current position.
    fn update_regions(&mut self);
}
