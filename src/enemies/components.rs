//! Hostile entity state.

use bevy::math::Vec2;

use crate::core::Rectangle;

/// A wandering hostile.
///
/// Hostiles have no health: a single sword hit marks them dead, and the
/// owning room prunes them at the end of that tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Hostile {
    pub bounds: Rectangle,
    pub alive: bool,
    /// Displacement applied per tick.
    pub velocity: Vec2,
    /// Ticks left until the next direction roll.
    pub direction_countdown: u32,
}

impl Hostile {
    pub fn new(bounds: Rectangle, velocity: Vec2, direction_countdown: u32) -> Self {
        Self {
            bounds,
            alive: true,
            velocity,
            direction_countdown,
        }
    }

    /// Mark the hostile dead. Removal from the room happens at end of tick.
    pub fn kill(&mut self) {
        self.alive = false;
    }
}
