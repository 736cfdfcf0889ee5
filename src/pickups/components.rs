//! Pickup entity state.

use crate::core::Rectangle;

/// What a pickup grants when collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickupKind {
    /// Restores one unit of health, up to the player's maximum.
    Health,
    /// Adds one to the world-level currency counter.
    Currency,
}

/// A consumable lying on the floor of a room.
#[derive(Debug, Clone, PartialEq)]
pub struct Pickup {
    pub bounds: Rectangle,
    pub kind: PickupKind,
    pub alive: bool,
}

impl Pickup {
    pub fn new(bounds: Rectangle, kind: PickupKind) -> Self {
        Self {
            bounds,
            kind,
            alive: true,
        }
    }
}
