//! Pickups module - health and currency drops.

mod components;
mod economy;

pub use components::{Pickup, PickupKind};
pub use economy::{collect_pickups, request_spawn};
