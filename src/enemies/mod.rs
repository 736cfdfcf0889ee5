//! Enemies module - wandering hostiles.

mod ai;
mod components;

pub use ai::{initial_velocity, roll_velocity, wander};
pub use components::Hostile;
