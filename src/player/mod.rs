//! Player module - the player actor, its input and movement.

mod components;
mod input;
mod movement;
mod plugin;

pub use components::Player;
pub use input::{sample_keyboard, PendingInput, TickInput};
pub use movement::{input_velocity, move_player};
pub use plugin::PlayerPlugin;
