//! UI module - HUD layout and the game over overlay.

mod hud;
mod plugin;

pub use hud::{hud_commands, HudSnapshot};
pub use plugin::UiPlugin;
