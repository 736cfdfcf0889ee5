//! Core game module - geometry, collision, config, states and events.
//!
//! This module provides the foundation that all other game systems build upon.

mod actor;
mod collision;
mod config;
mod events;
mod geometry;
mod plugin;
mod states;

pub use actor::{Actor, ActorMut, UpdateContext};
pub use collision::{is_blocked, resolve_move};
pub use config::{GameConfig, GAME_CONFIG_PATH};
pub use events::{AudioCue, CueEvent};
pub use geometry::Rectangle;
pub use plugin::CorePlugin;
pub use states::GameState;
