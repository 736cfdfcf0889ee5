//! Game state definitions that control which front-end systems run.

use bevy::prelude::*;

/// Top-level game flow.
///
/// - Start in `Loading` while config and world data are read
/// - `InGame` runs the fixed-tick simulation
/// - `GameOver` once the player's health reaches zero
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Reading config and world definitions.
    #[default]
    Loading,
    /// Active gameplay.
    InGame,
    /// Player has been defeated.
    GameOver,
}
