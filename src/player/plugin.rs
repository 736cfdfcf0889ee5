//! Player plugin - keyboard sampling for the fixed-tick simulation.

use bevy::prelude::*;

use super::input::{sample_keyboard, PendingInput};
use crate::core::GameState;

/// Player plugin - latches keyboard input between fixed ticks.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PendingInput>().add_systems(
            Update,
            sample_keyboard.run_if(in_state(GameState::InGame)),
        );
    }
}
