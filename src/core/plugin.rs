//! Core plugin that sets up game states and the audio cue event.

use bevy::prelude::*;

use super::events::CueEvent;
use super::states::GameState;

/// Core plugin - must be added first as other plugins depend on it.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>().add_event::<CueEvent>();
    }
}
