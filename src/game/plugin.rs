//! Game plugin - drives the simulation from Bevy's fixed timestep.

use bevy::prelude::*;

use super::orchestrator::{Frame, Game};
use crate::core::{CueEvent, GameState};
use crate::player::PendingInput;

/// The most recent frame produced by the simulation, waiting to be drawn.
#[derive(Resource, Debug, Default)]
pub struct LatestFrame(pub Option<Frame>);

/// Game plugin - runs one simulation tick per fixed step while in game.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LatestFrame>().add_systems(
            FixedUpdate,
            run_tick.run_if(in_state(GameState::InGame).and(resource_exists::<Game>)),
        );
    }
}

/// Advance the game one tick and hand its output to the front end.
fn run_tick(
    mut game: ResMut<Game>,
    mut pending: ResMut<PendingInput>,
    mut latest: ResMut<LatestFrame>,
    mut cues: EventWriter<CueEvent>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: EventWriter<AppExit>,
) {
    let input = pending.take();
    let frame = game.tick(&input);

    for cue in &frame.cues {
        cues.send(CueEvent(*cue));
    }

    if frame.defeated {
        next_state.set(GameState::GameOver);
    }
    if frame.quit_requested {
        info!("Quit requested on tick {}", game.current_tick());
        exit.send(AppExit::Success);
    }

    latest.0 = Some(frame);
}
