//! World plugin - loads config and world data and builds the game.

use bevy::prelude::*;

use super::data::{WorldDefinition, WORLD_PATH};
use super::error::DataLoadError;
use crate::core::{GameConfig, GameState, GAME_CONFIG_PATH};
use crate::game::Game;

/// World plugin - reads data files at startup and enters play.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), load_world);
    }
}

fn build_game() -> Result<Game, DataLoadError> {
    let config = GameConfig::load(GAME_CONFIG_PATH)?;
    let definition = WorldDefinition::load(WORLD_PATH)?;
    Game::new(config, &definition)
}

/// Build the game from data files. Any load error ends the app before the
/// first tick.
fn load_world(
    mut commands: Commands,
    mut fixed_time: ResMut<Time<Fixed>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: EventWriter<AppExit>,
) {
    let game = match build_game() {
        Ok(game) => game,
        Err(e) => {
            error!("Failed to load world: {}", e);
            exit.send(AppExit::error());
            return;
        }
    };

    fixed_time.set_timestep_hz(game.config().tick_rate);
    commands.insert_resource(game.config().clone());
    commands.insert_resource(game);
    next_state.set(GameState::InGame);
}
