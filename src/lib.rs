//! Tile Dungeon - a top-down, room-by-room dungeon crawler in Bevy.
//!
//! Rooms are authored as text grids. The player walks between them, fights
//! wandering hostiles with a short sword swing, collects health and coins, and
//! opens locked doors by clearing the room guarding them.
//!
//! # Architecture
//!
//! The simulation is plain Rust driven one fixed tick at a time by [`game::Game`];
//! it emits draw primitives and audio cues and never touches the renderer or
//! the mixer. The Bevy plugins around it are the front end:
//!
//! - **Core**: Geometry, collision, config, game states, cue events
//! - **World**: Room layouts, rooms, the world graph, data loading
//! - **Player**: Player actor, keyboard sampling, movement
//! - **Combat**: Sword swing, hit resolution, contact damage
//! - **Enemies**: Hostile wander behaviour
//! - **Pickups**: Health and currency drops
//! - **Game**: The per-tick orchestrator and its fixed-step driver
//! - **Rendering**: Draw list to sprites and text
//! - **Audio**: Cue sounds
//! - **UI**: HUD layout, game over overlay

pub mod audio;
pub mod combat;
pub mod core;
pub mod enemies;
pub mod game;
pub mod pickups;
pub mod player;
pub mod rendering;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
///
/// Audio playback needs `bevy_kira_audio::AudioPlugin` registered alongside.
pub struct DungeonPlugin;

impl Plugin for DungeonPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // World loading
            .add_plugins(world::WorldPlugin)

            // Input
            .add_plugins(player::PlayerPlugin)

            // Fixed-tick simulation
            .add_plugins(game::GamePlugin)

            // Output
            .add_plugins(rendering::RenderingPlugin)
            .add_plugins(audio::SoundPlugin)
            .add_plugins(ui::UiPlugin);
    }
}
