//! Tile Dungeon - Entry Point
//!
//! A top-down dungeon crawler played one room at a time.
//!
//! Controls:
//! - WASD / Arrows: Move
//! - Space / Z: Sword
//! - Escape / Q: Quit

use bevy::prelude::*;
use bevy_kira_audio::AudioPlugin as KiraAudioPlugin;

fn main() {
    App::new()
        // Bevy default plugins, with Kira taking over audio
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Tile Dungeon".to_string(),
                        resolution: (512.0, 416.0).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .disable::<bevy::audio::AudioPlugin>(),
        )
        .add_plugins(KiraAudioPlugin)

        // Our game plugin
        .add_plugins(tile_dungeon::DungeonPlugin)

        .run();
}
