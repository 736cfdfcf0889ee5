//! Audio plugin - plays a sound for every cue the simulation emits.

use bevy::prelude::*;
use bevy_kira_audio::{Audio, AudioControl, AudioSource};
use std::collections::HashMap;

use crate::core::{AudioCue, CueEvent};

/// Sound handles keyed by cue. Files live at `assets/sounds/<cue>.wav`.
#[derive(Resource, Debug, Default)]
pub struct SoundBank {
    sounds: HashMap<AudioCue, Handle<AudioSource>>,
}

impl SoundBank {
    pub fn get(&self, cue: AudioCue) -> Option<&Handle<AudioSource>> {
        self.sounds.get(&cue)
    }
}

/// Asset path for a cue's sound.
pub fn sound_path(cue: AudioCue) -> String {
    format!("sounds/{}.wav", cue.name())
}

/// Sound plugin - loads cue sounds and plays them as cues arrive.
///
/// Expects `bevy_kira_audio::AudioPlugin` to be registered by the app.
pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_sound_bank)
            .add_systems(Update, play_cues);
    }
}

fn load_sound_bank(mut commands: Commands, asset_server: Res<AssetServer>) {
    let sounds = AudioCue::ALL
        .iter()
        .map(|&cue| (cue, asset_server.load(sound_path(cue))))
        .collect();
    info!("Loading {} cue sounds", AudioCue::ALL.len());
    commands.insert_resource(SoundBank { sounds });
}

fn play_cues(mut events: EventReader<CueEvent>, bank: Option<Res<SoundBank>>, audio: Res<Audio>) {
    let Some(bank) = bank else {
        events.clear();
        return;
    };

    for CueEvent(cue) in events.read() {
        match bank.get(*cue) {
            Some(handle) => {
                audio.play(handle.clone());
            }
            None => warn!("No sound loaded for cue '{}'", cue.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sound_paths_use_cue_names() {
        assert_eq!(sound_path(AudioCue::DoorUnlock), "sounds/door_unlock.wav");
        assert_eq!(sound_path(AudioCue::Hurt), "sounds/hurt.wav");
    }
}
