//! Audio module - cue sounds played through bevy_kira_audio.

mod plugin;

pub use plugin::{sound_path, SoundBank, SoundPlugin};
