//! Audio cues emitted by the simulation and the event that carries them.
//!
//! The core never plays sound itself. Each tick it collects [`AudioCue`]s in
//! order and the front end forwards them as [`CueEvent`]s to whichever system
//! owns playback.

use bevy::prelude::*;

/// The closed set of sound cues the simulation can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    /// The player started a sword swing.
    Swing,
    /// A hostile was struck and removed.
    EnemyDefeated,
    /// The player collected a pickup.
    Pickup,
    /// A locked room's door opened.
    DoorUnlock,
    /// The player took contact damage.
    Hurt,
}

impl AudioCue {
    pub const ALL: [AudioCue; 5] = [
        AudioCue::Swing,
        AudioCue::EnemyDefeated,
        AudioCue::Pickup,
        AudioCue::DoorUnlock,
        AudioCue::Hurt,
    ];

    /// Stable cue name, also used as the sound asset file stem.
    pub const fn name(self) -> &'static str {
        match self {
            AudioCue::Swing => "swing",
            AudioCue::EnemyDefeated => "enemy_defeated",
            AudioCue::Pickup => "pickup",
            AudioCue::DoorUnlock => "door_unlock",
            AudioCue::Hurt => "hurt",
        }
    }
}

/// Sent once per cue emitted during a fixed tick.
#[derive(Event, Debug, Clone, Copy)]
pub struct CueEvent(pub AudioCue);
