//! Per-tick player input and keyboard sampling.

use bevy::prelude::*;

/// Everything the simulation reads from the player for one tick.
///
/// Directions are held state; `attack` and `quit` are edges that fire once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub attack: bool,
    pub quit: bool,
}

impl TickInput {
    /// Raw direction from the held flags, each axis in {-1, 0, 1}.
    pub fn direction(&self) -> Vec2 {
        let axis = |negative: bool, positive: bool| positive as i8 as f32 - negative as i8 as f32;
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

/// Input gathered between fixed ticks.
///
/// Frames and fixed steps do not line up one to one, so edge presses are
/// latched here until a tick consumes them.
#[derive(Resource, Debug, Default)]
pub struct PendingInput {
    held: TickInput,
    attack: bool,
    quit: bool,
}

impl PendingInput {
    /// Take the input for one tick, clearing latched edges.
    pub fn take(&mut self) -> TickInput {
        let input = TickInput {
            attack: self.attack,
            quit: self.quit,
            ..self.held
        };
        self.attack = false;
        self.quit = false;
        input
    }
}

const UP_KEYS: [KeyCode; 2] = [KeyCode::KeyW, KeyCode::ArrowUp];
const DOWN_KEYS: [KeyCode; 2] = [KeyCode::KeyS, KeyCode::ArrowDown];
const LEFT_KEYS: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const ATTACK_KEYS: [KeyCode; 2] = [KeyCode::Space, KeyCode::KeyZ];
const QUIT_KEYS: [KeyCode; 2] = [KeyCode::Escape, KeyCode::KeyQ];

/// Sample the keyboard every frame into [`PendingInput`].
pub fn sample_keyboard(keyboard: Res<ButtonInput<KeyCode>>, mut pending: ResMut<PendingInput>) {
    pending.held = TickInput {
        up: keyboard.any_pressed(UP_KEYS),
        down: keyboard.any_pressed(DOWN_KEYS),
        left: keyboard.any_pressed(LEFT_KEYS),
        right: keyboard.any_pressed(RIGHT_KEYS),
        ..default()
    };
    pending.attack |= keyboard.any_just_pressed(ATTACK_KEYS);
    pending.quit |= keyboard.any_just_pressed(QUIT_KEYS);
}
