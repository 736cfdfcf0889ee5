//! Top-down player movement.

use bevy::math::Vec2;

use super::components::Player;
use super::input::TickInput;
use crate::core::{resolve_move, Rectangle};

/// Velocity for one tick: the input direction normalised to `speed`.
pub fn input_velocity(input: &TickInput, speed: f32) -> Vec2 {
    input.direction().normalize_or_zero() * speed
}

/// Move the player for one tick and update its facing.
///
/// `obstacles` are the active room's walls plus the door while it is locked.
/// Facing only changes on nonzero input.
pub fn move_player<'a, I>(player: &mut Player, input: &TickInput, obstacles: I, speed: f32)
where
    I: IntoIterator<Item = &'a Rectangle>,
    I::IntoIter: Clone,
{
    let velocity = input_velocity(input, speed);
    if velocity == Vec2::ZERO {
        return;
    }

    player.bounds = resolve_move(player.bounds, velocity, obstacles);
    player.facing = velocity.normalize();
}
