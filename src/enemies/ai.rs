//! Hostile wander behaviour.
//!
//! Hostiles have a single state: they drift in a straight line and roll a new
//! direction every `enemy_turn_ticks`. When the next step would hit a wall
//! they reverse and stay put for the tick instead of sliding.

use bevy::math::Vec2;
use rand::Rng;

use super::components::Hostile;
use crate::core::{is_blocked, GameConfig, Rectangle};

/// Pick one of the eight compass directions or standstill, scaled to `speed`.
///
/// A standstill roll becomes straight down so hostiles never idle.
pub fn roll_velocity<R: Rng + ?Sized>(rng: &mut R, speed: f32) -> Vec2 {
    let dx = rng.gen_range(-1..=1) as f32;
    let dy = rng.gen_range(-1..=1) as f32;
    let direction = if dx == 0.0 && dy == 0.0 {
        Vec2::Y
    } else {
        Vec2::new(dx, dy).normalize()
    };
    direction * speed
}

/// Initial drift for a freshly spawned hostile: left or right at full speed.
pub fn initial_velocity<R: Rng + ?Sized>(rng: &mut R, speed: f32) -> Vec2 {
    if rng.gen_bool(0.5) {
        Vec2::new(speed, 0.0)
    } else {
        Vec2::new(-speed, 0.0)
    }
}

/// Advance one hostile by one tick.
///
/// `obstacles` are the room's walls (plus the door while locked). Leaving
/// `bounds` counts as a collision too.
pub fn wander<'a, I, R>(
    hostile: &mut Hostile,
    obstacles: I,
    bounds: &Rectangle,
    config: &GameConfig,
    rng: &mut R,
) where
    I: IntoIterator<Item = &'a Rectangle>,
    R: Rng + ?Sized,
{
    if !hostile.alive {
        return;
    }

    hostile.direction_countdown = hostile.direction_countdown.saturating_sub(1);
    if hostile.direction_countdown == 0 {
        hostile.velocity = roll_velocity(rng, config.enemy_speed);
        hostile.direction_countdown = config.enemy_turn_ticks.max(1);
    }

    let candidate = hostile.bounds.translated(hostile.velocity);
    if is_blocked(&candidate, obstacles) || !candidate.is_inside(bounds) {
        hostile.velocity = -hostile.velocity;
    } else {
        hostile.bounds = candidate;
    }
}
