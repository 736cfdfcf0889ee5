//! AABB collision resolution against static obstacles.
//!
//! Two policies share the same overlap test:
//!
//! - [`resolve_move`] slides: each axis is applied and clamped on its own, so a
//!   diagonal move into a wall keeps the unblocked component.
//! - [`is_blocked`] is the all-or-nothing check hostiles use to bounce in place.

use bevy::math::Vec2;

use super::geometry::Rectangle;

/// Move `moving` by `velocity`, stopping at obstacle boundaries.
///
/// The x component is applied first and every obstacle the candidate overlaps
/// clamps the leading x edge, chosen by the sign of `velocity.x`. The y
/// component is then applied and clamped the same way.
pub fn resolve_move<'a, I>(moving: Rectangle, velocity: Vec2, obstacles: I) -> Rectangle
where
    I: IntoIterator<Item = &'a Rectangle>,
    I::IntoIter: Clone,
{
    let obstacles = obstacles.into_iter();

    let mut candidate = moving.translated(Vec2::new(velocity.x, 0.0));
    if velocity.x != 0.0 {
        for obstacle in obstacles.clone() {
            if !candidate.intersects(obstacle) {
                continue;
            }
            candidate = if velocity.x > 0.0 {
                candidate.with_right(obstacle.left())
            } else {
                candidate.with_left(obstacle.right())
            };
        }
    }

    candidate = candidate.translated(Vec2::new(0.0, velocity.y));
    if velocity.y != 0.0 {
        for obstacle in obstacles {
            if !candidate.intersects(obstacle) {
                continue;
            }
            candidate = if velocity.y > 0.0 {
                candidate.with_bottom(obstacle.top())
            } else {
                candidate.with_top(obstacle.bottom())
            };
        }
    }

    candidate
}

/// Whether `candidate` overlaps any of `obstacles`.
pub fn is_blocked<'a, I>(candidate: &Rectangle, obstacles: I) -> bool
where
    I: IntoIterator<Item = &'a Rectangle>,
{
    obstacles.into_iter().any(|obstacle| candidate.intersects(obstacle))
}
