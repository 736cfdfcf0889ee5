//! Axis-aligned rectangles in screen space (y grows downward).

use bevy::math::Vec2;

/// An axis-aligned box used for walls, entity bounds and hit volumes.
///
/// Rectangles are plain values: moving an entity produces a new rectangle
/// rather than mutating the old one in place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle of the given size centred on `center`.
    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// Same size, left edge moved to `left`.
    pub fn with_left(&self, left: f32) -> Self {
        Self { x: left, ..*self }
    }

    /// Same size, right edge moved to `right`.
    pub fn with_right(&self, right: f32) -> Self {
        Self {
            x: right - self.width,
            ..*self
        }
    }

    /// Same size, top edge moved to `top`.
    pub fn with_top(&self, top: f32) -> Self {
        Self { y: top, ..*self }
    }

    /// Same size, bottom edge moved to `bottom`.
    pub fn with_bottom(&self, bottom: f32) -> Self {
        Self {
            y: bottom - self.height,
            ..*self
        }
    }

    /// Strict overlap test: rectangles that merely share an edge do not intersect.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Whether `self` lies entirely within `outer`.
    pub fn is_inside(&self, outer: &Rectangle) -> bool {
        self.left() >= outer.left()
            && self.right() <= outer.right()
            && self.top() >= outer.top()
            && self.bottom() <= outer.bottom()
    }

    /// Shift the rectangle by the smallest amount that puts it inside `outer`.
    pub fn clamped_inside(&self, outer: &Rectangle) -> Self {
        let x = self.x.clamp(outer.left(), (outer.right() - self.width).max(outer.left()));
        let y = self.y.clamp(outer.top(), (outer.bottom() - self.height).max(outer.top()));
        Self::new(x, y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let b = Rectangle::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn overlapping_rectangles_intersect() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let b = Rectangle::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn edge_setters_keep_size() {
        let r = Rectangle::new(3.0, 4.0, 20.0, 10.0);
        assert_eq!(r.with_right(100.0), Rectangle::new(80.0, 4.0, 20.0, 10.0));
        assert_eq!(r.with_bottom(50.0), Rectangle::new(3.0, 40.0, 20.0, 10.0));
        assert_eq!(r.with_left(-1.0).width, 20.0);
        assert_eq!(r.with_top(7.0).height, 10.0);
    }

    #[test]
    fn clamping_pulls_rectangle_back_inside() {
        let view = Rectangle::new(0.0, 0.0, 100.0, 50.0);
        let r = Rectangle::new(-5.0, 45.0, 20.0, 20.0);
        let clamped = r.clamped_inside(&view);
        assert_eq!(clamped, Rectangle::new(0.0, 30.0, 20.0, 20.0));
        assert!(clamped.is_inside(&view));
    }

    #[test]
    fn centre_round_trips() {
        let r = Rectangle::from_center(Vec2::new(16.0, 16.0), 12.0, 12.0);
        assert_eq!(r, Rectangle::new(10.0, 10.0, 12.0, 12.0));
        assert_eq!(r.center(), Vec2::new(16.0, 16.0));
    }
}
