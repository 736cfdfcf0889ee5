//! Draw primitives emitted by the simulation each tick.
//!
//! Coordinates are screen space with y growing downward; the playfield
//! occupies the viewport at the origin and the HUD strip sits below it.

use crate::core::Rectangle;

/// What a primitive represents. The front end maps each tag to a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawTag {
    Floor,
    Wall,
    Door,
    Player,
    Sword,
    Hostile,
    HealthPickup,
    CurrencyPickup,
    HeartFull,
    HeartEmpty,
    HudText,
}

/// One primitive in a frame's ordered draw list.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Solid rectangle.
    Fill { rect: Rectangle, tag: DrawTag },
    /// Text with its top-left corner at (`x`, `y`).
    Label {
        text: String,
        x: f32,
        y: f32,
        tag: DrawTag,
    },
}

impl DrawCommand {
    pub fn fill(rect: Rectangle, tag: DrawTag) -> Self {
        DrawCommand::Fill { rect, tag }
    }

    pub fn tag(&self) -> DrawTag {
        match self {
            DrawCommand::Fill { tag, .. } | DrawCommand::Label { tag, .. } => *tag,
        }
    }
}
