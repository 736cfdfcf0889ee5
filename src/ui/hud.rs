//! In-game HUD - hearts and the currency counter.
//!
//! The HUD is part of the per-tick draw list, laid out in the strip beneath
//! the playfield.

use crate::core::{GameConfig, Rectangle};
use crate::rendering::{DrawCommand, DrawTag};

const HEART_SIZE: f32 = 20.0;
const HEART_SPACING: f32 = 24.0;
const HEART_MARGIN: f32 = 10.0;
const HEART_TOP: f32 = 16.0;
const CURRENCY_LABEL_WIDTH: f32 = 160.0;
const CURRENCY_LABEL_TOP: f32 = 20.0;

/// Read-only HUD data for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudSnapshot {
    pub health: u32,
    pub max_health: u32,
    pub currency: u32,
}

/// Lay out the HUD: one heart per unit of max health, filled up to current
/// health, then the currency label.
pub fn hud_commands(hud: &HudSnapshot, config: &GameConfig) -> Vec<DrawCommand> {
    let view = config.viewport();
    let mut out = Vec::with_capacity(hud.max_health as usize + 1);

    for i in 0..hud.max_health {
        let rect = Rectangle::new(
            HEART_MARGIN + i as f32 * HEART_SPACING,
            view.bottom() + HEART_TOP,
            HEART_SIZE,
            HEART_SIZE,
        );
        let tag = if i < hud.health {
            DrawTag::HeartFull
        } else {
            DrawTag::HeartEmpty
        };
        out.push(DrawCommand::fill(rect, tag));
    }

    out.push(DrawCommand::Label {
        text: format!("Coins: {}", hud.currency),
        x: view.right() - CURRENCY_LABEL_WIDTH,
        y: view.bottom() + CURRENCY_LABEL_TOP,
        tag: DrawTag::HudText,
    });

    out
}
