//! Visual configuration loaded from external RON file.
//!
//! Allows tweaking the palette without recompilation.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

use super::draw::DrawTag;

/// Default location of the visual config.
pub const VISUAL_CONFIG_PATH: &str = "assets/data/rendering/visual_config.ron";

/// Visual configuration loaded from assets/data/rendering/visual_config.ron.
///
/// Colours are sRGB triples in 0..=1.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VisualConfig {
    // Playfield
    pub floor: (f32, f32, f32),
    pub wall: (f32, f32, f32),
    pub door: (f32, f32, f32),
    // Actors
    pub player: (f32, f32, f32),
    pub sword: (f32, f32, f32),
    pub hostile: (f32, f32, f32),
    pub health_pickup: (f32, f32, f32),
    pub currency_pickup: (f32, f32, f32),
    // HUD
    pub heart_full: (f32, f32, f32),
    pub heart_empty: (f32, f32, f32),
    pub hud_text: (f32, f32, f32),
    pub hud_font_size: f32,
    pub clear_color: (f32, f32, f32),
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            floor: (0.016, 0.235, 0.078),
            wall: (0.235, 0.392, 0.471),
            door: (0.706, 0.549, 0.235),
            player: (0.157, 0.784, 0.157),
            sword: (0.941, 0.941, 0.784),
            hostile: (0.784, 0.157, 0.157),
            health_pickup: (0.902, 0.118, 0.275),
            currency_pickup: (0.157, 0.863, 0.863),
            heart_full: (0.902, 0.118, 0.275),
            heart_empty: (0.196, 0.196, 0.196),
            hud_text: (0.157, 0.863, 0.863),
            hud_font_size: 20.0,
            clear_color: (0.0, 0.0, 0.0),
        }
    }
}

fn rgb((r, g, b): (f32, f32, f32)) -> Color {
    Color::srgb(r, g, b)
}

impl VisualConfig {
    /// Load visual config from RON file.
    pub fn load() -> Self {
        let path = VISUAL_CONFIG_PATH;
        match fs::read_to_string(path) {
            Ok(contents) => match ron::from_str(&contents) {
                Ok(config) => {
                    info!("Loaded visual config from {}", path);
                    config
                }
                Err(e) => {
                    error!("Failed to parse {}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Could not read {}: {}. Using defaults.", path, e);
                Self::default()
            }
        }
    }

    /// Colour for a draw tag.
    pub fn color(&self, tag: DrawTag) -> Color {
        rgb(match tag {
            DrawTag::Floor => self.floor,
            DrawTag::Wall => self.wall,
            DrawTag::Door => self.door,
            DrawTag::Player => self.player,
            DrawTag::Sword => self.sword,
            DrawTag::Hostile => self.hostile,
            DrawTag::HealthPickup => self.health_pickup,
            DrawTag::CurrencyPickup => self.currency_pickup,
            DrawTag::HeartFull => self.heart_full,
            DrawTag::HeartEmpty => self.heart_empty,
            DrawTag::HudText => self.hud_text,
        })
    }

    pub fn clear_color(&self) -> Color {
        rgb(self.clear_color)
    }
}

/// System to load visual config at startup.
pub fn load_visual_config(mut commands: Commands) {
    let config = VisualConfig::load();
    commands.insert_resource(ClearColor(config.clear_color()));
    commands.insert_resource(config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_palette_keeps_other_defaults() {
        let config: VisualConfig = ron::from_str("(wall: (1.0, 0.0, 0.0))").unwrap();
        assert_eq!(config.wall, (1.0, 0.0, 0.0));
        assert_eq!(config.floor, VisualConfig::default().floor);
        assert_eq!(config.color(DrawTag::Wall), Color::srgb(1.0, 0.0, 0.0));
    }
}
