//! Gameplay tuning loaded from an external RON file.
//!
//! Every field has a default so a config file only needs to list the values
//! it overrides.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::geometry::Rectangle;
use crate::world::DataLoadError;

/// Default location of the gameplay config.
pub const GAME_CONFIG_PATH: &str = "assets/data/config/game.ron";

/// Gameplay constants. Distances are in pixels, durations in ticks.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // Room grid
    pub tile_size: f32,
    pub room_columns: usize,
    pub room_rows: usize,
    pub hud_height: f32,
    /// Fixed simulation rate in ticks per second.
    pub tick_rate: f64,

    // Player
    pub player_size: f32,
    pub player_speed: f32,
    pub player_max_health: u32,
    pub sword_length: f32,
    pub sword_width: f32,
    /// How long a swing stays active.
    pub sword_ticks: u64,
    pub invulnerable_ticks: u64,

    // Hostiles
    pub enemy_size: f32,
    pub enemy_speed: f32,
    /// Ticks between wander direction changes.
    pub enemy_turn_ticks: u32,
    pub contact_damage: u32,

    // Pickups
    pub pickup_size: f32,

    pub rng_seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_size: 32.0,
            room_columns: 16,
            room_rows: 11,
            hud_height: 64.0,
            tick_rate: 60.0,
            player_size: 20.0,
            player_speed: 2.4,
            player_max_health: 3,
            sword_length: 20.0,
            sword_width: 4.0,
            sword_ticks: 12,
            invulnerable_ticks: 48,
            enemy_size: 20.0,
            enemy_speed: 1.2,
            enemy_turn_ticks: 40,
            contact_damage: 1,
            pickup_size: 12.0,
            rng_seed: 0x5EED,
        }
    }
}

impl GameConfig {
    /// The playfield of one room, anchored at the origin.
    pub fn viewport(&self) -> Rectangle {
        Rectangle::new(
            0.0,
            0.0,
            self.room_columns as f32 * self.tile_size,
            self.room_rows as f32 * self.tile_size,
        )
    }

    /// Full window height: playfield plus the HUD strip beneath it.
    pub fn window_height(&self) -> f32 {
        self.viewport().height + self.hud_height
    }

    /// Reject values the simulation or the fixed timestep cannot run with.
    pub fn validate(&self) -> Result<(), DataLoadError> {
        let positive = [
            ("tick_rate", self.tick_rate),
            ("tile_size", f64::from(self.tile_size)),
            ("player_size", f64::from(self.player_size)),
            ("enemy_size", f64::from(self.enemy_size)),
            ("pickup_size", f64::from(self.pickup_size)),
            ("sword_length", f64::from(self.sword_length)),
            ("sword_width", f64::from(self.sword_width)),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, format!("must be a positive number, got {}", value)));
            }
        }

        let non_negative = [
            ("hud_height", self.hud_height),
            ("player_speed", self.player_speed),
            ("enemy_speed", self.enemy_speed),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(field, format!("must not be negative, got {}", value)));
            }
        }

        let counts = [
            ("room_columns", self.room_columns as u64),
            ("room_rows", self.room_rows as u64),
            ("player_max_health", u64::from(self.player_max_health)),
            ("sword_ticks", self.sword_ticks),
        ];
        for (field, value) in counts {
            if value == 0 {
                return Err(invalid(field, "must be at least 1".to_string()));
            }
        }

        if self.player_size > self.tile_size {
            return Err(invalid(
                "player_size",
                format!("{} does not fit a {} px tile", self.player_size, self.tile_size),
            ));
        }
        Ok(())
    }

    /// Parse and validate a config from RON text.
    pub fn from_ron(path: &str, contents: &str) -> Result<Self, DataLoadError> {
        let config: Self = ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config at `path`, falling back to defaults when the file is absent.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let display_path = path.display().to_string();

        if !path.exists() {
            info!("No game config at {}, using defaults", display_path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
            path: display_path.clone(),
            details: e.to_string(),
        })?;
        let config = Self::from_ron(&display_path, &contents)?;
        info!("Loaded game config from {}", display_path);
        Ok(config)
    }
}

fn invalid(field: &'static str, details: String) -> DataLoadError {
    DataLoadError::InvalidConfig { field, details }
}
