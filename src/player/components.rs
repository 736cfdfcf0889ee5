//! Player state.

use bevy::math::Vec2;

use crate::combat::{AttackState, Health};
use crate::core::{GameConfig, Rectangle};

/// The single player-controlled actor.
///
/// Position, health and facing survive room transitions; the player is never
/// removed from the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub bounds: Rectangle,
    pub health: Health,
    /// Unit vector of the last nonzero movement direction.
    pub facing: Vec2,
    pub attack: AttackState,
    /// Contact damage is ignored before this tick.
    pub invulnerable_until: u64,
}

impl Player {
    /// Spawn a player with its top-left corner at `position`, facing up.
    pub fn new(position: Vec2, config: &GameConfig) -> Self {
        Self {
            bounds: Rectangle::new(position.x, position.y, config.player_size, config.player_size),
            health: Health::new(config.player_max_health),
            facing: Vec2::new(0.0, -1.0),
            attack: AttackState::default(),
            invulnerable_until: 0,
        }
    }

    pub fn is_invulnerable(&self, now: u64) -> bool {
        now < self.invulnerable_until
    }
}
