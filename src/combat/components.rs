//! Combat-related state: health and the sword swing window.

use crate::core::Rectangle;

/// Whole-unit health with a fixed maximum. Never drops below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: u32,
    pub maximum: u32,
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self {
            current: max,
            maximum: max,
        }
    }

    /// Returns the damage actually taken.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    /// Returns the amount actually healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let actual = amount.min(self.maximum - self.current);
        self.current += actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current == 0
    }
}

/// The player's sword swing.
///
/// A swing lasts a fixed number of ticks. Hits are resolved once when the
/// swing starts; `hitbox` is kept only so the swing can be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AttackState {
    pub active: bool,
    /// First tick at which the swing is over.
    pub expiry_tick: u64,
    pub hitbox: Option<Rectangle>,
}

impl AttackState {
    pub fn can_attack(&self) -> bool {
        !self.active
    }

    /// Start a swing. Returns `false` and leaves the state untouched if one is
    /// already in progress.
    pub fn begin(&mut self, hitbox: Rectangle, now: u64, duration: u64) -> bool {
        if !self.can_attack() {
            return false;
        }
        self.active = true;
        self.expiry_tick = now + duration;
        self.hitbox = Some(hitbox);
        true
    }

    /// End the swing once `now` reaches the expiry tick.
    pub fn update(&mut self, now: u64) {
        if self.active && now >= self.expiry_tick {
            self.active = false;
            self.hitbox = None;
        }
    }
}
