//! Spawning and collecting pickups.

use bevy::log::debug;
use bevy::math::Vec2;
use rand::Rng;

use super::components::{Pickup, PickupKind};
use crate::core::{AudioCue, GameConfig, Rectangle};
use crate::player::Player;
use crate::world::Room;

/// Drop a pickup of random kind centred on `position` in `room`.
pub fn request_spawn<R: Rng + ?Sized>(
    position: Vec2,
    room: &mut Room,
    rng: &mut R,
    config: &GameConfig,
) -> PickupKind {
    let kind = if rng.gen_bool(0.5) {
        PickupKind::Health
    } else {
        PickupKind::Currency
    };
    let bounds = Rectangle::from_center(position, config.pickup_size, config.pickup_size);
    room.pickups.push(Pickup::new(bounds, kind));
    kind
}

/// Collect every live pickup the player overlaps.
///
/// Health restores one unit up to the maximum and is consumed even at full
/// health. Currency adds one to `currency`. Each collected pickup is marked
/// dead immediately and emits one [`AudioCue::Pickup`]. Returns how many were
/// collected.
pub fn collect_pickups(
    player: &mut Player,
    room: &mut Room,
    currency: &mut u32,
    cues: &mut Vec<AudioCue>,
) -> usize {
    let mut collected = 0;

    for pickup in room.pickups.iter_mut() {
        if !pickup.alive || !player.bounds.intersects(&pickup.bounds) {
            continue;
        }

        match pickup.kind {
            PickupKind::Health => {
                player.health.heal(1);
            }
            PickupKind::Currency => *currency += 1,
        }
        pickup.alive = false;
        collected += 1;
        cues.push(AudioCue::Pickup);
        debug!("Collected {:?} pickup", pickup.kind);
    }

    collected
}
