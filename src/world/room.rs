//! A single room: walls, the hostiles and pickups inside it, and its lock.

use bevy::log::{info, warn};
use rand::Rng;

use super::layout::RoomLayout;
use crate::core::{ActorMut, GameConfig, Rectangle, UpdateContext};
use crate::enemies::{initial_velocity, Hostile};
use crate::pickups::Pickup;

/// Runtime state of one room.
///
/// Walls never change after construction. Hostiles and pickups are marked
/// dead during a tick and removed by [`Room::prune`] at its end.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub walls: Vec<Rectangle>,
    pub hostiles: Vec<Hostile>,
    pub pickups: Vec<Pickup>,
    locked: bool,
    door: Option<Rectangle>,
}

impl Room {
    /// Build a room from a validated layout.
    ///
    /// A room is locked only when it has both a door tile and at least one
    /// hostile; a door with nothing guarding it is dropped.
    pub fn from_layout<R: Rng + ?Sized>(
        layout: &RoomLayout,
        config: &GameConfig,
        rng: &mut R,
    ) -> Self {
        let placements = layout.placements(config);

        let hostiles: Vec<Hostile> = placements
            .hostiles
            .into_iter()
            .map(|bounds| {
                Hostile::new(
                    bounds,
                    initial_velocity(rng, config.enemy_speed),
                    config.enemy_turn_ticks.max(1),
                )
            })
            .collect();

        let pickups = placements
            .pickups
            .into_iter()
            .map(|(bounds, kind)| Pickup::new(bounds, kind))
            .collect();

        let door = match placements.door {
            Some(door) if !hostiles.is_empty() => Some(door),
            Some(door) => {
                warn!(
                    "Door tile at ({}, {}) has no hostiles to guard it; room stays open",
                    door.x, door.y
                );
                None
            }
            None => None,
        };

        Self {
            walls: placements.walls,
            hostiles,
            pickups,
            locked: door.is_some(),
            door,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The door rectangle, present only if this room was ever locked.
    pub fn door(&self) -> Option<Rectangle> {
        self.door
    }

    /// Everything that blocks movement right now: walls, plus the door while locked.
    pub fn obstacles(&self) -> impl Iterator<Item = &Rectangle> + Clone {
        let door = if self.locked { self.door.as_ref() } else { None };
        self.walls.iter().chain(door)
    }

    /// Advance every hostile and pickup one tick. The locked door and the
    /// edges of `viewport` block hostiles like walls.
    pub fn update_actors<R: Rng + ?Sized>(
        &mut self,
        now: u64,
        viewport: &Rectangle,
        config: &GameConfig,
        rng: &mut R,
    ) {
        let obstacles: Vec<Rectangle> = self.obstacles().copied().collect();
        let mut ctx = UpdateContext {
            now,
            config,
            viewport,
            obstacles: &obstacles,
            rng,
        };
        for hostile in self.hostiles.iter_mut() {
            ActorMut::Hostile(hostile).update(&mut ctx);
        }
        for pickup in self.pickups.iter_mut() {
            ActorMut::Pickup(pickup).update(&mut ctx);
        }
    }

    /// Live hostiles remaining in the room.
    pub fn live_hostiles(&self) -> usize {
        self.hostiles.iter().filter(|h| h.alive).count()
    }

    /// Open the door once no live hostile remains. Returns `true` only on the
    /// tick the room actually unlocks.
    pub fn try_unlock(&mut self) -> bool {
        if !self.locked || self.live_hostiles() > 0 {
            return false;
        }
        self.locked = false;
        info!("Room cleared, door unlocked");
        true
    }

    /// Drop every hostile and pickup marked dead this tick.
    pub fn prune(&mut self) {
        self.hostiles.retain(|h| h.alive);
        self.pickups.retain(|p| p.alive);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn build(rows: &[&str]) -> Room {
        let layout = RoomLayout::parse(rows).unwrap();
        Room::from_layout(&layout, &GameConfig::default(), &mut StdRng::seed_from_u64(0))
    }

    #[test]
    fn door_with_hostile_locks() {
        let room = build(&["#D#", "#E#", "###"]);
        assert!(room.is_locked());
        assert_eq!(room.door(), Some(Rectangle::new(32.0, 0.0, 32.0, 32.0)));
        assert_eq!(room.obstacles().count(), room.walls.len() + 1);
    }

    #[test]
    fn door_without_hostiles_never_locks() {
        let room = build(&["#D#", "#.#", "###"]);
        assert!(!room.is_locked());
        assert!(room.door().is_none());
        assert_eq!(room.obstacles().count(), room.walls.len());
    }

    #[test]
    fn unlock_waits_for_last_hostile() {
        let mut room = build(&["#D##", "#EE#", "####"]);
        room.hostiles[0].kill();
        assert!(!room.try_unlock());
        room.hostiles[1].kill();
        assert!(room.try_unlock());
        assert!(!room.is_locked());
        assert!(room.door().is_some());
        assert!(!room.try_unlock());
    }

    #[test]
    fn hostiles_start_with_horizontal_drift() {
        let room = build(&["#####", "#E.E#", "#####"]);
        for hostile in &room.hostiles {
            assert_eq!(hostile.velocity.y, 0.0);
            assert_eq!(hostile.velocity.x.abs(), GameConfig::default().enemy_speed);
            assert_eq!(hostile.direction_countdown, GameConfig::default().enemy_turn_ticks);
        }
    }

    #[test]
    fn locked_door_blocks_hostiles() {
        let mut room = build(&["....", ".ED.", "...."]);
        let config = GameConfig::default();
        let start = Rectangle::new(43.5, 38.0, 20.0, 20.0);
        room.hostiles[0].bounds = start;
        room.hostiles[0].velocity = bevy::math::Vec2::new(1.2, 0.0);

        room.update_actors(1, &config.viewport(), &config, &mut StdRng::seed_from_u64(2));

        assert_eq!(room.hostiles[0].bounds, start);
        assert_eq!(room.hostiles[0].velocity.x, -1.2);
    }

    #[test]
    fn prune_removes_only_dead_entities() {
        let mut room = build(&["#####", "#EHR#", "#####"]);
        room.hostiles[0].kill();
        room.pickups[1].alive = false;
        room.prune();
        assert!(room.hostiles.is_empty());
        assert_eq!(room.pickups.len(), 1);
        assert_eq!(room.pickups[0].kind, crate::pickups::PickupKind::Health);
    }
}
