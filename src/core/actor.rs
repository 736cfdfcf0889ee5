//! The closed set of simulated actors.

use rand::Rng;

use crate::enemies::{wander, Hostile};
use crate::pickups::{Pickup, PickupKind};
use crate::player::Player;
use crate::rendering::{DrawCommand, DrawTag};

use super::config::GameConfig;
use super::geometry::Rectangle;

/// A borrowed view over any simulated actor.
///
/// Rooms and the orchestrator keep each kind in its own collection; this type
/// gives them one place to dispatch the behaviour all actors share.
#[derive(Debug, Clone, Copy)]
pub enum Actor<'a> {
    Player(&'a Player),
    Hostile(&'a Hostile),
    Pickup(&'a Pickup),
}

impl Actor<'_> {
    pub fn bounds(&self) -> Rectangle {
        match self {
            Actor::Player(player) => player.bounds,
            Actor::Hostile(hostile) => hostile.bounds,
            Actor::Pickup(pickup) => pickup.bounds,
        }
    }

    /// The player is always alive as far as the world is concerned; defeat is
    /// tracked separately.
    pub fn is_alive(&self) -> bool {
        match self {
            Actor::Player(_) => true,
            Actor::Hostile(hostile) => hostile.alive,
            Actor::Pickup(pickup) => pickup.alive,
        }
    }

    /// Append this actor's primitives to `out`. Dead actors draw nothing.
    pub fn draw(&self, out: &mut Vec<DrawCommand>) {
        if !self.is_alive() {
            return;
        }

        match self {
            Actor::Player(player) => {
                out.push(DrawCommand::fill(player.bounds, DrawTag::Player));
                if let Some(sword) = player.attack.hitbox.filter(|_| player.attack.active) {
                    out.push(DrawCommand::fill(sword, DrawTag::Sword));
                }
            }
            Actor::Hostile(hostile) => {
                out.push(DrawCommand::fill(hostile.bounds, DrawTag::Hostile));
            }
            Actor::Pickup(pickup) => {
                let tag = match pickup.kind {
                    PickupKind::Health => DrawTag::HealthPickup,
                    PickupKind::Currency => DrawTag::CurrencyPickup,
                };
                out.push(DrawCommand::fill(pickup.bounds, tag));
            }
        }
    }
}

/// What an actor may read while it updates.
pub struct UpdateContext<'a, R: ?Sized> {
    pub now: u64,
    pub config: &'a GameConfig,
    /// Area hostiles may not leave.
    pub viewport: &'a Rectangle,
    /// Walls, plus the door while locked.
    pub obstacles: &'a [Rectangle],
    pub rng: &'a mut R,
}

/// A mutable view over any simulated actor, for the per-tick update.
#[derive(Debug)]
pub enum ActorMut<'a> {
    Player(&'a mut Player),
    Hostile(&'a mut Hostile),
    Pickup(&'a mut Pickup),
}

impl ActorMut<'_> {
    /// Advance the actor's own timers and motion by one tick.
    ///
    /// The player only expires its swing here; its movement is input driven.
    /// Pickups are static.
    pub fn update<R: Rng + ?Sized>(self, ctx: &mut UpdateContext<'_, R>) {
        match self {
            ActorMut::Player(player) => player.attack.update(ctx.now),
            ActorMut::Hostile(hostile) => {
                wander(hostile, ctx.obstacles, ctx.viewport, ctx.config, &mut *ctx.rng)
            }
            ActorMut::Pickup(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn dead_actors_draw_nothing() {
        let mut hostile = Hostile::new(Rectangle::new(0.0, 0.0, 20.0, 20.0), Vec2::ZERO, 1);
        hostile.kill();
        let mut out = Vec::new();
        Actor::Hostile(&hostile).draw(&mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn swinging_player_draws_sword_after_body() {
        let config = GameConfig::default();
        let mut player = Player::new(Vec2::new(100.0, 100.0), &config);
        let blade = Rectangle::new(108.0, 80.0, 4.0, 20.0);
        player.attack.begin(blade, 0, config.sword_ticks);

        let mut out = Vec::new();
        Actor::Player(&player).draw(&mut out);

        let tags: Vec<DrawTag> = out.iter().map(DrawCommand::tag).collect();
        assert_eq!(tags, vec![DrawTag::Player, DrawTag::Sword]);
    }

    #[test]
    fn pickup_tag_follows_kind() {
        let pickup = Pickup::new(Rectangle::new(0.0, 0.0, 12.0, 12.0), PickupKind::Currency);
        let mut out = Vec::new();
        Actor::Pickup(&pickup).draw(&mut out);
        assert_eq!(out[0].tag(), DrawTag::CurrencyPickup);
        assert_eq!(Actor::Pickup(&pickup).bounds(), pickup.bounds);
    }

    #[test]
    fn update_expires_the_player_swing() {
        let config = GameConfig::default();
        let mut player = Player::new(Vec2::new(100.0, 100.0), &config);
        player.attack.begin(Rectangle::new(108.0, 80.0, 4.0, 20.0), 0, config.sword_ticks);

        let mut rng = StdRng::seed_from_u64(0);
        let viewport = config.viewport();
        let mut ctx = UpdateContext {
            now: config.sword_ticks,
            config: &config,
            viewport: &viewport,
            obstacles: &[],
            rng: &mut rng,
        };
        ActorMut::Player(&mut player).update(&mut ctx);

        assert!(!player.attack.active);
        assert!(player.attack.hitbox.is_none());
    }

    #[test]
    fn update_moves_hostiles_and_leaves_pickups_alone() {
        let config = GameConfig::default();
        let start = Rectangle::new(100.0, 100.0, 20.0, 20.0);
        let mut hostile = Hostile::new(start, Vec2::new(1.2, 0.0), 10);
        let mut pickup = Pickup::new(Rectangle::new(0.0, 0.0, 12.0, 12.0), PickupKind::Health);
        let before = pickup.clone();

        let mut rng = StdRng::seed_from_u64(0);
        let viewport = config.viewport();
        let mut ctx = UpdateContext {
            now: 1,
            config: &config,
            viewport: &viewport,
            obstacles: &[],
            rng: &mut rng,
        };
        ActorMut::Hostile(&mut hostile).update(&mut ctx);
        ActorMut::Pickup(&mut pickup).update(&mut ctx);

        assert_eq!(hostile.bounds, start.translated(Vec2::new(1.2, 0.0)));
        assert_eq!(hostile.direction_countdown, 9);
        assert_eq!(pickup, before);
    }
}
