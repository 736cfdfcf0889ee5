//! Sword attacks and contact damage.

use bevy::log::{debug, info};
use bevy::math::Vec2;
use rand::Rng;

use crate::core::{AudioCue, GameConfig, Rectangle};
use crate::pickups::request_spawn;
use crate::player::Player;
use crate::world::Room;

/// Sword rectangle for a swing from `bounds` toward `facing`.
///
/// The blade lies along the dominant axis of `facing`, flush against that
/// edge of the player and centred on the other axis. Ties go vertical.
pub fn sword_hitbox(bounds: &Rectangle, facing: Vec2, length: f32, width: f32) -> Rectangle {
    let center = bounds.center();

    if facing.x.abs() > facing.y.abs() {
        let blade = Rectangle::new(0.0, center.y - width / 2.0, length, width);
        if facing.x < 0.0 {
            blade.with_right(bounds.left())
        } else {
            blade.with_left(bounds.right())
        }
    } else {
        let blade = Rectangle::new(center.x - width / 2.0, 0.0, width, length);
        if facing.y < 0.0 {
            blade.with_bottom(bounds.top())
        } else {
            blade.with_top(bounds.bottom())
        }
    }
}

/// What a single attack trigger did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttackOutcome {
    /// False when a swing was already in progress.
    pub started: bool,
    pub kills: usize,
    pub unlocked: bool,
}

/// Kill every live hostile overlapping `hitbox`, dropping a pickup at each
/// one's centre. Unlocks the room once none remain.
pub fn resolve_hits<R: Rng + ?Sized>(
    hitbox: &Rectangle,
    room: &mut Room,
    rng: &mut R,
    config: &GameConfig,
    cues: &mut Vec<AudioCue>,
) -> (usize, bool) {
    let mut drops = Vec::new();
    for hostile in room.hostiles.iter_mut() {
        if hostile.alive && hitbox.intersects(&hostile.bounds) {
            hostile.kill();
            drops.push(hostile.bounds.center());
            cues.push(AudioCue::EnemyDefeated);
        }
    }

    for position in &drops {
        let kind = request_spawn(*position, room, rng, config);
        debug!("Hostile defeated at {:?}, dropped {:?}", position, kind);
    }

    let unlocked = room.try_unlock();
    if unlocked {
        cues.push(AudioCue::DoorUnlock);
    }
    (drops.len(), unlocked)
}

/// Start a swing if none is active and resolve its hits immediately.
///
/// Hits are checked once, at trigger time. Re-triggering during a swing does
/// nothing.
pub fn try_attack<R: Rng + ?Sized>(
    player: &mut Player,
    room: &mut Room,
    now: u64,
    config: &GameConfig,
    rng: &mut R,
    cues: &mut Vec<AudioCue>,
) -> AttackOutcome {
    let hitbox = sword_hitbox(
        &player.bounds,
        player.facing,
        config.sword_length,
        config.sword_width,
    );
    if !player.attack.begin(hitbox, now, config.sword_ticks) {
        return AttackOutcome::default();
    }
    cues.push(AudioCue::Swing);

    let (kills, unlocked) = resolve_hits(&hitbox, room, rng, config, cues);
    AttackOutcome {
        started: true,
        kills,
        unlocked,
    }
}

/// Hurt the player if it touches a live hostile and is not invulnerable.
///
/// Returns `true` when damage was dealt this tick.
pub fn apply_contact_damage(
    player: &mut Player,
    room: &Room,
    now: u64,
    config: &GameConfig,
    cues: &mut Vec<AudioCue>,
) -> bool {
    if player.is_invulnerable(now) || player.health.is_dead() {
        return false;
    }

    let touching = room
        .hostiles
        .iter()
        .any(|hostile| hostile.alive && hostile.bounds.intersects(&player.bounds));
    if !touching {
        return false;
    }

    player.health.take_damage(config.contact_damage);
    player.invulnerable_until = now + config.invulnerable_ticks;
    cues.push(AudioCue::Hurt);
    info!(
        "Player hurt, health {}/{}",
        player.health.current, player.health.maximum
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::RoomLayout;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    fn room(rows: &[&str]) -> Room {
        let layout = RoomLayout::parse(rows).unwrap();
        Room::from_layout(&layout, &config(), &mut StdRng::seed_from_u64(0))
    }

    fn player_at(x: f32, y: f32, facing: Vec2) -> Player {
        let mut player = Player::new(Vec2::new(x, y), &config());
        player.facing = facing;
        player
    }

    #[test]
    fn hitbox_is_flush_with_facing_edge() {
        let bounds = Rectangle::new(100.0, 100.0, 20.0, 20.0);

        assert_eq!(sword_hitbox(&bounds, Vec2::X, 20.0, 4.0), Rectangle::new(120.0, 108.0, 20.0, 4.0));
        assert_eq!(sword_hitbox(&bounds, Vec2::NEG_X, 20.0, 4.0), Rectangle::new(80.0, 108.0, 20.0, 4.0));
        assert_eq!(sword_hitbox(&bounds, Vec2::NEG_Y, 20.0, 4.0), Rectangle::new(108.0, 80.0, 4.0, 20.0));
        assert_eq!(sword_hitbox(&bounds, Vec2::Y, 20.0, 4.0), Rectangle::new(108.0, 120.0, 4.0, 20.0));
    }

    #[test]
    fn diagonal_tie_goes_vertical() {
        let bounds = Rectangle::new(100.0, 100.0, 20.0, 20.0);
        let facing = Vec2::new(1.0, 1.0).normalize();
        let blade = sword_hitbox(&bounds, facing, 20.0, 4.0);
        assert_eq!(blade.width, 4.0);
        assert_eq!(blade.top(), bounds.bottom());
    }

    #[test]
    fn attack_kills_hostile_and_drops_pickup() {
        let mut room = room(&["....", "..E.", "...."]);
        // Hostile occupies (70, 38)-(90, 58); stand left of it facing right.
        let mut player = player_at(50.0, 38.0, Vec2::X);
        let mut rng = StdRng::seed_from_u64(1);
        let mut cues = Vec::new();

        let outcome = try_attack(&mut player, &mut room, 0, &config(), &mut rng, &mut cues);

        assert_eq!(outcome, AttackOutcome { started: true, kills: 1, unlocked: false });
        assert!(!room.hostiles[0].alive);
        assert_eq!(room.pickups.len(), 1);
        assert_eq!(room.pickups[0].bounds.center(), Vec2::new(80.0, 48.0));
        assert_eq!(cues, vec![AudioCue::Swing, AudioCue::EnemyDefeated]);
    }

    #[test]
    fn retrigger_during_swing_is_ignored() {
        let mut room = room(&["....", "..E.", "...."]);
        let mut player = player_at(0.0, 0.0, Vec2::Y);
        let mut rng = StdRng::seed_from_u64(1);
        let mut cues = Vec::new();

        assert!(try_attack(&mut player, &mut room, 3, &config(), &mut rng, &mut cues).started);
        let expiry = player.attack.expiry_tick;

        // Move next to the hostile; the second trigger must not hit it.
        player.bounds = Rectangle::new(50.0, 38.0, 20.0, 20.0);
        player.facing = Vec2::X;
        let second = try_attack(&mut player, &mut room, 5, &config(), &mut rng, &mut cues);

        assert_eq!(second, AttackOutcome::default());
        assert_eq!(player.attack.expiry_tick, expiry);
        assert!(room.hostiles[0].alive);
        assert_eq!(cues, vec![AudioCue::Swing]);
    }

    #[test]
    fn last_kill_unlocks_in_same_tick() {
        let mut room = room(&["#D##", "#.E#", "####"]);
        assert!(room.is_locked());
        let mut player = player_at(38.0, 38.0, Vec2::X);
        let mut rng = StdRng::seed_from_u64(1);
        let mut cues = Vec::new();

        let outcome = try_attack(&mut player, &mut room, 0, &config(), &mut rng, &mut cues);

        assert!(outcome.unlocked);
        assert!(!room.is_locked());
        assert_eq!(
            cues,
            vec![AudioCue::Swing, AudioCue::EnemyDefeated, AudioCue::DoorUnlock]
        );
    }

    #[test]
    fn contact_damage_respects_invulnerability() {
        let room = room(&["....", "..E.", "...."]);
        let config = config();
        let mut player = player_at(75.0, 40.0, Vec2::Y);
        let mut cues = Vec::new();

        assert!(apply_contact_damage(&mut player, &room, 10, &config, &mut cues));
        assert_eq!(player.health.current, 2);
        assert_eq!(player.invulnerable_until, 58);

        assert!(!apply_contact_damage(&mut player, &room, 57, &config, &mut cues));
        assert!(apply_contact_damage(&mut player, &room, 58, &config, &mut cues));
        assert_eq!(player.health.current, 1);
        assert_eq!(cues, vec![AudioCue::Hurt, AudioCue::Hurt]);
    }

    #[test]
    fn dead_hostiles_deal_no_damage() {
        let mut room = room(&["....", "..E.", "...."]);
        room.hostiles[0].kill();
        let mut player = player_at(75.0, 40.0, Vec2::Y);
        let mut cues = Vec::new();

        assert!(!apply_contact_damage(&mut player, &room, 0, &config(), &mut cues));
        assert!(cues.is_empty());
    }
}
