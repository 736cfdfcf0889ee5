//! The game loop: owns the world and advances it one fixed tick at a time.

use bevy::log::info;
use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::combat::{apply_contact_damage, try_attack};
use crate::core::{Actor, ActorMut, AudioCue, GameConfig, Rectangle, UpdateContext};
use crate::pickups::collect_pickups;
use crate::player::{move_player, Player, TickInput};
use crate::rendering::{DrawCommand, DrawTag};
use crate::ui::{hud_commands, HudSnapshot};
use crate::world::{DataLoadError, LoadedWorld, RoomCoord, Transition, WorldDefinition, WorldGraph};

/// Everything one tick produces for the outside world.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Ordered draw list: floor, walls, door, pickups, hostiles, player, sword, HUD.
    pub draw: Vec<DrawCommand>,
    /// Audio cues in the order they happened.
    pub cues: Vec<AudioCue>,
    pub hud: HudSnapshot,
    /// Room the frame shows.
    pub room: RoomCoord,
    pub defeated: bool,
    pub quit_requested: bool,
}

/// Whole game state: the world graph, the player and the world-level counters.
#[derive(Resource, Debug)]
pub struct Game {
    config: GameConfig,
    world: WorldGraph,
    player: Player,
    currency: u32,
    tick: u64,
    rng: StdRng,
    defeated: bool,
}

impl Game {
    /// Build a game from a world definition, seeding the RNG from `config`.
    pub fn new(config: GameConfig, definition: &WorldDefinition) -> Result<Self, DataLoadError> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(config.rng_seed);
        let loaded = definition.build(&config, &mut rng)?;
        Ok(Self::from_world(config, loaded, rng))
    }

    /// Build a game around an already validated world.
    pub fn from_world(config: GameConfig, loaded: LoadedWorld, rng: StdRng) -> Self {
        let player = Player::new(loaded.player_start, &config);
        Self {
            config,
            world: loaded.graph,
            player,
            currency: 0,
            tick: 0,
            rng,
            defeated: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn world(&self) -> &WorldGraph {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn currency(&self) -> u32 {
        self.currency
    }

    /// Number of ticks simulated so far.
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn is_defeated(&self) -> bool {
        self.defeated
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            health: self.player.health.current,
            max_health: self.player.health.maximum,
            currency: self.currency,
        }
    }

    /// Run one tick.
    ///
    /// Order: expire the swing, move the player, trigger the attack, move
    /// hostiles, apply contact damage, collect pickups, check the door, prune
    /// dead actors, then walk between rooms. Once defeated the world stops
    /// changing but frames are still produced.
    pub fn tick(&mut self, input: &TickInput) -> Frame {
        let mut cues = Vec::new();

        if !self.defeated {
            self.simulate(input, &mut cues);
            self.tick += 1;
        }

        Frame {
            draw: self.draw_list(),
            cues,
            hud: self.hud(),
            room: self.world.active_coord(),
            defeated: self.defeated,
            quit_requested: input.quit,
        }
    }

    fn simulate(&mut self, input: &TickInput, cues: &mut Vec<AudioCue>) {
        let now = self.tick;
        let viewport = self.config.viewport();
        let config = &self.config;
        let player = &mut self.player;
        let room = self.world.active_room_mut();

        let obstacles: Vec<Rectangle> = room.obstacles().copied().collect();
        ActorMut::Player(&mut *player).update(&mut UpdateContext {
            now,
            config,
            viewport: &viewport,
            obstacles: &obstacles,
            rng: &mut self.rng,
        });
        move_player(player, input, &obstacles, config.player_speed);

        if input.attack {
            try_attack(player, room, now, config, &mut self.rng, cues);
        }

        room.update_actors(now, &viewport, config, &mut self.rng);
        apply_contact_damage(player, room, now, config, cues);
        collect_pickups(player, room, &mut self.currency, cues);

        if room.try_unlock() {
            cues.push(AudioCue::DoorUnlock);
        }
        room.prune();

        match self.world.transition(&player.bounds, &viewport) {
            Transition::Stay => {}
            Transition::Blocked(bounds) | Transition::Entered { bounds, .. } => {
                player.bounds = bounds;
            }
        }

        if player.health.is_dead() {
            self.defeated = true;
            info!("Player defeated on tick {}", now);
        }
    }

    /// The current frame's draw list.
    pub fn draw_list(&self) -> Vec<DrawCommand> {
        let room = self.world.active_room();
        let mut out = Vec::with_capacity(room.walls.len() + room.hostiles.len() + 16);

        out.push(DrawCommand::fill(self.config.viewport(), DrawTag::Floor));
        out.extend(
            room.walls
                .iter()
                .map(|wall| DrawCommand::fill(*wall, DrawTag::Wall)),
        );
        if let Some(door) = room.door().filter(|_| room.is_locked()) {
            out.push(DrawCommand::fill(door, DrawTag::Door));
        }
        for pickup in &room.pickups {
            Actor::Pickup(pickup).draw(&mut out);
        }
        for hostile in &room.hostiles {
            Actor::Hostile(hostile).draw(&mut out);
        }
        Actor::Player(&self.player).draw(&mut out);
        out.extend(hud_commands(&self.hud(), &self.config));

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::new(GameConfig::default(), &WorldDefinition::builtin()).unwrap()
    }

    #[test]
    fn idle_tick_advances_clock_only() {
        let mut game = game();
        let start = game.player().bounds;
        let frame = game.tick(&TickInput::default());

        assert_eq!(game.current_tick(), 1);
        assert_eq!(game.player().bounds, start);
        assert_eq!(frame.room, RoomCoord::new(0, 0));
        assert!(!frame.defeated);
        assert_eq!(frame.hud, HudSnapshot { health: 3, max_health: 3, currency: 0 });
    }

    #[test]
    fn draw_list_starts_with_floor_and_ends_with_hud() {
        let mut game = game();
        let frame = game.tick(&TickInput::default());

        assert_eq!(frame.draw.first().map(DrawCommand::tag), Some(DrawTag::Floor));
        assert_eq!(frame.draw.last().map(DrawCommand::tag), Some(DrawTag::HudText));
    }

    #[test]
    fn quit_is_reported_not_acted_on() {
        let mut game = game();
        let frame = game.tick(&TickInput {
            quit: true,
            ..Default::default()
        });
        assert!(frame.quit_requested);
        assert_eq!(game.current_tick(), 1);
    }

    #[test]
    fn swing_cue_and_sword_in_draw_list() {
        let mut game = game();
        let frame = game.tick(&TickInput {
            attack: true,
            ..Default::default()
        });

        assert_eq!(frame.cues.first(), Some(&AudioCue::Swing));
        assert!(frame.draw.iter().any(|c| c.tag() == DrawTag::Sword));
        assert!(game.player().attack.active);
    }
}
