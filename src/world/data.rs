//! World definition data and RON loading.

use bevy::log::info;
use bevy::math::Vec2;
use rand::Rng;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::error::DataLoadError;
use super::graph::{RoomCoord, WorldGraph};
use super::layout::RoomLayout;
use super::room::Room;
use crate::core::{GameConfig, Rectangle};

/// Default location of the world definition.
pub const WORLD_PATH: &str = "assets/data/world.ron";

/// One room entry as read from RON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoomDefinition {
    pub coord: (i32, i32),
    pub layout: Vec<String>,
}

/// The full world as read from RON, before validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorldDefinition {
    pub start_room: (i32, i32),
    /// Player's top-left corner in the start room. Centred when omitted.
    #[serde(default)]
    pub player_start: Option<(f32, f32)>,
    pub rooms: Vec<RoomDefinition>,
}

/// A validated world ready to play.
#[derive(Debug, Clone)]
pub struct LoadedWorld {
    pub graph: WorldGraph,
    pub player_start: Vec2,
}

/// The player must start fully inside the viewport, clear of every wall and
/// of the start room's locked door.
fn check_player_start(
    graph: &WorldGraph,
    start: Vec2,
    config: &GameConfig,
) -> Result<(), DataLoadError> {
    let bounds = Rectangle::new(start.x, start.y, config.player_size, config.player_size);
    let reason = if !bounds.is_inside(&config.viewport()) {
        "is outside the room"
    } else if graph.active_room().obstacles().any(|o| o.intersects(&bounds)) {
        "overlaps a wall or the locked door"
    } else {
        return Ok(());
    };
    Err(DataLoadError::InvalidPlayerStart {
        x: start.x,
        y: start.y,
        reason,
    })
}

impl WorldDefinition {
    /// Parse a world definition from RON text.
    pub fn from_ron(path: &str, contents: &str) -> Result<Self, DataLoadError> {
        ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
            path: path.to_string(),
            details: e.to_string(),
        })
    }

    /// Load the world at `path`, falling back to the built-in world when the
    /// file is absent.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let display_path = path.display().to_string();

        if !path.exists() {
            info!("No world file at {}, using built-in world", display_path);
            return Ok(Self::builtin());
        }

        let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
            path: display_path.clone(),
            details: e.to_string(),
        })?;
        let definition = Self::from_ron(&display_path, &contents)?;
        info!("Loaded world definition from {} ({} rooms)", display_path, definition.rooms.len());
        Ok(definition)
    }

    /// Validate every room and assemble the world graph.
    ///
    /// Any invalid layout, duplicate coordinate, wrong room size, missing
    /// start room or blocked player start fails the whole world.
    pub fn build<R: Rng + ?Sized>(
        &self,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<LoadedWorld, DataLoadError> {
        let mut rooms = HashMap::with_capacity(self.rooms.len());

        for definition in &self.rooms {
            let (x, y) = definition.coord;
            let coord = RoomCoord::new(x, y);
            if rooms.contains_key(&coord) {
                return Err(DataLoadError::DuplicateRoom { x, y });
            }

            let layout = RoomLayout::parse(&definition.layout)
                .and_then(|layout| {
                    layout.expect_size(config.room_columns, config.room_rows)?;
                    Ok(layout)
                })
                .map_err(|source| DataLoadError::InvalidRoom { x, y, source })?;

            rooms.insert(coord, Room::from_layout(&layout, config, rng));
        }

        let graph = WorldGraph::new(rooms, self.start_room.into())?;

        let player_start = match self.player_start {
            Some((x, y)) => Vec2::new(x, y),
            None => config.viewport().center() - Vec2::splat(config.player_size / 2.0),
        };
        check_player_start(&graph, player_start, config)?;

        info!(
            "World ready: {} rooms, starting in ({}, {})",
            graph.room_count(),
            self.start_room.0,
            self.start_room.1
        );
        Ok(LoadedWorld {
            graph,
            player_start,
        })
    }

    /// Three rooms: an open overworld, a locked dungeon south of it guarded by
    /// four hostiles, and a treasure room east of the dungeon behind its door.
    pub fn builtin() -> Self {
        let room = |coord: (i32, i32), rows: &[&str]| RoomDefinition {
            coord,
            layout: rows.iter().map(|row| row.to_string()).collect(),
        };

        Self {
            start_room: (0, 0),
            player_start: None,
            rooms: vec![
                room(
                    (0, 0),
                    &[
                        "################",
                        "#..............#",
                        "#..E...........#",
                        "#..............#",
                        "#......H.......#",
                        "#..............#",
                        "#...........R..#",
                        "#..............#",
                        "#..............#",
                        "#..............#",
                        "#######..#######",
                    ],
                ),
                room(
                    (0, 1),
                    &[
                        "#######..#######",
                        "#..............#",
                        "#..E.......E...#",
                        "#..............#",
                        "#..............#",
                        "#..............D",
                        "#..............#",
                        "#..E.......E...#",
                        "#..............#",
                        "#..............#",
                        "################",
                    ],
                ),
                room(
                    (1, 1),
                    &[
                        "################",
                        "#..............#",
                        "#..............#",
                        "#...R....R.....#",
                        "#..............#",
                        "...............#",
                        "#......H.......#",
                        "#..............#",
                        "#...R....R.....#",
                        "#..............#",
                        "################",
                    ],
                ),
            ],
        }
    }
}
