//! The world graph: rooms keyed by grid coordinate and the rule for walking
//! between them.

use bevy::log::{debug, info};
use serde::Deserialize;
use std::collections::HashMap;

use super::error::DataLoadError;
use super::room::Room;
use crate::core::Rectangle;

/// Position of a room in the world grid. `y` grows downward like screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub struct RoomCoord {
    pub x: i32,
    pub y: i32,
}

impl RoomCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for RoomCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A viewport edge the player can walk through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    /// Every edge, in the order crossings are resolved.
    pub const PRIORITY: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    pub fn is_crossed(self, bounds: &Rectangle, viewport: &Rectangle) -> bool {
        match self {
            Edge::Left => bounds.left() < viewport.left(),
            Edge::Right => bounds.right() > viewport.right(),
            Edge::Top => bounds.top() < viewport.top(),
            Edge::Bottom => bounds.bottom() > viewport.bottom(),
        }
    }

    /// Edges `bounds` has crossed, in priority order.
    pub fn crossed(bounds: &Rectangle, viewport: &Rectangle) -> impl Iterator<Item = Edge> {
        let (bounds, viewport) = (*bounds, *viewport);
        Self::PRIORITY
            .into_iter()
            .filter(move |edge| edge.is_crossed(&bounds, &viewport))
    }

    /// Grid step to the neighbour behind this edge.
    pub const fn step(self) -> (i32, i32) {
        match self {
            Edge::Left => (-1, 0),
            Edge::Right => (1, 0),
            Edge::Top => (0, -1),
            Edge::Bottom => (0, 1),
        }
    }

    /// Place `bounds` flush inside the edge opposite this one.
    pub fn enter_opposite(self, bounds: &Rectangle, viewport: &Rectangle) -> Rectangle {
        match self {
            Edge::Left => bounds.with_right(viewport.right()),
            Edge::Right => bounds.with_left(viewport.left()),
            Edge::Top => bounds.with_bottom(viewport.bottom()),
            Edge::Bottom => bounds.with_top(viewport.top()),
        }
    }
}

/// Outcome of checking the player against the viewport edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Still inside the viewport.
    Stay,
    /// Walked off an edge with no neighbour, or into a neighbour whose
    /// landing spot is blocked; clamped back inside.
    Blocked(Rectangle),
    /// Entered the neighbour room, now active.
    Entered { room: RoomCoord, bounds: Rectangle },
}

/// Sparse map of rooms plus the currently active one.
///
/// The set of rooms is fixed after construction; only their contents change.
#[derive(Debug, Clone)]
pub struct WorldGraph {
    rooms: HashMap<RoomCoord, Room>,
    active: RoomCoord,
}

impl WorldGraph {
    /// Build a graph starting in `start`, which must be one of `rooms`.
    pub fn new(rooms: HashMap<RoomCoord, Room>, start: RoomCoord) -> Result<Self, DataLoadError> {
        if !rooms.contains_key(&start) {
            return Err(DataLoadError::MissingStartRoom {
                x: start.x,
                y: start.y,
            });
        }
        Ok(Self {
            rooms,
            active: start,
        })
    }

    pub fn active_coord(&self) -> RoomCoord {
        self.active
    }

    pub fn active_room(&self) -> &Room {
        // `active` is only ever set to a key that exists.
        &self.rooms[&self.active]
    }

    pub fn active_room_mut(&mut self) -> &mut Room {
        self.rooms
            .get_mut(&self.active)
            .unwrap_or_else(|| unreachable!("active room {:?} missing", self.active))
    }

    pub fn room(&self, coord: RoomCoord) -> Option<&Room> {
        self.rooms.get(&coord)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn coords(&self) -> impl Iterator<Item = RoomCoord> + '_ {
        self.rooms.keys().copied()
    }

    /// Move between rooms if `bounds` has left the viewport.
    ///
    /// Crossed edges are tried in priority order. An edge leads on only when
    /// its neighbour exists and the landing spot, flush inside the opposite
    /// edge, is clear of that room's walls and locked door. Otherwise the
    /// player is clamped back inside the current room.
    pub fn transition(&mut self, bounds: &Rectangle, viewport: &Rectangle) -> Transition {
        let mut crossed = Edge::crossed(bounds, viewport).peekable();
        if crossed.peek().is_none() {
            return Transition::Stay;
        }

        for edge in crossed {
            let (dx, dy) = edge.step();
            let next = self.active.offset(dx, dy);
            let Some(room) = self.rooms.get(&next) else {
                continue;
            };

            let landing = edge.enter_opposite(bounds, viewport).clamped_inside(viewport);
            if room.obstacles().any(|obstacle| obstacle.intersects(&landing)) {
                debug!(
                    "Entry into ({}, {}) via {:?} edge blocked at {:?}",
                    next.x, next.y, edge, landing
                );
                continue;
            }

            info!(
                "Room transition ({}, {}) -> ({}, {}) via {:?} edge",
                self.active.x, self.active.y, next.x, next.y, edge
            );
            self.active = next;
            return Transition::Entered {
                room: next,
                bounds: landing,
            };
        }

        Transition::Blocked(bounds.clamped_inside(viewport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::world::RoomLayout;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn empty_room() -> Room {
        let layout = RoomLayout::parse(&["...", "..."]).unwrap();
        Room::from_layout(&layout, &GameConfig::default(), &mut StdRng::seed_from_u64(0))
    }

    fn graph(coords: &[(i32, i32)]) -> WorldGraph {
        let rooms = coords
            .iter()
            .map(|&c| (RoomCoord::from(c), empty_room()))
            .collect();
        WorldGraph::new(rooms, RoomCoord::new(0, 0)).unwrap()
    }

    fn viewport() -> Rectangle {
        GameConfig::default().viewport()
    }

    #[test]
    fn missing_start_room_is_rejected() {
        let err = WorldGraph::new(HashMap::new(), RoomCoord::new(2, 3)).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingStartRoom { x: 2, y: 3 }));
    }

    #[test]
    fn inside_viewport_stays() {
        let mut world = graph(&[(0, 0), (1, 0)]);
        let bounds = Rectangle::new(0.0, 100.0, 20.0, 20.0);
        assert_eq!(world.transition(&bounds, &viewport()), Transition::Stay);
    }

    #[test]
    fn each_edge_enters_flush_at_the_opposite_side() {
        let view = viewport();
        let cases = [
            (Rectangle::new(-1.0, 100.0, 20.0, 20.0), (-1, 0), Rectangle::new(492.0, 100.0, 20.0, 20.0)),
            (Rectangle::new(493.0, 100.0, 20.0, 20.0), (1, 0), Rectangle::new(0.0, 100.0, 20.0, 20.0)),
            (Rectangle::new(200.0, -2.0, 20.0, 20.0), (0, -1), Rectangle::new(200.0, 332.0, 20.0, 20.0)),
            (Rectangle::new(200.0, 333.0, 20.0, 20.0), (0, 1), Rectangle::new(200.0, 0.0, 20.0, 20.0)),
        ];

        for (bounds, step, expected) in cases {
            let mut world = graph(&[(0, 0), step]);
            let result = world.transition(&bounds, &view);
            assert_eq!(
                result,
                Transition::Entered {
                    room: RoomCoord::from(step),
                    bounds: expected
                }
            );
            assert_eq!(world.active_coord(), RoomCoord::from(step));
        }
    }

    #[test]
    fn missing_neighbour_clamps_inside() {
        let mut world = graph(&[(0, 0)]);
        let bounds = Rectangle::new(-2.4, 100.0, 20.0, 20.0);
        let result = world.transition(&bounds, &viewport());
        assert_eq!(result, Transition::Blocked(Rectangle::new(0.0, 100.0, 20.0, 20.0)));
        assert_eq!(world.active_coord(), RoomCoord::new(0, 0));
    }

    #[test]
    fn round_trip_returns_to_origin_room() {
        let view = viewport();
        let mut world = graph(&[(0, 0), (1, 0)]);

        let Transition::Entered { bounds, .. } =
            world.transition(&Rectangle::new(493.0, 100.0, 20.0, 20.0), &view)
        else {
            panic!("expected to enter the east room");
        };
        let back = bounds.translated(bevy::math::Vec2::new(-2.4, 0.0));
        let Transition::Entered { room, bounds } = world.transition(&back, &view) else {
            panic!("expected to return west");
        };

        assert_eq!(room, RoomCoord::new(0, 0));
        assert!((bounds.right() - view.right()).abs() < 32.0);
    }

    fn door_room() -> Room {
        let mut rows = vec!["................"; 11];
        rows[3] = "..E............D";
        let layout = RoomLayout::parse(&rows).unwrap();
        Room::from_layout(&layout, &GameConfig::default(), &mut StdRng::seed_from_u64(0))
    }

    #[test]
    fn locked_door_at_the_seam_blocks_entry() {
        let mut rooms: HashMap<RoomCoord, Room> = HashMap::new();
        rooms.insert(RoomCoord::new(0, 0), empty_room());
        rooms.insert(RoomCoord::new(-1, 0), door_room());
        let mut world = WorldGraph::new(rooms, RoomCoord::new(0, 0)).unwrap();

        let bounds = Rectangle::new(-2.4, 100.0, 20.0, 20.0);
        let result = world.transition(&bounds, &viewport());

        assert_eq!(result, Transition::Blocked(Rectangle::new(0.0, 100.0, 20.0, 20.0)));
        assert_eq!(world.active_coord(), RoomCoord::new(0, 0));
    }

    #[test]
    fn unlocked_door_at_the_seam_lets_the_player_in() {
        let mut west = door_room();
        west.hostiles[0].kill();
        assert!(west.try_unlock());

        let mut rooms: HashMap<RoomCoord, Room> = HashMap::new();
        rooms.insert(RoomCoord::new(0, 0), empty_room());
        rooms.insert(RoomCoord::new(-1, 0), west);
        let mut world = WorldGraph::new(rooms, RoomCoord::new(0, 0)).unwrap();

        let result = world.transition(&Rectangle::new(-2.4, 100.0, 20.0, 20.0), &viewport());
        assert_eq!(
            result,
            Transition::Entered {
                room: RoomCoord::new(-1, 0),
                bounds: Rectangle::new(492.0, 100.0, 20.0, 20.0)
            }
        );
    }

    #[test]
    fn corner_crossing_falls_through_to_the_next_edge() {
        let mut world = graph(&[(0, 0), (0, -1)]);
        let bounds = Rectangle::new(-1.7, -1.7, 20.0, 20.0);
        let result = world.transition(&bounds, &viewport());

        assert_eq!(
            result,
            Transition::Entered {
                room: RoomCoord::new(0, -1),
                bounds: Rectangle::new(0.0, 332.0, 20.0, 20.0)
            }
        );
    }

    #[test]
    fn crossed_edges_come_in_priority_order() {
        let view = viewport();
        let bounds = Rectangle::new(500.0, -3.0, 20.0, 20.0);
        let edges: Vec<Edge> = Edge::crossed(&bounds, &view).collect();
        assert_eq!(edges, vec![Edge::Right, Edge::Top]);
    }
}
