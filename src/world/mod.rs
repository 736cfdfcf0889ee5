//! World module - room layouts, rooms and the world graph.

mod data;
mod error;
mod graph;
mod layout;
mod plugin;
mod room;

pub use data::{LoadedWorld, RoomDefinition, WorldDefinition, WORLD_PATH};
pub use error::{DataLoadError, LayoutError};
pub use graph::{Edge, RoomCoord, Transition, WorldGraph};
pub use layout::{Placements, RoomLayout, Tile};
pub use plugin::WorldPlugin;
pub use room::Room;
