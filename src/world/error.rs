//! Error types for room layouts and world data loading.

use thiserror::Error;

/// Errors raised while turning layout text into a room.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Layout has no rows or an empty first row.
    #[error("Layout is empty")]
    Empty,

    /// A row's length differs from the first row.
    #[error("Row {row} is {actual} tiles wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Character outside the tile legend.
    #[error("Unknown tile '{character}' at ({column}, {row})")]
    UnknownTile {
        character: char,
        column: usize,
        row: usize,
    },

    /// A second `D` tile was found.
    #[error("Second door tile at ({column}, {row}); a room may have at most one door")]
    MultipleDoors { column: usize, row: usize },

    /// Layout size disagrees with the configured room grid.
    #[error("Grid mismatch: expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}")]
    GridMismatch {
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },
}

/// Errors that can occur when loading config or world data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// A room layout failed validation.
    #[error("Invalid layout for room ({x}, {y}): {source}")]
    InvalidRoom {
        x: i32,
        y: i32,
        #[source]
        source: LayoutError,
    },

    /// Two rooms claim the same coordinate.
    #[error("Duplicate room at ({x}, {y})")]
    DuplicateRoom { x: i32, y: i32 },

    /// The start room is not part of the world.
    #[error("Start room ({x}, {y}) does not exist")]
    MissingStartRoom { x: i32, y: i32 },

    /// A config value the game cannot run with.
    #[error("Invalid config value '{field}': {details}")]
    InvalidConfig { field: &'static str, details: String },

    /// The player would start outside the room or inside a wall or door.
    #[error("Player start ({x}, {y}) {reason}")]
    InvalidPlayerStart { x: f32, y: f32, reason: &'static str },
}
