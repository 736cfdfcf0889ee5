//! Room layouts: the textual tile grid rooms are authored in.
//!
//! Legend:
//!
//! | Char | Tile            |
//! |------|-----------------|
//! | `#`  | wall            |
//! | `.`  | floor           |
//! | `E`  | hostile spawn   |
//! | `H`  | health pickup   |
//! | `R`  | currency pickup |
//! | `D`  | locked door     |
//!
//! Every row must be the same width and a room holds at most one door.

use bevy::math::Vec2;

use super::error::LayoutError;
use crate::core::{GameConfig, Rectangle};
use crate::pickups::PickupKind;

/// One cell of a room layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Wall,
    Floor,
    HostileSpawn,
    HealthPickup,
    CurrencyPickup,
    Door,
}

impl Tile {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Tile::Wall),
            '.' => Some(Tile::Floor),
            'E' => Some(Tile::HostileSpawn),
            'H' => Some(Tile::HealthPickup),
            'R' => Some(Tile::CurrencyPickup),
            'D' => Some(Tile::Door),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
            Tile::HostileSpawn => 'E',
            Tile::HealthPickup => 'H',
            Tile::CurrencyPickup => 'R',
            Tile::Door => 'D',
        }
    }
}

/// World-space placements derived from a layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Placements {
    /// One tile-sized rectangle per `#`.
    pub walls: Vec<Rectangle>,
    /// Hostile bounds, one per `E`, centred in the tile.
    pub hostiles: Vec<Rectangle>,
    /// Pickup bounds and kind, one per `H` / `R`, centred in the tile.
    pub pickups: Vec<(Rectangle, PickupKind)>,
    pub door: Option<Rectangle>,
}

/// A validated, rectangular tile grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomLayout {
    tiles: Vec<Vec<Tile>>,
    width: usize,
}

impl RoomLayout {
    /// Parse layout rows, rejecting ragged rows, unknown characters and extra doors.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, LayoutError> {
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        if width == 0 {
            return Err(LayoutError::Empty);
        }

        let mut door_seen = false;
        let mut tiles = Vec::with_capacity(rows.len());

        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let actual = row.chars().count();
            if actual != width {
                return Err(LayoutError::RaggedRow {
                    row: row_index,
                    expected: width,
                    actual,
                });
            }

            let mut tile_row = Vec::with_capacity(width);
            for (column, character) in row.chars().enumerate() {
                let tile = Tile::from_char(character).ok_or(LayoutError::UnknownTile {
                    character,
                    column,
                    row: row_index,
                })?;
                if tile == Tile::Door {
                    if door_seen {
                        return Err(LayoutError::MultipleDoors {
                            column,
                            row: row_index,
                        });
                    }
                    door_seen = true;
                }
                tile_row.push(tile);
            }
            tiles.push(tile_row);
        }

        Ok(Self { tiles, width })
    }

    /// Width in tiles.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in tiles.
    pub fn height(&self) -> usize {
        self.tiles.len()
    }

    /// Tile at a grid position, `None` when out of bounds.
    pub fn tile(&self, column: usize, row: usize) -> Option<Tile> {
        self.tiles.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Require the layout to be exactly `columns` x `rows` tiles.
    pub fn expect_size(&self, columns: usize, rows: usize) -> Result<(), LayoutError> {
        if self.width() != columns || self.height() != rows {
            return Err(LayoutError::GridMismatch {
                expected_width: columns,
                expected_height: rows,
                actual_width: self.width(),
                actual_height: self.height(),
            });
        }
        Ok(())
    }

    /// Render the layout back to its source rows.
    pub fn to_rows(&self) -> Vec<String> {
        self.tiles
            .iter()
            .map(|row| row.iter().map(|tile| tile.to_char()).collect())
            .collect()
    }

    /// Top-left corner of a tile in world space.
    fn tile_origin(column: usize, row: usize, tile_size: f32) -> Vec2 {
        Vec2::new(column as f32 * tile_size, row as f32 * tile_size)
    }

    /// Convert the grid into world-space rectangles.
    pub fn placements(&self, config: &GameConfig) -> Placements {
        let tile_size = config.tile_size;
        let half_tile = Vec2::splat(tile_size / 2.0);
        let mut placements = Placements::default();

        for (row, tiles) in self.tiles.iter().enumerate() {
            for (column, tile) in tiles.iter().enumerate() {
                let origin = Self::tile_origin(column, row, tile_size);
                let center = origin + half_tile;
                let cell = Rectangle::new(origin.x, origin.y, tile_size, tile_size);

                match tile {
                    Tile::Wall => placements.walls.push(cell),
                    Tile::Floor => {}
                    Tile::HostileSpawn => placements.hostiles.push(Rectangle::from_center(
                        center,
                        config.enemy_size,
                        config.enemy_size,
                    )),
                    Tile::HealthPickup => placements.pickups.push((
                        Rectangle::from_center(center, config.pickup_size, config.pickup_size),
                        PickupKind::Health,
                    )),
                    Tile::CurrencyPickup => placements.pickups.push((
                        Rectangle::from_center(center, config.pickup_size, config.pickup_size),
                        PickupKind::Currency,
                    )),
                    Tile::Door => placements.door = Some(cell),
                }
            }
        }

        placements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_by_three_with_one_hostile() {
        let layout = RoomLayout::parse(&["###", "#E#", "###"]).unwrap();
        let placements = layout.placements(&GameConfig::default());

        assert_eq!(placements.walls.len(), 8);
        assert_eq!(placements.hostiles.len(), 1);
        assert!(placements.pickups.is_empty());
        assert!(placements.door.is_none());
        assert_eq!(placements.hostiles[0].center(), Vec2::new(48.0, 48.0));
    }

    #[test]
    fn legend_maps_to_placements() {
        let layout = RoomLayout::parse(&["#HRD", "..E."]).unwrap();
        let placements = layout.placements(&GameConfig::default());

        assert_eq!(placements.walls, vec![Rectangle::new(0.0, 0.0, 32.0, 32.0)]);
        assert_eq!(placements.pickups.len(), 2);
        assert_eq!(placements.pickups[0].1, PickupKind::Health);
        assert_eq!(placements.pickups[1].1, PickupKind::Currency);
        assert_eq!(placements.pickups[0].0, Rectangle::new(42.0, 10.0, 12.0, 12.0));
        assert_eq!(placements.door, Some(Rectangle::new(96.0, 0.0, 32.0, 32.0)));
        assert_eq!(placements.hostiles, vec![Rectangle::new(70.0, 38.0, 20.0, 20.0)]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = RoomLayout::parse(&["###", "##", "###"]).unwrap_err();
        assert_eq!(
            err,
            LayoutError::RaggedRow {
                row: 1,
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn unknown_characters_are_rejected() {
        let err = RoomLayout::parse(&["#.#", "#X#"]).unwrap_err();
        assert_eq!(
            err,
            LayoutError::UnknownTile {
                character: 'X',
                column: 1,
                row: 1
            }
        );
    }

    #[test]
    fn second_door_is_rejected() {
        let err = RoomLayout::parse(&["D..", "..D"]).unwrap_err();
        assert_eq!(err, LayoutError::MultipleDoors { column: 2, row: 1 });
    }

    #[test]
    fn empty_layout_is_rejected() {
        let rows: [&str; 0] = [];
        assert_eq!(RoomLayout::parse(&rows).unwrap_err(), LayoutError::Empty);
        assert_eq!(RoomLayout::parse(&[""]).unwrap_err(), LayoutError::Empty);
    }

    #[test]
    fn rows_round_trip() {
        let rows = vec!["#..E#".to_string(), "#HRD#".to_string(), "#####".to_string()];
        let layout = RoomLayout::parse(&rows).unwrap();
        assert_eq!(layout.to_rows(), rows);
        assert_eq!(layout.tile(3, 1), Some(Tile::Door));
        assert_eq!(layout.tile(9, 9), None);
    }

    #[test]
    fn size_check_reports_mismatch() {
        let layout = RoomLayout::parse(&["##", "##"]).unwrap();
        assert!(layout.expect_size(2, 2).is_ok());
        assert!(matches!(
            layout.expect_size(16, 11),
            Err(LayoutError::GridMismatch { actual_width: 2, .. })
        ));
    }
}
