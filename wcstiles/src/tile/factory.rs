//! Tile type and the tile factory contract.

use crate::geo::Sector;

use super::{ImageSource, Level, TileFactoryResult};

/// A single tile of a pyramid level.
///
/// A tile is owned by whoever requested it and shares no state with the
/// factory that built it.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    sector: Sector,
    level: Level,
    row: u64,
    column: u64,
    image_source: ImageSource,
}

impl Tile {
    pub fn new(
        sector: Sector,
        level: Level,
        row: u64,
        column: u64,
        image_source: ImageSource,
    ) -> Self {
        Self {
            sector,
            level,
            row,
            column,
            image_source,
        }
    }

    pub fn sector(&self) -> &Sector {
        &self.sector
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn row(&self) -> u64 {
        self.row
    }

    pub fn column(&self) -> u64 {
        self.column
    }

    pub fn image_source(&self) -> &ImageSource {
        &self.image_source
    }

    /// Returns a key unique to this tile within its pyramid.
    ///
    /// Format: `{level}.{row}.{column}`
    pub fn tile_key(&self) -> String {
        format!("{}.{}.{}", self.level.level_number, self.row, self.column)
    }
}

/// Trait for building tiles from pyramid cells.
///
/// Implementors decide where a tile's imagery comes from by choosing the
/// tile's [`ImageSource`]. Creating a tile must not perform any I/O.
pub trait TileFactory: Send + Sync {
    /// Creates the tile covering `sector` at the given level, row and column.
    fn create_tile(
        &self,
        sector: &Sector,
        level: &Level,
        row: u64,
        column: u64,
    ) -> TileFactoryResult<Tile>;
}
