//! Tile assembly for a pyramid level.
//!
//! Rows count northward from -90° latitude and columns count eastward from
//! -180° longitude, each spanning the level's tile delta. Indices are `u64`
//! so that fine levels of a world pyramid stay addressable.

use crate::geo::Sector;

use super::{InvalidReason, Level, Tile, TileFactory, TileFactoryError, TileFactoryResult};

/// Upper bound on tiles reserved up front by [`assemble_tiles_for_level`].
const MAX_PREALLOCATED_TILES: usize = 4096;

/// Returns the row containing `latitude`.
///
/// A latitude of exactly 90° belongs to the last row rather than a row past
/// the pole.
pub fn compute_row(delta: f64, latitude: f64) -> u64 {
    let mut row = ((latitude + 90.0) / delta).floor() as i64;
    if latitude == 90.0 {
        row -= 1;
    }
    row.max(0) as u64
}

/// Returns the column containing `longitude`.
///
/// A longitude of exactly 180° belongs to the last column.
pub fn compute_column(delta: f64, longitude: f64) -> u64 {
    let mut col = ((longitude + 180.0) / delta).floor() as i64;
    if longitude == 180.0 {
        col -= 1;
    }
    col.max(0) as u64
}

/// Returns the last row touched by a sector whose maximum latitude is `latitude`.
pub fn compute_last_row(delta: f64, latitude: f64) -> u64 {
    let mut row = ((latitude + 90.0) / delta - 1.0).ceil() as i64;
    if latitude == -90.0 {
        row += 1;
    }
    row.max(0) as u64
}

/// Returns the last column touched by a sector whose maximum longitude is `longitude`.
pub fn compute_last_column(delta: f64, longitude: f64) -> u64 {
    let mut col = ((longitude + 180.0) / delta - 1.0).ceil() as i64;
    if longitude == -180.0 {
        col += 1;
    }
    col.max(0) as u64
}

/// Row and column ranges of a level covering a sector.
struct TileRange {
    first_row: u64,
    last_row: u64,
    first_col: u64,
    last_col: u64,
}

impl TileRange {
    /// Returns `None` when the sector touches no tile, as for a zero-area
    /// sector lying on a tile boundary.
    fn new(delta: f64, sector: &Sector) -> Option<Self> {
        let range = Self {
            first_row: compute_row(delta, sector.min_latitude()),
            last_row: compute_last_row(delta, sector.max_latitude()),
            first_col: compute_column(delta, sector.min_longitude()),
            last_col: compute_last_column(delta, sector.max_longitude()),
        };
        (range.last_row >= range.first_row && range.last_col >= range.first_col).then_some(range)
    }

    fn rows(&self) -> u64 {
        self.last_row - self.first_row + 1
    }

    fn columns(&self) -> u64 {
        self.last_col - self.first_col + 1
    }

    /// Total tile count, or `None` if it does not fit in a `usize`.
    fn len(&self) -> Option<usize> {
        let count = self.rows().checked_mul(self.columns())?;
        usize::try_from(count).ok()
    }
}

fn validate(level: &Level, sector: &Sector, operation: &'static str) -> TileFactoryResult<()> {
    if sector.is_empty() {
        return Err(TileFactoryError::invalid_argument(
            "Tile",
            operation,
            InvalidReason::MissingCell,
        ));
    }
    if level.is_empty() {
        return Err(TileFactoryError::invalid_argument(
            "Tile",
            operation,
            InvalidReason::MissingLevel,
        ));
    }
    Ok(())
}

fn visit_range(
    level: &Level,
    range: &TileRange,
    factory: &dyn TileFactory,
    visit: &mut dyn FnMut(Tile),
) -> TileFactoryResult<()> {
    let delta = level.tile_delta;
    for row in range.first_row..=range.last_row {
        let min_lat = -90.0 + row as f64 * delta;
        for col in range.first_col..=range.last_col {
            let min_lon = -180.0 + col as f64 * delta;
            let tile_sector = Sector::from_degrees(min_lat, min_lon, delta, delta);
            visit(factory.create_tile(&tile_sector, level, row, col)?);
        }
    }

    tracing::debug!(
        level = level.level_number,
        rows = range.rows(),
        columns = range.columns(),
        "Assembled tiles for level"
    );
    Ok(())
}

/// Creates every tile of `level` that covers part of `sector`, handing each
/// one to `visit` as soon as it is built.
///
/// Tiles are visited in row-major order, south to north and west to east.
/// Nothing is buffered, so this suits levels with millions of tiles. Stops
/// on the first tile the factory rejects.
pub fn for_each_tile_for_level(
    level: &Level,
    sector: &Sector,
    factory: &dyn TileFactory,
    mut visit: impl FnMut(Tile),
) -> TileFactoryResult<()> {
    validate(level, sector, "forEachTileForLevel")?;
    match TileRange::new(level.tile_delta, sector) {
        Some(range) => visit_range(level, &range, factory, &mut visit),
        None => Ok(()),
    }
}

/// Creates every tile of `level` that covers part of `sector`.
///
/// Tiles are returned in row-major order, south to north and west to east.
/// Fails on the first tile the factory rejects. Prefer
/// [`for_each_tile_for_level`] for large regions of fine levels.
pub fn assemble_tiles_for_level(
    level: &Level,
    sector: &Sector,
    factory: &dyn TileFactory,
) -> TileFactoryResult<Vec<Tile>> {
    validate(level, sector, "assembleTilesForLevel")?;
    let Some(range) = TileRange::new(level.tile_delta, sector) else {
        return Ok(Vec::new());
    };

    let capacity = range
        .len()
        .map_or(MAX_PREALLOCATED_TILES, |n| n.min(MAX_PREALLOCATED_TILES));
    let mut tiles = Vec::with_capacity(capacity);
    visit_range(level, &range, factory, &mut |tile| tiles.push(tile))?;

    Ok(tiles)
}
