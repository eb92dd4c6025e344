//! Pyramid levels.

use thiserror::Error;

use crate::geo::Sector;

/// One resolution level of a tile pyramid.
///
/// Every tile of a level spans `tile_delta` degrees in both latitude and
/// longitude and is rendered at `tile_width` × `tile_height` pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Level {
    /// Zero-based index within the pyramid, 0 being the coarsest level.
    pub level_number: u32,
    /// Tile edge length in degrees.
    pub tile_delta: f64,
    /// Tile width in pixels.
    pub tile_width: u32,
    /// Tile height in pixels.
    pub tile_height: u32,
}

impl Level {
    pub fn new(level_number: u32, tile_delta: f64, tile_width: u32, tile_height: u32) -> Self {
        Self {
            level_number,
            tile_delta,
            tile_width,
            tile_height,
        }
    }

    /// Returns true if this level does not cover any area.
    ///
    /// The default level has a NaN delta and is empty. Tile factories reject
    /// empty levels.
    pub fn is_empty(&self) -> bool {
        !(self.tile_delta.is_finite() && self.tile_delta > 0.0)
    }

    /// Returns true if this is the coarsest level of its pyramid.
    pub fn is_first_level(&self) -> bool {
        self.level_number == 0
    }
}

impl Default for Level {
    fn default() -> Self {
        Self {
            level_number: 0,
            tile_delta: f64::NAN,
            tile_width: 0,
            tile_height: 0,
        }
    }
}

/// Errors raised when configuring a level set.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LevelSetError {
    #[error("Level set sector is empty")]
    EmptySector,

    #[error("First level delta must be positive, got {0}")]
    InvalidLevelDelta(f64),

    #[error("Level set must have at least one level")]
    NoLevels,

    #[error("Invalid tile size {width}×{height}: both dimensions must be at least 1")]
    InvalidTileSize { width: u32, height: u32 },
}

/// A pyramid of levels over a sector.
///
/// Each level halves the tile delta of the level before it, so level `n`
/// has `tile_delta = first_level_delta / 2^n`.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSet {
    sector: Sector,
    levels: Vec<Level>,
}

impl LevelSet {
    /// Creates a level set over `sector`.
    pub fn new(
        sector: Sector,
        first_level_delta: f64,
        num_levels: u32,
        tile_width: u32,
        tile_height: u32,
    ) -> Result<Self, LevelSetError> {
        if sector.is_empty() {
            return Err(LevelSetError::EmptySector);
        }
        if !(first_level_delta.is_finite() && first_level_delta > 0.0) {
            return Err(LevelSetError::InvalidLevelDelta(first_level_delta));
        }
        if num_levels == 0 {
            return Err(LevelSetError::NoLevels);
        }
        if tile_width == 0 || tile_height == 0 {
            return Err(LevelSetError::InvalidTileSize {
                width: tile_width,
                height: tile_height,
            });
        }

        let levels = (0..num_levels)
            .map(|n| {
                let delta = first_level_delta / 2.0_f64.powi(n as i32);
                Level::new(n, delta, tile_width, tile_height)
            })
            .collect();

        Ok(Self { sector, levels })
    }

    /// Creates a level set covering the whole globe.
    pub fn world(
        first_level_delta: f64,
        num_levels: u32,
        tile_width: u32,
        tile_height: u32,
    ) -> Result<Self, LevelSetError> {
        Self::new(
            Sector::full_sphere(),
            first_level_delta,
            num_levels,
            tile_width,
            tile_height,
        )
    }

    pub fn sector(&self) -> &Sector {
        &self.sector
    }

    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    pub fn level(&self, level_number: u32) -> Option<&Level> {
        self.levels.get(level_number as usize)
    }

    pub fn first_level(&self) -> &Level {
        // Construction guarantees at least one level.
        &self.levels[0]
    }

    pub fn last_level(&self) -> &Level {
        &self.levels[self.levels.len() - 1]
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }
}
