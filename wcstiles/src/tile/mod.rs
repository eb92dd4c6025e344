//! Tile pyramid model
//!
//! This module provides the pieces a tiling pipeline works with:
//!
//! - [`Level`] and [`LevelSet`] describe a pyramid of fixed-size tiles
//! - [`Tile`] is a single cell of a level, carrying a deferred [`ImageSource`]
//! - [`TileFactory`] is the contract for turning a cell into a tile
//! - [`assemble_tiles_for_level`] and [`for_each_tile_for_level`] walk a level
//!   and ask a factory for each tile
//!
//! # Example
//!
//! ```ignore
//! use wcstiles::tile::{assemble_tiles_for_level, LevelSet};
//! use wcstiles::wcs::Wcs100TileFactory;
//!
//! let levels = LevelSet::world(45.0, 5, 256, 256)?;
//! let factory = Wcs100TileFactory::new("https://example.com/wcs", "elevation")?;
//! let tiles = assemble_tiles_for_level(levels.first_level(), levels.sector(), &factory)?;
//! ```

mod assemble;
mod error;
mod factory;
mod image_source;
mod level;

pub use assemble::{
    assemble_tiles_for_level, compute_column, compute_last_column, compute_last_row, compute_row,
    for_each_tile_for_level,
};
pub use error::{InvalidReason, TileFactoryError, TileFactoryResult};
pub use factory::{Tile, TileFactory};
pub use image_source::ImageSource;
pub use level::{Level, LevelSet, LevelSetError};
