//! OGC Web Coverage Service (WCS) request building
//!
//! This module builds WCS `GetCoverage` request URLs for pyramid tiles and
//! wraps them into [`Tile`](crate::tile::Tile)s through the
//! [`TileFactory`](crate::tile::TileFactory) contract.
//!
//! ```ignore
//! use wcstiles::geo::Sector;
//! use wcstiles::wcs::Wcs100TileFactory;
//!
//! let factory = Wcs100TileFactory::new("https://example.com/wcs", "elevation")?;
//! let sector = Sector::new(-20.0, 20.0, -10.0, 10.0)?;
//! let url = factory.url_for_tile(&sector, 256, 256)?;
//! ```

mod query;
mod wcs100;

pub use wcs100::Wcs100TileFactory;
