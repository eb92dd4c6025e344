//! WcsTiles - WCS 1.0.0 GetCoverage tiles for raster pyramids
//!
//! This library builds OGC Web Coverage Service request URLs for the cells of
//! a tile pyramid and wraps them into tiles whose imagery is loaded later by
//! an image loading subsystem. Nothing here performs network I/O.
//!
//! - [`geo`] - geographic sectors
//! - [`tile`] - levels, tiles and the [`TileFactory`](tile::TileFactory) contract
//! - [`wcs`] - the WCS 1.0.0 tile factory
//! - [`config`] - INI configuration file
//! - [`logging`] - tracing subscriber setup for binaries

pub mod config;
pub mod geo;
pub mod logging;
pub mod tile;
pub mod wcs;
