//! Geographic primitives
//!
//! Provides the [`Sector`] type, a rectangular region bounded by minimum and
//! maximum latitude and longitude in degrees. Sectors describe the extent of
//! tiles in a pyramid and are the geographic input to tile factories.

mod sector;

pub use sector::{GeoError, Sector, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
