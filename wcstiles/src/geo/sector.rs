//! Sector type definitions

use std::fmt;

use thiserror::Error;

/// Valid latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Errors raised when constructing a sector from raw bounds.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("Invalid latitude: {0}")]
    InvalidLatitude(f64),

    #[error("Invalid longitude: {0}")]
    InvalidLongitude(f64),

    /// A minimum bound exceeds its maximum.
    #[error("Inverted bounds on {axis} axis: min {min} > max {max}")]
    InvertedBounds { axis: &'static str, min: f64, max: f64 },
}

/// A rectangular geographic region in degrees.
///
/// An empty sector has NaN bounds and stands for "no sector". Tile factories
/// reject empty sectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    min_latitude: f64,
    max_latitude: f64,
    min_longitude: f64,
    max_longitude: f64,
}

impl Sector {
    /// Creates a sector from its bounds, validating range and ordering.
    pub fn new(
        min_latitude: f64,
        max_latitude: f64,
        min_longitude: f64,
        max_longitude: f64,
    ) -> Result<Self, GeoError> {
        for lat in [min_latitude, max_latitude] {
            if !lat.is_finite() || !(MIN_LAT..=MAX_LAT).contains(&lat) {
                return Err(GeoError::InvalidLatitude(lat));
            }
        }
        for lon in [min_longitude, max_longitude] {
            if !lon.is_finite() || !(MIN_LON..=MAX_LON).contains(&lon) {
                return Err(GeoError::InvalidLongitude(lon));
            }
        }
        if min_latitude > max_latitude {
            return Err(GeoError::InvertedBounds {
                axis: "latitude",
                min: min_latitude,
                max: max_latitude,
            });
        }
        if min_longitude > max_longitude {
            return Err(GeoError::InvertedBounds {
                axis: "longitude",
                min: min_longitude,
                max: max_longitude,
            });
        }

        Ok(Self {
            min_latitude,
            max_latitude,
            min_longitude,
            max_longitude,
        })
    }

    /// Creates a sector from a south-west corner and an extent.
    ///
    /// No validation is performed; this is the form tile pyramids use to
    /// subdivide a level, where the bounds are known to be well formed.
    pub fn from_degrees(
        min_latitude: f64,
        min_longitude: f64,
        delta_latitude: f64,
        delta_longitude: f64,
    ) -> Self {
        Self {
            min_latitude,
            max_latitude: min_latitude + delta_latitude,
            min_longitude,
            max_longitude: min_longitude + delta_longitude,
        }
    }

    /// The whole globe.
    pub fn full_sphere() -> Self {
        Self {
            min_latitude: MIN_LAT,
            max_latitude: MAX_LAT,
            min_longitude: MIN_LON,
            max_longitude: MAX_LON,
        }
    }

    /// A sector with NaN bounds.
    pub fn empty() -> Self {
        Self {
            min_latitude: f64::NAN,
            max_latitude: f64::NAN,
            min_longitude: f64::NAN,
            max_longitude: f64::NAN,
        }
    }

    /// Returns true if any bound is NaN.
    pub fn is_empty(&self) -> bool {
        self.min_latitude.is_nan()
            || self.max_latitude.is_nan()
            || self.min_longitude.is_nan()
            || self.max_longitude.is_nan()
    }

    #[inline]
    pub fn min_latitude(&self) -> f64 {
        self.min_latitude
    }

    #[inline]
    pub fn max_latitude(&self) -> f64 {
        self.max_latitude
    }

    #[inline]
    pub fn min_longitude(&self) -> f64 {
        self.min_longitude
    }

    #[inline]
    pub fn max_longitude(&self) -> f64 {
        self.max_longitude
    }

    #[inline]
    pub fn delta_latitude(&self) -> f64 {
        self.max_latitude - self.min_latitude
    }

    #[inline]
    pub fn delta_longitude(&self) -> f64 {
        self.max_longitude - self.min_longitude
    }

    pub fn centroid_latitude(&self) -> f64 {
        0.5 * (self.min_latitude + self.max_latitude)
    }

    pub fn centroid_longitude(&self) -> f64 {
        0.5 * (self.min_longitude + self.max_longitude)
    }

    /// Returns true if the location lies inside or on the edge of this sector.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.min_latitude
            && latitude <= self.max_latitude
            && longitude >= self.min_longitude
            && longitude <= self.max_longitude
    }

    /// Returns true if the two sectors share interior area.
    ///
    /// Sectors that only touch along an edge do not intersect. Empty sectors
    /// never intersect anything.
    pub fn intersects(&self, other: &Sector) -> bool {
        self.min_latitude < other.max_latitude
            && other.min_latitude < self.max_latitude
            && self.min_longitude < other.max_longitude
            && other.min_longitude < self.max_longitude
    }
}

impl Default for Sector {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lat [{}, {}] lon [{}, {}]",
            self.min_latitude, self.max_latitude, self.min_longitude, self.max_longitude
        )
    }
}
