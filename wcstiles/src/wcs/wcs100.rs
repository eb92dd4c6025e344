//! WCS 1.0.0 GetCoverage tile factory.
//!
//! # URL Pattern
//!
//! `{service_address}[?|&]SERVICE=WCS&VERSION=1.0.0&REQUEST=GetCoverage&COVERAGE={coverage}&CRS=EPSG:4326&BBOX={min_lon},{min_lat},{max_lon},{max_lat}&WIDTH={w}&HEIGHT={h}&FORMAT=image/tiff`
//!
//! - The service address is used verbatim and may already carry parameters
//! - `SERVICE=WCS` is only added when the address does not already contain it
//!   (in any letter case)
//! - Parameter order and casing are fixed
//! - No percent-encoding is applied to the coverage name or the numbers
//!
//! A coverage name containing `&`, `=` or spaces produces a malformed query.

use crate::geo::Sector;
use crate::tile::{
    ImageSource, InvalidReason, Level, Tile, TileFactory, TileFactoryError, TileFactoryResult,
};

use super::query::{append_query_delimiter, contains_ignore_case, format_degrees};

const COMPONENT: &str = "Wcs100TileFactory";

/// Service type parameter, added unless the address already names it.
const SERVICE_PARAMETER: &str = "SERVICE=WCS";

/// Coordinate reference system of every request.
const CRS: &str = "EPSG:4326";

/// Output format of every request.
const FORMAT: &str = "image/tiff";

/// Builds WCS 1.0.0 GetCoverage URLs and tiles for a single coverage.
///
/// Requests use `EPSG:4326` as the coordinate reference system and
/// `image/tiff` as the output format.
///
/// # Example
///
/// ```ignore
/// use wcstiles::tile::{Level, TileFactory};
/// use wcstiles::wcs::Wcs100TileFactory;
///
/// let factory = Wcs100TileFactory::new("https://example.com/wcs", "elevation")?;
/// let tile = factory.create_tile(&sector, &Level::new(0, 45.0, 256, 256), 0, 0)?;
/// // Hand the tile's image source to the image loader...
/// ```
///
/// # Sharing
///
/// URL building only reads the configuration, so a factory can be shared
/// behind an `Arc` by any number of threads. Reconfiguring requires
/// exclusive access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wcs100TileFactory {
    service_address: String,
    coverage: String,
}

impl Wcs100TileFactory {
    /// Creates a factory for `coverage` served at `service_address`.
    ///
    /// Both values are stored verbatim.
    ///
    /// # Errors
    ///
    /// `missingServiceAddress` or `missingCoverage` if either value is empty.
    pub fn new(
        service_address: impl Into<String>,
        coverage: impl Into<String>,
    ) -> TileFactoryResult<Self> {
        let service_address = service_address.into();
        let coverage = coverage.into();

        if service_address.is_empty() {
            return Err(TileFactoryError::invalid_argument(
                COMPONENT,
                "new",
                InvalidReason::MissingServiceAddress,
            ));
        }
        if coverage.is_empty() {
            return Err(TileFactoryError::invalid_argument(
                COMPONENT,
                "new",
                InvalidReason::MissingCoverage,
            ));
        }

        Ok(Self {
            service_address,
            coverage,
        })
    }

    /// The WCS service address used to build GetCoverage URLs.
    pub fn service_address(&self) -> &str {
        &self.service_address
    }

    /// Replaces the service address. Leaves the factory unchanged on error.
    pub fn set_service_address(
        &mut self,
        service_address: impl Into<String>,
    ) -> TileFactoryResult<()> {
        let service_address = service_address.into();
        if service_address.is_empty() {
            return Err(TileFactoryError::invalid_argument(
                COMPONENT,
                "setServiceAddress",
                InvalidReason::MissingServiceAddress,
            ));
        }
        self.service_address = service_address;
        Ok(())
    }

    /// The coverage name requested from the service.
    pub fn coverage(&self) -> &str {
        &self.coverage
    }

    /// Replaces the coverage name. Leaves the factory unchanged on error.
    pub fn set_coverage(&mut self, coverage: impl Into<String>) -> TileFactoryResult<()> {
        let coverage = coverage.into();
        if coverage.is_empty() {
            return Err(TileFactoryError::invalid_argument(
                COMPONENT,
                "setCoverage",
                InvalidReason::MissingCoverage,
            ));
        }
        self.coverage = coverage;
        Ok(())
    }

    /// Returns a copy of this factory pointing at another service address.
    pub fn with_service_address(
        mut self,
        service_address: impl Into<String>,
    ) -> TileFactoryResult<Self> {
        self.set_service_address(service_address)?;
        Ok(self)
    }

    /// Returns a copy of this factory requesting another coverage.
    pub fn with_coverage(mut self, coverage: impl Into<String>) -> TileFactoryResult<Self> {
        self.set_coverage(coverage)?;
        Ok(self)
    }

    /// Builds the GetCoverage URL for `sector` rendered at `width` × `height` pixels.
    ///
    /// The result depends only on the configuration and the arguments.
    ///
    /// # Errors
    ///
    /// `missingCell` if the sector is empty, `invalidWidthOrHeight` if either
    /// dimension is zero.
    pub fn url_for_tile(
        &self,
        sector: &Sector,
        width: u32,
        height: u32,
    ) -> TileFactoryResult<String> {
        if sector.is_empty() {
            return Err(TileFactoryError::invalid_argument(
                COMPONENT,
                "urlForTile",
                InvalidReason::MissingCell,
            ));
        }
        if width < 1 || height < 1 {
            return Err(TileFactoryError::invalid_argument(
                COMPONENT,
                "urlForTile",
                InvalidReason::InvalidWidthOrHeight,
            ));
        }

        let mut url = String::with_capacity(self.service_address.len() + 192);
        url.push_str(&self.service_address);
        append_query_delimiter(&mut url);

        // Checked against the address as configured, not the delimited copy.
        if !contains_ignore_case(&self.service_address, SERVICE_PARAMETER) {
            url.push_str(SERVICE_PARAMETER);
        }

        url.push_str("&VERSION=1.0.0");
        url.push_str("&REQUEST=GetCoverage");
        url.push_str("&COVERAGE=");
        url.push_str(&self.coverage);
        url.push_str("&CRS=");
        url.push_str(CRS);
        url.push_str("&BBOX=");
        url.push_str(&format_degrees(sector.min_longitude()));
        url.push(',');
        url.push_str(&format_degrees(sector.min_latitude()));
        url.push(',');
        url.push_str(&format_degrees(sector.max_longitude()));
        url.push(',');
        url.push_str(&format_degrees(sector.max_latitude()));
        url.push_str("&WIDTH=");
        url.push_str(&width.to_string());
        url.push_str("&HEIGHT=");
        url.push_str(&height.to_string());
        url.push_str("&FORMAT=");
        url.push_str(FORMAT);

        tracing::debug!(coverage = %self.coverage, url = %url, "Built GetCoverage URL");

        Ok(url)
    }
}

impl TileFactory for Wcs100TileFactory {
    fn create_tile(
        &self,
        sector: &Sector,
        level: &Level,
        row: u64,
        column: u64,
    ) -> TileFactoryResult<Tile> {
        if sector.is_empty() {
            return Err(TileFactoryError::invalid_argument(
                COMPONENT,
                "createTile",
                InvalidReason::MissingCell,
            ));
        }
        if level.is_empty() {
            return Err(TileFactoryError::invalid_argument(
                COMPONENT,
                "createTile",
                InvalidReason::MissingLevel,
            ));
        }

        let url = self.url_for_tile(sector, level.tile_width, level.tile_height)?;

        Ok(Tile::new(
            *sector,
            *level,
            row,
            column,
            ImageSource::from_url(url),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sector() -> Sector {
        Sector::new(-20.0, 20.0, -10.0, 10.0).unwrap()
    }

    fn url_for(address: &str) -> String {
        Wcs100TileFactory::new(address, "elev")
            .unwrap()
            .url_for_tile(&sample_sector(), 256, 256)
            .unwrap()
    }

    #[test]
    fn test_full_url() {
        assert_eq!(
            url_for("http://host?"),
            "http://host?SERVICE=WCS&VERSION=1.0.0&REQUEST=GetCoverage&COVERAGE=elev\
             &CRS=EPSG:4326&BBOX=-10.0,-20.0,10.0,20.0&WIDTH=256&HEIGHT=256&FORMAT=image/tiff"
        );
    }

    #[test]
    fn test_address_without_query() {
        assert!(url_for("http://x/wcs").starts_with("http://x/wcs?SERVICE=WCS&VERSION=1.0.0"));
    }

    #[test]
    fn test_address_ending_with_question_mark() {
        let url = url_for("http://x/wcs?");
        assert!(url.starts_with("http://x/wcs?SERVICE=WCS&"));
        assert!(!url.contains("??"));
    }

    #[test]
    fn test_address_with_existing_parameter() {
        assert!(url_for("http://x/wcs?foo=bar").starts_with("http://x/wcs?foo=bar&SERVICE=WCS&"));
    }

    #[test]
    fn test_address_ending_with_ampersand() {
        let url = url_for("http://x/wcs?foo=bar&");
        assert!(url.starts_with("http://x/wcs?foo=bar&SERVICE=WCS&"));
        assert!(!url.contains("&&"));
    }

    #[test]
    fn test_service_parameter_not_repeated() {
        let url = url_for("http://x/wcs?service=wcs");
        assert_eq!(url.to_ascii_uppercase().matches("SERVICE=WCS").count(), 1);
        // The delimiter is still added, so VERSION follows a doubled `&`.
        assert!(url.starts_with("http://x/wcs?service=wcs&&VERSION=1.0.0&"));
    }

    #[test]
    fn test_service_parameter_detected_with_trailing_ampersand() {
        let url = url_for("http://x/wcs?SERVICE=WCS&");
        assert!(url.starts_with("http://x/wcs?SERVICE=WCS&&VERSION=1.0.0"));
    }

    #[test]
    fn test_coverage_is_not_encoded() {
        let factory = Wcs100TileFactory::new("http://x/wcs", "my layer&x=1").unwrap();
        let url = factory.url_for_tile(&sample_sector(), 1, 1).unwrap();
        assert!(url.contains("&COVERAGE=my layer&x=1&CRS="));
    }

    #[test]
    fn test_fractional_bbox_and_dimensions() {
        let factory = Wcs100TileFactory::new("http://x/wcs", "dem").unwrap();
        let sector = Sector::from_degrees(33.75, -118.125, 0.703125, 0.703125);
        let url = factory.url_for_tile(&sector, 512, 128).unwrap();
        assert!(url.ends_with(
            "&BBOX=-118.125,33.75,-117.421875,34.453125&WIDTH=512&HEIGHT=128&FORMAT=image/tiff"
        ));
    }

    #[test]
    fn test_url_is_deterministic() {
        let factory = Wcs100TileFactory::new("http://x/wcs?a=b", "elev").unwrap();
        let first = factory.url_for_tile(&sample_sector(), 64, 32).unwrap();
        let second = factory.url_for_tile(&sample_sector(), 64, 32).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_new_rejects_empty_values() {
        let err = Wcs100TileFactory::new("", "elev").unwrap_err();
        assert_eq!(err.reason(), InvalidReason::MissingServiceAddress);

        let err = Wcs100TileFactory::new("http://x", "").unwrap_err();
        assert_eq!(err.reason(), InvalidReason::MissingCoverage);
    }

    #[test]
    fn test_new_stores_values_verbatim() {
        let factory = Wcs100TileFactory::new(" http://x/wcs? ", " Elev ").unwrap();
        assert_eq!(factory.service_address(), " http://x/wcs? ");
        assert_eq!(factory.coverage(), " Elev ");
    }

    #[test]
    fn test_setters() {
        let mut factory = Wcs100TileFactory::new("http://a", "one").unwrap();
        factory.set_service_address("http://b?").unwrap();
        factory.set_coverage("two").unwrap();
        assert_eq!(factory.service_address(), "http://b?");
        assert_eq!(factory.coverage(), "two");
    }

    #[test]
    fn test_setters_reject_empty_and_keep_state() {
        let mut factory = Wcs100TileFactory::new("http://a", "one").unwrap();

        let err = factory.set_service_address("").unwrap_err();
        assert_eq!(err.reason(), InvalidReason::MissingServiceAddress);
        assert!(matches!(
            err,
            TileFactoryError::InvalidArgument {
                operation: "setServiceAddress",
                ..
            }
        ));

        let err = factory.set_coverage(String::new()).unwrap_err();
        assert_eq!(err.reason(), InvalidReason::MissingCoverage);

        assert_eq!(factory.service_address(), "http://a");
        assert_eq!(factory.coverage(), "one");
    }

    #[test]
    fn test_with_builders() {
        let factory = Wcs100TileFactory::new("http://a", "one")
            .unwrap()
            .with_service_address("http://b")
            .unwrap()
            .with_coverage("two")
            .unwrap();
        assert_eq!(factory.service_address(), "http://b");
        assert_eq!(factory.coverage(), "two");

        let err = factory.with_coverage("").unwrap_err();
        assert_eq!(err.reason(), InvalidReason::MissingCoverage);
    }

    #[test]
    fn test_url_for_tile_rejects_bad_input() {
        let factory = Wcs100TileFactory::new("http://x", "elev").unwrap();

        let err = factory.url_for_tile(&Sector::empty(), 256, 256).unwrap_err();
        assert_eq!(err.reason(), InvalidReason::MissingCell);

        let err = factory.url_for_tile(&sample_sector(), 0, 256).unwrap_err();
        assert_eq!(err.reason(), InvalidReason::InvalidWidthOrHeight);

        let err = factory.url_for_tile(&sample_sector(), 256, 0).unwrap_err();
        assert_eq!(err.reason(), InvalidReason::InvalidWidthOrHeight);
    }

    #[test]
    fn test_create_tile() {
        let factory = Wcs100TileFactory::new("http://host?", "elev").unwrap();
        let sector = sample_sector();
        let level = Level::new(3, 40.0, 256, 128);

        let tile = factory.create_tile(&sector, &level, 5, 9).unwrap();

        assert_eq!(tile.sector(), &sector);
        assert_eq!(tile.level(), &level);
        assert_eq!(tile.row(), 5);
        assert_eq!(tile.column(), 9);
        assert_eq!(
            tile.image_source().url(),
            factory.url_for_tile(&sector, 256, 128).unwrap()
        );
    }

    #[test]
    fn test_create_tile_rejects_missing_inputs() {
        let factory = Wcs100TileFactory::new("http://x", "elev").unwrap();
        let level = Level::new(0, 45.0, 256, 256);

        let err = factory
            .create_tile(&Sector::empty(), &level, 0, 0)
            .unwrap_err();
        assert_eq!(err.reason(), InvalidReason::MissingCell);
        assert_eq!(err.to_string(), "Wcs100TileFactory.createTile: missingCell");

        let err = factory
            .create_tile(&sample_sector(), &Level::default(), 0, 0)
            .unwrap_err();
        assert_eq!(err.reason(), InvalidReason::MissingLevel);
    }

    #[test]
    fn test_create_tile_rejects_zero_sized_level() {
        let factory = Wcs100TileFactory::new("http://x", "elev").unwrap();
        let level = Level::new(0, 45.0, 0, 256);
        let err = factory
            .create_tile(&sample_sector(), &level, 0, 0)
            .unwrap_err();
        assert!(matches!(
            err,
            TileFactoryError::InvalidArgument {
                operation: "urlForTile",
                reason: InvalidReason::InvalidWidthOrHeight,
                ..
            }
        ));
    }

    // Property-based tests using proptest
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_url_is_pure(
                min_lat in -90.0..0.0_f64,
                min_lon in -180.0..0.0_f64,
                dlat in 0.0..90.0_f64,
                dlon in 0.0..180.0_f64,
                width in 1u32..4096,
                height in 1u32..4096,
            ) {
                let factory = Wcs100TileFactory::new("http://x/wcs?map=a", "cov").unwrap();
                let sector = Sector::from_degrees(min_lat, min_lon, dlat, dlon);

                let first = factory.url_for_tile(&sector, width, height).unwrap();
                let second = factory.url_for_tile(&sector, width, height).unwrap();
                prop_assert_eq!(&first, &second);

                let expected_suffix = format!("&WIDTH={}&HEIGHT={}&FORMAT=image/tiff", width, height);
                prop_assert!(first.ends_with(&expected_suffix));
            }

            #[test]
            fn test_address_is_prefix(path in "[a-z]{1,12}", query in "([a-z]{1,5}=[a-z0-9]{1,5}&){0,3}") {
                let address = format!("http://host/{}?{}", path, query);
                let factory = Wcs100TileFactory::new(address.clone(), "cov").unwrap();
                let url = factory.url_for_tile(&Sector::full_sphere(), 256, 256).unwrap();

                prop_assert!(url.starts_with(&address));
                prop_assert_eq!(url.matches('?').count(), 1);
                prop_assert!(url.contains("SERVICE=WCS&VERSION=1.0.0&REQUEST=GetCoverage&COVERAGE=cov&"));
            }
        }
    }
}
