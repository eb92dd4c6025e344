//! Common types and utilities shared across CLI commands.

use clap::Args;
use wcstiles::config::ConfigFile;
use wcstiles::geo::Sector;
use wcstiles::wcs::Wcs100TileFactory;

use crate::error::CliError;

/// WCS service options shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct ServiceArgs {
    /// WCS service address, may include query parameters
    #[arg(long, global = true)]
    pub service_address: Option<String>,

    /// Coverage name to request
    #[arg(long, global = true)]
    pub coverage: Option<String>,
}

/// Build the tile factory from CLI args and config.
///
/// CLI takes precedence, then config.
pub fn resolve_factory(
    args: &ServiceArgs,
    config: &ConfigFile,
) -> Result<Wcs100TileFactory, CliError> {
    let mut config = config.clone();
    if let Some(address) = &args.service_address {
        config.wcs.service_address = Some(address.clone());
    }
    if let Some(coverage) = &args.coverage {
        config.wcs.coverage = Some(coverage.clone());
    }

    Ok(config.tile_factory()?)
}

/// Parse `MINLON,MINLAT,MAXLON,MAXLAT` into a sector.
pub fn parse_bbox(value: &str) -> Result<Sector, CliError> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err(CliError::InvalidBbox(format!(
            "expected MINLON,MINLAT,MAXLON,MAXLAT, got '{}'",
            value
        )));
    }

    let mut numbers = [0.0_f64; 4];
    for (slot, part) in numbers.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| CliError::InvalidBbox(format!("'{}' is not a number", part)))?;
    }
    let [min_lon, min_lat, max_lon, max_lat] = numbers;

    Ok(Sector::new(min_lat, max_lat, min_lon, max_lon)?)
}
