//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use wcstiles::config::ConfigFileError;
use wcstiles::geo::GeoError;
use wcstiles::tile::{InvalidReason, TileFactoryError};

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to load or apply the config file
    Config(ConfigFileError),
    /// A bounding box argument could not be parsed
    InvalidBbox(String),
    /// The bounding box does not describe a valid sector
    Geo(GeoError),
    /// The requested level is outside the pyramid
    UnknownLevel { level: u32, num_levels: usize },
    /// The tile factory rejected the request
    TileFactory(TileFactoryError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let CliError::TileFactory(e) = self {
            match e.reason() {
                InvalidReason::MissingServiceAddress | InvalidReason::MissingCoverage => {
                    eprintln!();
                    eprintln!("Set the WCS service with either:");
                    eprintln!("  1. --service-address and --coverage");
                    eprintln!("  2. [wcs] service_address and coverage in config.ini");
                }
                _ => {}
            }
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "{}", e),
            CliError::InvalidBbox(msg) => write!(f, "Invalid bounding box: {}", msg),
            CliError::Geo(e) => write!(f, "Invalid bounding box: {}", e),
            CliError::UnknownLevel { level, num_levels } => write!(
                f,
                "Level {} does not exist (pyramid has {} levels)",
                level, num_levels
            ),
            CliError::TileFactory(e) => write!(f, "Cannot build request: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Geo(e) => Some(e),
            CliError::TileFactory(e) => Some(e),
            CliError::InvalidBbox(_) | CliError::UnknownLevel { .. } => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        match e {
            ConfigFileError::TileFactory(inner) => CliError::TileFactory(inner),
            other => CliError::Config(other),
        }
    }
}

impl From<GeoError> for CliError {
    fn from(e: GeoError) -> Self {
        CliError::Geo(e)
    }
}

impl From<TileFactoryError> for CliError {
    fn from(e: TileFactoryError) -> Self {
        CliError::TileFactory(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_level_display() {
        let err = CliError::UnknownLevel {
            level: 12,
            num_levels: 10,
        };
        assert_eq!(
            err.to_string(),
            "Level 12 does not exist (pyramid has 10 levels)"
        );
    }

    #[test]
    fn test_config_tile_factory_error_is_unwrapped() {
        let inner = TileFactoryError::invalid_argument(
            "Wcs100TileFactory",
            "new",
            InvalidReason::MissingCoverage,
        );
        let err = CliError::from(ConfigFileError::TileFactory(inner.clone()));
        assert!(matches!(err, CliError::TileFactory(ref e) if *e == inner));
    }
}
