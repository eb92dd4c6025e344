//! Configuration file handling for ~/.wcstiles/config.ini.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use crate::tile::{LevelSet, LevelSetError, TileFactoryError};
use crate::wcs::Wcs100TileFactory;

/// Default tile edge length of the coarsest level, in degrees.
pub const DEFAULT_FIRST_LEVEL_DELTA: f64 = 45.0;

/// Default number of pyramid levels.
pub const DEFAULT_NUM_LEVELS: u32 = 10;

/// Default tile width in pixels.
pub const DEFAULT_TILE_WIDTH: u32 = 256;

/// Default tile height in pixels.
pub const DEFAULT_TILE_HEIGHT: u32 = 256;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// A required setting is not present
    #[error("Missing configuration: {section}.{key}")]
    MissingValue { section: String, key: String },

    /// The WCS settings were rejected by the tile factory
    #[error("Invalid WCS settings: {0}")]
    TileFactory(#[from] TileFactoryError),

    /// The pyramid settings do not form a valid level set
    #[error("Invalid pyramid settings: {0}")]
    LevelSet(#[from] LevelSetError),
}

/// `[wcs]` section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WcsSettings {
    pub service_address: Option<String>,
    pub coverage: Option<String>,
}

/// `[pyramid]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct PyramidSettings {
    pub first_level_delta: f64,
    pub num_levels: u32,
    pub tile_width: u32,
    pub tile_height: u32,
}

impl Default for PyramidSettings {
    fn default() -> Self {
        Self {
            first_level_delta: DEFAULT_FIRST_LEVEL_DELTA,
            num_levels: DEFAULT_NUM_LEVELS,
            tile_width: DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
        }
    }
}

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    pub wcs: WcsSettings,
    pub pyramid: PyramidSettings,
}

impl ConfigFile {
    /// Load configuration from the default path (~/.wcstiles/config.ini).
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Parse configuration from INI text.
    pub fn parse(content: &str) -> Result<Self, ConfigFileError> {
        let ini = Ini::load_from_str(content).map_err(ini::Error::Parse)?;
        super::parser::parse_ini(&ini)
    }

    /// Build a tile factory from the `[wcs]` section.
    pub fn tile_factory(&self) -> Result<Wcs100TileFactory, ConfigFileError> {
        let service_address = self
            .wcs
            .service_address
            .clone()
            .ok_or_else(|| missing("wcs", "service_address"))?;
        let coverage = self
            .wcs
            .coverage
            .clone()
            .ok_or_else(|| missing("wcs", "coverage"))?;

        Ok(Wcs100TileFactory::new(service_address, coverage)?)
    }

    /// Build a whole-world level set from the `[pyramid]` section.
    pub fn level_set(&self) -> Result<LevelSet, ConfigFileError> {
        let p = &self.pyramid;
        Ok(LevelSet::world(
            p.first_level_delta,
            p.num_levels,
            p.tile_width,
            p.tile_height,
        )?)
    }
}

fn missing(section: &str, key: &str) -> ConfigFileError {
    ConfigFileError::MissingValue {
        section: section.to_string(),
        key: key.to_string(),
    }
}

/// Get the config file path (~/.wcstiles/config.ini).
pub fn config_file_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".wcstiles")
        .join("config.ini")
}
