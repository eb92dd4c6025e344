//! Configuration file support
//!
//! Settings are read from an INI file, by default `~/.wcstiles/config.ini`:
//!
//! ```ini
//! [wcs]
//! service_address = https://example.com/wcs?map=dem
//! coverage = elevation
//!
//! [pyramid]
//! first_level_delta = 45.0
//! num_levels = 10
//! tile_width = 256
//! tile_height = 256
//! ```

mod file;
mod parser;

pub use file::{
    config_file_path, ConfigFile, ConfigFileError, PyramidSettings, WcsSettings,
    DEFAULT_FIRST_LEVEL_DELTA, DEFAULT_NUM_LEVELS, DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH,
};
