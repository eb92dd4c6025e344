//! INI parsing logic for converting `Ini` → `ConfigFile`.

use std::str::FromStr;

use ini::Ini;

use super::file::{ConfigFile, ConfigFileError};

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Missing sections and keys keep their defaults.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [wcs] section
    if let Some(section) = ini.section(Some("wcs")) {
        if let Some(v) = section.get("service_address") {
            let v = v.trim();
            if !v.is_empty() {
                config.wcs.service_address = Some(v.to_string());
            }
        }
        if let Some(v) = section.get("coverage") {
            let v = v.trim();
            if !v.is_empty() {
                config.wcs.coverage = Some(v.to_string());
            }
        }
    }

    // [pyramid] section
    if let Some(section) = ini.section(Some("pyramid")) {
        if let Some(v) = section.get("first_level_delta") {
            let delta: f64 = parse_value("pyramid", "first_level_delta", v)?;
            if !(delta.is_finite() && delta > 0.0) {
                return Err(invalid(
                    "pyramid",
                    "first_level_delta",
                    v,
                    "must be a positive number of degrees",
                ));
            }
            config.pyramid.first_level_delta = delta;
        }
        if let Some(v) = section.get("num_levels") {
            config.pyramid.num_levels = parse_value("pyramid", "num_levels", v)?;
        }
        if let Some(v) = section.get("tile_width") {
            config.pyramid.tile_width = parse_value("pyramid", "tile_width", v)?;
        }
        if let Some(v) = section.get("tile_height") {
            config.pyramid.tile_height = parse_value("pyramid", "tile_height", v)?;
        }
    }

    Ok(config)
}

fn parse_value<T: FromStr>(section: &str, key: &str, value: &str) -> Result<T, ConfigFileError> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(section, key, value, "must be a number"))
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
