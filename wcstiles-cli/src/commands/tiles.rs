//! `tiles` command: list the tiles of one pyramid level with their URLs.

use clap::Args;
use wcstiles::config::ConfigFile;
use wcstiles::geo::Sector;
use wcstiles::tile::{for_each_tile_for_level, Tile};

use super::common::{parse_bbox, resolve_factory, ServiceArgs};
use crate::error::CliError;

#[derive(Debug, Args)]
pub struct TilesArgs {
    /// Pyramid level, 0 being the coarsest
    #[arg(long, default_value = "0")]
    pub level: u32,

    /// Restrict to tiles intersecting MINLON,MINLAT,MAXLON,MAXLAT
    #[arg(long, allow_hyphen_values = true)]
    pub bbox: Option<String>,
}

/// Visit the tiles selected by the arguments, one at a time.
pub fn for_each_tile(
    args: &TilesArgs,
    service: &ServiceArgs,
    config: &ConfigFile,
    visit: impl FnMut(Tile),
) -> Result<(), CliError> {
    let factory = resolve_factory(service, config)?;
    let levels = config.level_set()?;
    let level = levels.level(args.level).ok_or(CliError::UnknownLevel {
        level: args.level,
        num_levels: levels.num_levels(),
    })?;

    let sector = match &args.bbox {
        Some(bbox) => parse_bbox(bbox)?,
        None => Sector::full_sphere(),
    };

    tracing::debug!(level = args.level, %sector, "Listing tiles");
    Ok(for_each_tile_for_level(level, &sector, &factory, visit)?)
}

pub fn run(args: TilesArgs, service: &ServiceArgs, config: &ConfigFile) -> Result<(), CliError> {
    for_each_tile(&args, service, config, |tile| {
        println!("{}\t{}", tile.tile_key(), tile.image_source());
    })
}
