//! `url` command: print the GetCoverage URL for a bounding box.

use clap::Args;
use wcstiles::config::ConfigFile;

use super::common::{parse_bbox, resolve_factory, ServiceArgs};
use crate::error::CliError;

#[derive(Debug, Args)]
pub struct UrlArgs {
    /// Bounding box as MINLON,MINLAT,MAXLON,MAXLAT in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub bbox: String,

    /// Image width in pixels (defaults to the configured tile width)
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels (defaults to the configured tile height)
    #[arg(long)]
    pub height: Option<u32>,
}

/// Build the URL for the given arguments.
pub fn build_url(
    args: &UrlArgs,
    service: &ServiceArgs,
    config: &ConfigFile,
) -> Result<String, CliError> {
    let factory = resolve_factory(service, config)?;
    let sector = parse_bbox(&args.bbox)?;
    let width = args.width.unwrap_or(config.pyramid.tile_width);
    let height = args.height.unwrap_or(config.pyramid.tile_height);

    Ok(factory.url_for_tile(&sector, width, height)?)
}

pub fn run(args: UrlArgs, service: &ServiceArgs, config: &ConfigFile) -> Result<(), CliError> {
    println!("{}", build_url(&args, service, config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ServiceArgs {
        ServiceArgs {
            service_address: Some("http://host?".to_string()),
            coverage: Some("elev".to_string()),
        }
    }

    #[test]
    fn test_build_url() {
        let args = UrlArgs {
            bbox: "-10,-20,10,20".to_string(),
            width: None,
            height: None,
        };
        let url = build_url(&args, &service(), &ConfigFile::default()).unwrap();
        assert_eq!(
            url,
            "http://host?SERVICE=WCS&VERSION=1.0.0&REQUEST=GetCoverage&COVERAGE=elev\
             &CRS=EPSG:4326&BBOX=-10.0,-20.0,10.0,20.0&WIDTH=256&HEIGHT=256&FORMAT=image/tiff"
        );
    }

    #[test]
    fn test_zero_width_rejected() {
        let args = UrlArgs {
            bbox: "0,0,1,1".to_string(),
            width: Some(0),
            height: None,
        };
        let result = build_url(&args, &service(), &ConfigFile::default());
        assert!(matches!(result, Err(CliError::TileFactory(_))));
    }
}
