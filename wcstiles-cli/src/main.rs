//! WcsTiles CLI - Command-line interface
//!
//! Prints WCS 1.0.0 GetCoverage request URLs for bounding boxes and pyramid
//! levels. No requests are sent.

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use wcstiles::config::{config_file_path, ConfigFile};

use commands::common::ServiceArgs;
use commands::tiles::TilesArgs;
use commands::url::UrlArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "wcstiles")]
#[command(about = "Build WCS GetCoverage request URLs for tile pyramids", long_about = None)]
struct Cli {
    /// Config file (default: ~/.wcstiles/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    service: ServiceArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the GetCoverage URL for a bounding box
    Url(UrlArgs),
    /// List the tiles of a pyramid level with their GetCoverage URLs
    Tiles(TilesArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = wcstiles::logging::init_logging(cli.verbose) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let path = cli.config.unwrap_or_else(config_file_path);
    let config = ConfigFile::load_from(&path)?;

    match cli.command {
        Commands::Url(args) => commands::url::run(args, &cli.service, &config),
        Commands::Tiles(args) => commands::tiles::run(args, &cli.service, &config),
    }
}
