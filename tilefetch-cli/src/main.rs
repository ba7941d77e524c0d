//! TileFetch CLI - Command-line interface
//!
//! Thin glue around the tilefetch library: argument parsing, logging
//! setup and error-to-exit-code mapping.

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use tilefetch::provider::DEFAULT_BASE_URL;
use tilefetch::queue::ZoomRange;
use tilefetch::{FetchConfig, FetchError};

#[derive(Parser)]
#[command(name = "tilefetch")]
#[command(about = "Download slippy-map tiles around a shared map link", long_about = None)]
struct Args {
    /// Map link carrying the viewport, formatted like
    /// '?lat=<v>&lon=<v>&zoom=<v>' or '.../#map=<zoom>/<lat>/<lon>'
    #[arg(long)]
    link: String,

    /// Zoom levels to download, in the format '<min>:<max>'
    #[arg(short = 'z', long)]
    zoom_range: ZoomRange,

    /// Directory the tiles are stored under (default: ./MAP_TILES)
    #[arg(short = 'p', long)]
    dest_path: Option<PathBuf>,

    /// Tile server base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

fn main() {
    let args = Args::parse();
    tilefetch::logging::init_logging();

    let config = FetchConfig::new(args.link, args.zoom_range)
        .with_dest(args.dest_path)
        .with_base_url(args.base_url)
        .with_timeout(Duration::from_secs(args.timeout));

    match tilefetch::run(&config) {
        Ok(report) => {
            println!("{}", report);
        }
        Err(e) => exit_with_error(e),
    }
}

/// Input errors and internal errors get distinct messages and exit codes.
fn exit_with_error(error: FetchError) -> ! {
    if error.is_input_error() {
        eprintln!("Error: {}", error);
        eprintln!();
        eprintln!("Supported link formats:");
        eprintln!("  http://www.openstreetmap.org/?lat=-15.8137&lon=-47.9031&zoom=10");
        eprintln!("  https://www.openstreetmap.org/#map=10/-15.8137/-47.9031");
        process::exit(2)
    } else {
        eprintln!("Error: {}", error);
        process::exit(1)
    }
}
