//! Application wiring: one viewport link in, one tile tree out.

mod config;
mod error;

pub use config::FetchConfig;
pub use error::FetchError;

use tracing::info;

use crate::bounds::GeoBounds;
use crate::download::{DownloadConfig, DownloadReport, Downloader};
use crate::link::Viewport;
use crate::provider::{ReqwestClient, TileServer};
use crate::queue::build_queue;

/// Runs one complete fetch: parse the link, derive the bounding box,
/// enumerate the tile queue and drain it against the tile server.
///
/// Input-parse failures and setup failures abort the run with a tagged
/// [`FetchError`]; individual tile failures are retried and dropped by
/// the executor without surfacing here.
pub fn run(config: &FetchConfig) -> Result<DownloadReport, FetchError> {
    let viewport = Viewport::parse(&config.link)?;
    info!(
        lat = viewport.lat,
        lon = viewport.lon,
        zoom = viewport.zoom,
        "Parsed viewport from link"
    );

    let bounds = GeoBounds::around(viewport);
    let queue = build_queue(&bounds, config.zoom_range);

    let client = ReqwestClient::with_timeout(config.timeout)?;
    let server = TileServer::new(&config.base_url);
    let download_config = DownloadConfig::new().with_dest_opt(config.dest.clone());

    Downloader::new(client, server, download_config)
        .run(&queue)
        .map_err(FetchError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::ZoomRange;

    #[test]
    fn test_run_rejects_malformed_link_before_any_io() {
        let config = FetchConfig::new("not a map link", ZoomRange { min: 1, max: 2 });
        let err = run(&config).unwrap_err();
        assert!(err.is_input_error());
    }
}
