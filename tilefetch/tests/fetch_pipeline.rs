//! End-to-end pipeline test: link → bounding box → queue → executor,
//! against a stubbed tile server and a temporary directory tree.

use std::fs;
use std::sync::Mutex;
use std::time::Duration;

use tempfile::tempdir;
use tilefetch::bounds::GeoBounds;
use tilefetch::download::{DownloadConfig, Downloader};
use tilefetch::link::Viewport;
use tilefetch::provider::{HttpClient, ProviderError, TileServer};
use tilefetch::queue::{build_queue, ZoomRange};

/// Stub tile server answering every request with a fixed body.
struct StubServer {
    body: Vec<u8>,
    requests: Mutex<Vec<String>>,
}

impl StubServer {
    fn new(body: Vec<u8>) -> Self {
        Self {
            body,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl HttpClient for StubServer {
    fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
        self.requests.lock().unwrap().push(url.to_string());
        Ok(self.body.clone())
    }
}

impl HttpClient for &StubServer {
    fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
        (**self).get(url)
    }
}

fn brasilia() -> Viewport {
    Viewport {
        lat: -15.8137,
        lon: -47.9031,
        zoom: 10.0,
    }
}

#[test]
fn full_pipeline_materializes_tile_tree() {
    let dir = tempdir().unwrap();
    let bounds = GeoBounds::around(brasilia());
    let queue = build_queue(&bounds, ZoomRange { min: 1, max: 2 });

    // The viewport box is far smaller than a zoom-1 or zoom-2 tile, so the
    // queue holds exactly one tile per level.
    assert_eq!(queue.len(), 2);

    let config = DownloadConfig::new()
        .with_dest(dir.path())
        .with_retry_delay(Duration::ZERO);
    let downloader = Downloader::new(
        StubServer::new(b"tile-bytes".to_vec()),
        TileServer::default(),
        config,
    );

    let report = downloader.run(&queue).unwrap();
    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 0);

    // One file per queued tile, under {zoom}/{x}/{y}.png
    for tile in &queue {
        let path = dir.path().join(tile.rel_path());
        assert!(path.is_file(), "missing {}", path.display());
        assert_eq!(fs::read(&path).unwrap(), b"tile-bytes");
    }
}

#[test]
fn rerun_against_populated_tree_fetches_nothing() {
    let dir = tempdir().unwrap();
    let bounds = GeoBounds::around(brasilia());
    let queue = build_queue(&bounds, ZoomRange { min: 1, max: 3 });

    let config = DownloadConfig::new()
        .with_dest(dir.path())
        .with_retry_delay(Duration::ZERO);

    let first = Downloader::new(
        StubServer::new(vec![1]),
        TileServer::default(),
        config.clone(),
    );
    let populated = first.run(&queue).unwrap();
    assert_eq!(populated.succeeded, queue.len());

    let stub = StubServer::new(vec![1]);
    let second = Downloader::new(&stub, TileServer::default(), config);
    let report = second.run(&queue).unwrap();

    assert_eq!(report.skipped, queue.len());
    assert_eq!(report.succeeded, 0);
    assert_eq!(stub.request_count(), 0, "a populated tree must not be re-fetched");
}
