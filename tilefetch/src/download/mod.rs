//! Download executor
//!
//! Drains a tile queue sequentially against the remote tile server and
//! the local filesystem. Per tile: an existing file is skipped, otherwise
//! the parent directory is materialized and the tile fetched with a
//! bounded retry loop. A tile that exhausts its retries is logged and
//! abandoned; it never aborts the run. The filesystem is the only record
//! of completion.

mod config;

pub use config::{DownloadConfig, DEFAULT_DEST_DIR, DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY};

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::coord::TileCoord;
use crate::provider::{HttpClient, ProviderError, TileServer};

/// Per-tile result. Nothing is persisted beyond a log line; a file's
/// presence is the sole durable completion marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The file was already on disk; no fetch was performed
    Skipped,
    /// Fetched and written after `attempts` tries
    Success { attempts: u32 },
    /// Abandoned after `attempts` failed tries
    Failed { attempts: u32 },
}

/// Aggregate counts for one executor run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadReport {
    /// Tiles skipped because the file already existed
    pub skipped: usize,
    /// Tiles fetched and written
    pub succeeded: usize,
    /// Tiles abandoned after exhausting retries
    pub failed: usize,
}

impl DownloadReport {
    fn record(&mut self, outcome: DownloadOutcome) {
        match outcome {
            DownloadOutcome::Skipped => self.skipped += 1,
            DownloadOutcome::Success { .. } => self.succeeded += 1,
            DownloadOutcome::Failed { .. } => self.failed += 1,
        }
    }

    /// Total tiles processed.
    pub fn total(&self) -> usize {
        self.skipped + self.succeeded + self.failed
    }
}

impl fmt::Display for DownloadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} downloaded, {} skipped, {} failed of {} tiles",
            self.succeeded,
            self.skipped,
            self.failed,
            self.total()
        )
    }
}

/// Errors that abort an executor run before any tile is attempted.
///
/// Per-tile failures never surface here; they are retried and, at worst,
/// logged and dropped.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The default destination directory could not be created
    #[error("Failed to create destination directory {path}: {source}")]
    CreateDirFailed { path: PathBuf, source: io::Error },
}

/// Per-attempt fetch error, retryable within the per-tile loop.
#[derive(Debug, Error)]
enum TileError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Failed to create tile directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Sequential tile download executor.
///
/// Fully single-threaded: one tile is fetched to completion (or exhausted
/// retries) before the next begins, with a blocking delay between
/// attempts. Re-running against a populated directory performs no network
/// fetches for tiles already present.
pub struct Downloader<C: HttpClient> {
    client: C,
    server: TileServer,
    config: DownloadConfig,
}

impl<C: HttpClient> Downloader<C> {
    /// Creates an executor over an HTTP client, tile server and config.
    pub fn new(client: C, server: TileServer, config: DownloadConfig) -> Self {
        Self {
            client,
            server,
            config,
        }
    }

    /// Drains the queue in order, returning the aggregate report.
    ///
    /// The queue is expected to be sorted coarsest-first (see
    /// [`crate::queue::build_queue`]); the executor preserves its order.
    pub fn run(&self, queue: &[TileCoord]) -> Result<DownloadReport, DownloadError> {
        let root = self.resolve_root()?;
        info!(
            tiles = queue.len(),
            root = %root.display(),
            server = self.server.base_url(),
            "Starting download run"
        );

        let mut report = DownloadReport::default();
        for tile in queue {
            report.record(self.fetch_tile(&root, tile));
        }

        info!(%report, "Download run complete");
        Ok(report)
    }

    /// Resolves the destination root, materializing the default directory
    /// when none was configured.
    fn resolve_root(&self) -> Result<PathBuf, DownloadError> {
        match self.config.dest() {
            Some(dir) => Ok(dir.to_path_buf()),
            None => {
                let dir = PathBuf::from(DEFAULT_DEST_DIR);
                materialize_root(&dir)?;
                Ok(dir)
            }
        }
    }

    /// Downloads one tile, honoring the skip and retry policy.
    fn fetch_tile(&self, root: &Path, tile: &TileCoord) -> DownloadOutcome {
        let path = root.join(tile.rel_path());
        if path.is_file() {
            info!(tile = %tile, "Tile already downloaded, skipping");
            return DownloadOutcome::Skipped;
        }

        let url = self.server.tile_url(tile);
        let max_attempts = self.config.max_attempts();

        for attempt in 1..=max_attempts {
            match self.try_fetch(&url, &path) {
                Ok(()) => {
                    info!(tile = %tile, attempt, "Tile downloaded");
                    return DownloadOutcome::Success { attempts: attempt };
                }
                Err(e) => {
                    warn!(tile = %tile, attempt, max_attempts, error = %e, "Tile download failed");
                    if attempt < max_attempts {
                        thread::sleep(self.config.retry_delay());
                    }
                }
            }
        }

        warn!(tile = %tile, attempts = max_attempts, "Giving up on tile");
        DownloadOutcome::Failed {
            attempts: max_attempts,
        }
    }

    /// One fetch attempt: materialize the parent directory, GET the tile,
    /// write the body verbatim. A failed attempt leaves no file behind.
    fn try_fetch(&self, url: &str, path: &Path) -> Result<(), TileError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| TileError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let body = self.client.get(url)?;

        if let Err(e) = fs::write(path, &body) {
            // A partial write must not masquerade as a downloaded tile
            fs::remove_file(path).ok();
            return Err(TileError::Write {
                path: path.to_path_buf(),
                source: e,
            });
        }

        Ok(())
    }
}

/// Creates the destination root, tolerating an already existing directory.
fn materialize_root(dir: &Path) -> Result<(), DownloadError> {
    match fs::create_dir(dir) {
        Ok(()) => {
            info!(root = %dir.display(), "Created destination directory");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            debug!(root = %dir.display(), "Destination directory already exists");
            Ok(())
        }
        Err(e) => Err(DownloadError::CreateDirFailed {
            path: dir.to_path_buf(),
            source: e,
        }),
    }
}
