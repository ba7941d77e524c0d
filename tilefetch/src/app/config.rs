//! Top-level run configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::provider::DEFAULT_BASE_URL;
use crate::queue::ZoomRange;

/// Everything one run needs, constructed once at startup from parsed
/// process input and passed down by reference. Replaces the mutable
/// process-wide globals of older tools of this kind.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Shareable map link carrying the viewport
    pub link: String,

    /// Inclusive zoom range to download
    pub zoom_range: ZoomRange,

    /// Destination root; `None` selects the default directory
    pub dest: Option<PathBuf>,

    /// Tile server base URL
    pub base_url: String,

    /// Per-request HTTP timeout
    pub timeout: Duration,
}

impl FetchConfig {
    /// Creates a config with the default server and timeout.
    pub fn new(link: impl Into<String>, zoom_range: ZoomRange) -> Self {
        Self {
            link: link.into(),
            zoom_range,
            dest: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the destination root.
    pub fn with_dest(mut self, dest: Option<PathBuf>) -> Self {
        self.dest = dest;
        self
    }

    /// Sets the tile server base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the per-request HTTP timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
