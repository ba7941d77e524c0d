//! Tile server address scheme.
//!
//! Tiles are addressed as `{base}/{zoom}/{x}/{y}.png`, unauthenticated.
//! The response body is taken verbatim; no content validation is done.

use crate::coord::TileCoord;

/// Default tile server.
pub const DEFAULT_BASE_URL: &str = "http://tile.openstreetmap.org";

/// A slippy-map tile server endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileServer {
    base_url: String,
}

impl TileServer {
    /// Creates a server endpoint from a base URL. A trailing slash is
    /// stripped so joined tile paths never double up.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// The remote URL for one tile.
    pub fn tile_url(&self, tile: &TileCoord) -> String {
        format!("{}/{}", self.base_url, tile.rel_path())
    }

    /// The configured base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for TileServer {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
