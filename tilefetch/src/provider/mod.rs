//! Tile server abstraction
//!
//! Provides the HTTP client trait used for dependency injection plus the
//! tile server address scheme (`{base}/{zoom}/{x}/{y}.png`).

mod http;
mod server;

pub use http::{HttpClient, ReqwestClient};
pub use server::{TileServer, DEFAULT_BASE_URL};

use thiserror::Error;

/// Errors raised while fetching a tile from the remote server.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProviderError {
    /// Transport-level failure (connection, timeout, read)
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The server answered with a non-success status
    #[error("HTTP status {status} from {url}")]
    Status { status: u16, url: String },
}

#[cfg(test)]
pub use http::tests::MockHttpClient;
