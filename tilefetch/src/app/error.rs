//! Top-level error type.
//!
//! Tags input-parse failures separately from internal failures so the CLI
//! can report them distinctly instead of one blanket message.

use thiserror::Error;

use crate::download::DownloadError;
use crate::link::LinkError;
use crate::provider::ProviderError;

/// Errors that abort a whole run.
///
/// Per-tile network failures never appear here; the executor retries and
/// drops them (see [`crate::download`]).
#[derive(Debug, Error)]
pub enum FetchError {
    /// The map link could not be parsed (input error)
    #[error("Invalid map link: {0}")]
    Link(#[from] LinkError),

    /// The HTTP client could not be constructed (internal error)
    #[error("HTTP client setup failed: {0}")]
    Client(#[from] ProviderError),

    /// The destination directory could not be materialized (internal error)
    #[error(transparent)]
    Io(#[from] DownloadError),
}

impl FetchError {
    /// Whether this comes from malformed process input, as opposed to an
    /// unexpected internal failure.
    pub fn is_input_error(&self) -> bool {
        matches!(self, FetchError::Link(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_error_is_input_error() {
        let err = FetchError::from(LinkError::MissingField("lat"));
        assert!(err.is_input_error());
        assert!(err.to_string().contains("Invalid map link"));
    }

    #[test]
    fn test_client_error_is_internal() {
        let err = FetchError::from(ProviderError::Http("tls".to_string()));
        assert!(!err.is_input_error());
    }
}
