//! Download executor configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default destination directory, relative to the working directory.
pub const DEFAULT_DEST_DIR: &str = "MAP_TILES";

/// Total attempts per tile (first try plus retries).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Fixed delay between failed attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(3);

/// Configuration for the download executor.
///
/// Built once at startup and passed by reference into the executor; there
/// is no mutable global state.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use tilefetch::download::DownloadConfig;
///
/// let config = DownloadConfig::new()
///     .with_dest("tiles/brazil")
///     .with_max_attempts(5)
///     .with_retry_delay(Duration::from_secs(1));
/// assert_eq!(config.max_attempts(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct DownloadConfig {
    dest: Option<PathBuf>,
    max_attempts: u32,
    retry_delay: Duration,
}

impl DownloadConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit destination root for the tile tree.
    pub fn with_dest(mut self, dest: impl Into<PathBuf>) -> Self {
        self.dest = Some(dest.into());
        self
    }

    /// Sets the destination root from an optional CLI value.
    pub fn with_dest_opt(mut self, dest: Option<PathBuf>) -> Self {
        self.dest = dest;
        self
    }

    /// Sets the total attempts per tile. Clamped to at least one.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Sets the delay between failed attempts.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Explicit destination root, if one was configured.
    pub fn dest(&self) -> Option<&Path> {
        self.dest.as_deref()
    }

    /// Total attempts per tile.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay between failed attempts.
    pub fn retry_delay(&self) -> Duration {
        self.retry_delay
    }
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            dest: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DownloadConfig::default();
        assert_eq!(config.dest(), None);
        assert_eq!(config.max_attempts(), 3);
        assert_eq!(config.retry_delay(), Duration::from_secs(3));
    }

    #[test]
    fn test_builder() {
        let config = DownloadConfig::new()
            .with_dest("some/dir")
            .with_max_attempts(7)
            .with_retry_delay(Duration::from_millis(250));
        assert_eq!(config.dest(), Some(Path::new("some/dir")));
        assert_eq!(config.max_attempts(), 7);
        assert_eq!(config.retry_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_at_least_one_attempt() {
        let config = DownloadConfig::new().with_max_attempts(0);
        assert_eq!(config.max_attempts(), 1);
    }
}
