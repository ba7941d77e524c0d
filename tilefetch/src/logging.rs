//! Logging infrastructure.
//!
//! Structured console logging via `tracing`, configurable with the
//! `RUST_LOG` environment variable and defaulting to `info`.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Call once at process startup. Output goes to stderr so tile progress
/// never interleaves with anything a caller pipes from stdout.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
