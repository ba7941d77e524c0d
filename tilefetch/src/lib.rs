//! TileFetch - bulk slippy-map tile downloader
//!
//! Turns a single shareable map link (center latitude/longitude plus zoom)
//! into a bounded set of Web Mercator tile coordinates across a requested
//! zoom range, then fetches each tile from a tile server into a local
//! `{zoom}/{x}/{y}.png` directory tree. Tiles already on disk are skipped,
//! failures are retried a bounded number of times, and a tile that keeps
//! failing is dropped without aborting the run.

pub mod app;
pub mod bounds;
pub mod coord;
pub mod download;
pub mod link;
pub mod logging;
pub mod provider;
pub mod queue;

pub use app::{run, FetchConfig, FetchError};
