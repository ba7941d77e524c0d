//! Coordinate conversion module
//!
//! Provides conversions from geographic coordinates (latitude/longitude)
//! to Web Mercator slippy-map tile coordinates, plus the range clamping
//! that keeps the projection numerically stable near the poles.

mod types;

pub use types::{TileCoord, MAX_LAT, MAX_LON, MAX_ZOOM, MIN_LAT, MIN_LON};

use std::f64::consts::PI;

/// Converts a longitude to a tile X coordinate.
///
/// `floor((lon + 180) / 360 * 2^zoom)` per the standard slippy-map scheme.
///
/// Pure and total on the clamped longitude domain; callers must clamp via
/// [`clamp_lon`] first, which guarantees the result lands in
/// `[0, 2^zoom - 1]`.
#[inline]
pub fn lon_to_tile_x(lon: f64, zoom: u8) -> u32 {
    let n = 2.0_f64.powi(zoom as i32);
    ((lon + 180.0) / 360.0 * n).floor() as u32
}

/// Converts a latitude to a tile Y coordinate.
///
/// Standard Web Mercator inverse: `(1 - asinh(tan(lat)) / π) / 2 * 2^zoom`,
/// truncated toward zero. (`asinh(tan(lat))` is `ln(tan(lat) + sec(lat))`.)
///
/// Pure and total on the clamped latitude domain; callers must clamp via
/// [`clamp_lat`] first. Clamping to the Mercator limit keeps `tan`/`sec`
/// well away from their poles, so f64 precision is sufficient and the
/// result lands in `[0, 2^zoom - 1]`.
#[inline]
pub fn lat_to_tile_y(lat: f64, zoom: u8) -> u32 {
    let n = 2.0_f64.powi(zoom as i32);
    let lat_rad = lat * PI / 180.0;
    ((1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n) as u32
}

/// Clamps a pair of longitude bounds to the valid projection domain.
///
/// Each bound is pulled into `[MIN_LON, MAX_LON]` independently, not as a
/// pair: a request entirely outside the domain collapses to a degenerate
/// zero-area box rather than failing. Callers must tolerate this.
#[inline]
pub fn clamp_lon(min: f64, max: f64) -> (f64, f64) {
    (min.clamp(MIN_LON, MAX_LON), max.clamp(MIN_LON, MAX_LON))
}

/// Clamps a pair of latitude bounds to the Web Mercator latitude limit.
///
/// Same per-bound semantics as [`clamp_lon`].
#[inline]
pub fn clamp_lat(min: f64, max: f64) -> (f64, f64) {
    (min.clamp(MIN_LAT, MAX_LAT), max.clamp(MIN_LAT, MAX_LAT))
}
