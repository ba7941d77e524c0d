//! Coordinate type definitions

use std::fmt;

/// Web Mercator valid latitude range.
///
/// Beyond this latitude the projection's vertical scale diverges, so all
/// latitudes are clamped here before projecting.
pub const MIN_LAT: f64 = -85.0511287798;
pub const MAX_LAT: f64 = 85.0511287798;

/// Valid longitude range.
///
/// The upper bound stops just short of 180 so that a clamped longitude
/// always projects to a tile column strictly below `2^zoom`.
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 179.9999999;

/// Deepest zoom level accepted for downloads.
///
/// Standard tile servers publish nothing beyond this, and the bound keeps
/// `2^zoom` tile indices comfortably inside `u32`.
pub const MAX_ZOOM: u8 = 19;

/// Tile coordinates in the Web Mercator / Slippy Map tiling scheme.
///
/// Identifies one raster tile; `x` and `y` are bounded by `2^zoom`.
/// This is both the unit of work for the downloader and the relative
/// on-disk path of the fetched tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    /// X coordinate (east-west), 0 at the antimeridian
    pub x: u32,
    /// Y coordinate (north-south), 0 at the north edge
    pub y: u32,
    /// Zoom level
    pub zoom: u8,
}

impl TileCoord {
    /// Relative path of this tile, identical on the tile server and on
    /// disk: `{zoom}/{x}/{y}.png`.
    pub fn rel_path(&self) -> String {
        format!("{}/{}/{}.png", self.zoom, self.x, self.y)
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}
