//! Tile work queue construction.
//!
//! Projects a bounding box into tile-index space for every zoom level in
//! the requested range and enumerates the resulting rectangles into one
//! fully materialized queue. The queue is built before any download
//! starts so total counts are known up front.

use std::fmt;
use std::str::FromStr;

use tracing::info;

use crate::bounds::GeoBounds;
use crate::coord::{lat_to_tile_y, lon_to_tile_x, TileCoord, MAX_ZOOM};

/// An inclusive range of zoom levels to download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomRange {
    /// Coarsest level, inclusive
    pub min: u8,
    /// Finest level, inclusive
    pub max: u8,
}

impl ZoomRange {
    /// Creates a range, rejecting inverted or unsupported bounds.
    pub fn new(min: u8, max: u8) -> Result<Self, ZoomRangeError> {
        if min > max {
            return Err(ZoomRangeError::Inverted { min, max });
        }
        if max > MAX_ZOOM {
            return Err(ZoomRangeError::TooDeep(max));
        }
        Ok(Self { min, max })
    }
}

impl FromStr for ZoomRange {
    type Err = ZoomRangeError;

    /// Parses `"<min>:<max>"`; a hyphen separator is accepted as a legacy
    /// alternative.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (min, max) = s
            .split_once(|c| c == ':' || c == '-')
            .ok_or_else(|| ZoomRangeError::Malformed(s.to_string()))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<u8>()
                .map_err(|_| ZoomRangeError::Malformed(s.to_string()))
        };

        ZoomRange::new(parse(min)?, parse(max)?)
    }
}

impl fmt::Display for ZoomRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.min, self.max)
    }
}

/// Errors raised while parsing or constructing a zoom range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoomRangeError {
    /// Input is not two integers joined by `:` or `-`
    Malformed(String),
    /// Minimum exceeds maximum
    Inverted { min: u8, max: u8 },
    /// Maximum exceeds the deepest supported zoom level
    TooDeep(u8),
}

impl fmt::Display for ZoomRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoomRangeError::Malformed(s) => {
                write!(f, "Invalid zoom range '{}' (expected '<min>:<max>')", s)
            }
            ZoomRangeError::Inverted { min, max } => {
                write!(f, "Zoom range minimum {} exceeds maximum {}", min, max)
            }
            ZoomRangeError::TooDeep(max) => {
                write!(
                    f,
                    "Zoom level {} exceeds the deepest supported level {}",
                    max, MAX_ZOOM
                )
            }
        }
    }
}

impl std::error::Error for ZoomRangeError {}

/// Enumerates every tile covering `bounds` at each zoom level in `range`.
///
/// Within a zoom level the rectangle is walked row-major (rows outer,
/// columns inner) with both the minimum and maximum tile indices treated
/// as inclusive bounds. Per level an informational count of
/// `(x_max - x_min + 1) * (y_max - y_min + 1)` tiles is logged.
///
/// The returned queue is sorted by ascending zoom. Construction order
/// already satisfies that, but the stable sort makes coarsest-first an
/// explicit contract rather than an accident of iteration.
pub fn build_queue(bounds: &GeoBounds, range: ZoomRange) -> Vec<TileCoord> {
    let mut queue = Vec::new();

    for zoom in range.min..=range.max {
        let x_min = lon_to_tile_x(bounds.west, zoom);
        let x_max = lon_to_tile_x(bounds.east, zoom);
        let y_min = lat_to_tile_y(bounds.north, zoom);
        let y_max = lat_to_tile_y(bounds.south, zoom);

        let cols = x_max as i64 - x_min as i64 + 1;
        let rows = y_max as i64 - y_min as i64 + 1;
        info!(
            zoom,
            tiles = cols * rows,
            cols,
            rows,
            "Scheduled tiles for zoom level"
        );

        for y in y_min..=y_max {
            for x in x_min..=x_max {
                queue.push(TileCoord { x, y, zoom });
            }
        }
    }

    queue.sort_by_key(|tile| tile.zoom);
    queue
}
