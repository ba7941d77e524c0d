//! Geographic bounding box derived from a viewport.
//!
//! The box edges are named by compass direction rather than min/max
//! because tile rows grow southward: `north` projects to the smaller
//! tile Y, so downstream row ranges come out non-negative and ordered
//! without any re-inversion.

use crate::coord::{clamp_lat, clamp_lon};
use crate::link::Viewport;

/// Angular extent constant: half the viewport extent in degrees at zoom 0.
///
/// The box around a viewport spans `VIEWPORT_EXTENT_DEG / 2^zoom` degrees
/// in each direction, approximating a fixed on-screen pixel extent
/// translated to a geographic one.
pub const VIEWPORT_EXTENT_DEG: f64 = 350.0;

/// A clamped latitude/longitude bounding box.
///
/// All four edges lie within the valid projection domain; `south <= north`
/// and `west <= east` hold whenever the box was built by
/// [`GeoBounds::around`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    /// Northern edge (projects to the smallest tile row)
    pub north: f64,
    /// Southern edge (projects to the largest tile row)
    pub south: f64,
    /// Western edge (projects to the smallest tile column)
    pub west: f64,
    /// Eastern edge (projects to the largest tile column)
    pub east: f64,
}

impl GeoBounds {
    /// Builds the bounding box around a viewport center.
    ///
    /// The offset is inversely proportional to the viewport zoom, then
    /// each edge is clamped independently to the projection domain. A
    /// center outside the domain collapses to a degenerate zero-area box.
    pub fn around(viewport: Viewport) -> Self {
        let offs = VIEWPORT_EXTENT_DEG / 2.0_f64.powf(viewport.zoom);
        let (south, north) = clamp_lat(viewport.lat - offs, viewport.lat + offs);
        let (west, east) = clamp_lon(viewport.lon - offs, viewport.lon + offs);
        Self {
            north,
            south,
            west,
            east,
        }
    }
}
