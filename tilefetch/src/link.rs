//! Shareable map link parsing.
//!
//! Turns one of the two historical map-link encodings into a normalized
//! [`Viewport`]:
//!
//! - query form: `?lat=<f>&lon=<f>&zoom=<f>`
//! - path-segment form: `.../#map=<zoom>/<lat>/<lon>`
//!
//! Detection is an explicit match on the URL shape (a path segment
//! starting with `map=` selects the path form), not substring sniffing.

use std::fmt;

/// A map viewport: the center and zoom level a user was looking at when
/// the link was generated.
///
/// Immutable for the whole run. Invariant: `zoom >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Center latitude in degrees
    pub lat: f64,
    /// Center longitude in degrees
    pub lon: f64,
    /// Zoom level the link was shared at (fractional zooms occur in the
    /// path-segment form)
    pub zoom: f64,
}

impl Viewport {
    /// Parses a map link in either supported encoding.
    pub fn parse(link: &str) -> Result<Self, LinkError> {
        let segments: Vec<&str> = link.split('/').collect();

        // Path-segment form: a segment shaped `map=<zoom>` (possibly
        // carried in the URL fragment as `#map=<zoom>`) followed by
        // `<lat>/<lon>`.
        if let Some(pos) = segments
            .iter()
            .position(|s| s.trim_start_matches('#').starts_with("map="))
        {
            return Self::parse_map_segments(&segments[pos..]);
        }

        // Query form: `?lat=<f>&lon=<f>&zoom=<f>`.
        if let Some((_, query)) = link.split_once('?') {
            return Self::parse_query(query);
        }

        Err(LinkError::UnrecognizedFormat(link.to_string()))
    }

    fn parse_map_segments(segments: &[&str]) -> Result<Self, LinkError> {
        let zoom_segment = segments[0].trim_start_matches('#');
        let zoom_value = zoom_segment
            .split_once('=')
            .map(|(_, v)| v)
            .filter(|v| !v.is_empty())
            .ok_or(LinkError::MissingField("zoom"))?;

        let zoom = parse_field("zoom", zoom_value)?;
        let lat = parse_field("lat", segments.get(1).copied().ok_or(LinkError::MissingField("lat"))?)?;
        let lon = parse_field("lon", segments.get(2).copied().ok_or(LinkError::MissingField("lon"))?)?;

        Self::checked(lat, lon, zoom)
    }

    fn parse_query(query: &str) -> Result<Self, LinkError> {
        let mut lat = None;
        let mut lon = None;
        let mut zoom = None;

        for pair in query.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "lat" => lat = Some(parse_field("lat", value)?),
                "lon" => lon = Some(parse_field("lon", value)?),
                "zoom" => zoom = Some(parse_field("zoom", value)?),
                _ => {}
            }
        }

        let lat = lat.ok_or(LinkError::MissingField("lat"))?;
        let lon = lon.ok_or(LinkError::MissingField("lon"))?;
        let zoom = zoom.ok_or(LinkError::MissingField("zoom"))?;

        Self::checked(lat, lon, zoom)
    }

    fn checked(lat: f64, lon: f64, zoom: f64) -> Result<Self, LinkError> {
        if zoom < 0.0 {
            return Err(LinkError::NegativeZoom(zoom));
        }
        Ok(Self { lat, lon, zoom })
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<f64, LinkError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LinkError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// Errors raised while parsing a map link.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkError {
    /// The link matches neither supported encoding
    UnrecognizedFormat(String),
    /// A required field is absent from the link
    MissingField(&'static str),
    /// A field is present but not a finite number
    InvalidNumber { field: &'static str, value: String },
    /// Zoom must be non-negative
    NegativeZoom(f64),
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::UnrecognizedFormat(link) => {
                write!(
                    f,
                    "Unrecognized map link '{}' (expected '?lat=..&lon=..&zoom=..' or '.../#map=<zoom>/<lat>/<lon>')",
                    link
                )
            }
            LinkError::MissingField(field) => {
                write!(f, "Map link is missing the '{}' field", field)
            }
            LinkError::InvalidNumber { field, value } => {
                write!(f, "Invalid value '{}' for link field '{}'", value, field)
            }
            LinkError::NegativeZoom(zoom) => {
                write!(f, "Zoom level {} must not be negative", zoom)
            }
        }
    }
}

impl std::error::Error for LinkError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_form() {
        let viewport =
            Viewport::parse("http://www.openstreetmap.org/?lat=-15.8137&lon=-47.9031&zoom=10")
                .unwrap();
        assert_eq!(viewport.lat, -15.8137);
        assert_eq!(viewport.lon, -47.9031);
        assert_eq!(viewport.zoom, 10.0);
    }

    #[test]
    fn test_parse_query_form_order_independent() {
        let viewport = Viewport::parse("?zoom=7&lon=2.35&lat=48.85").unwrap();
        assert_eq!(viewport.lat, 48.85);
        assert_eq!(viewport.lon, 2.35);
        assert_eq!(viewport.zoom, 7.0);
    }

    #[test]
    fn test_parse_map_fragment_form() {
        let viewport =
            Viewport::parse("https://www.openstreetmap.org/#map=10/-15.8137/-47.9031").unwrap();
        assert_eq!(viewport.zoom, 10.0);
        assert_eq!(viewport.lat, -15.8137);
        assert_eq!(viewport.lon, -47.9031);
    }

    #[test]
    fn test_parse_map_form_fractional_zoom() {
        let viewport = Viewport::parse("https://osm.example/#map=12.5/51.5074/-0.1278").unwrap();
        assert_eq!(viewport.zoom, 12.5);
    }

    #[test]
    fn test_query_form_missing_zoom() {
        let err = Viewport::parse("?lat=1.0&lon=2.0").unwrap_err();
        assert_eq!(err, LinkError::MissingField("zoom"));
    }

    #[test]
    fn test_map_form_missing_lon() {
        let err = Viewport::parse("https://osm.example/#map=10/-15.8").unwrap_err();
        assert_eq!(err, LinkError::MissingField("lon"));
    }

    #[test]
    fn test_query_form_bad_number() {
        let err = Viewport::parse("?lat=abc&lon=2.0&zoom=3").unwrap_err();
        assert!(matches!(err, LinkError::InvalidNumber { field: "lat", .. }));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let err = Viewport::parse("?lat=NaN&lon=2.0&zoom=3").unwrap_err();
        assert!(matches!(err, LinkError::InvalidNumber { field: "lat", .. }));
    }

    #[test]
    fn test_negative_zoom_rejected() {
        let err = Viewport::parse("?lat=1.0&lon=2.0&zoom=-3").unwrap_err();
        assert_eq!(err, LinkError::NegativeZoom(-3.0));
    }

    #[test]
    fn test_unrecognized_link() {
        let err = Viewport::parse("https://example.com/nothing/here").unwrap_err();
        assert!(matches!(err, LinkError::UnrecognizedFormat(_)));
    }

    #[test]
    fn test_error_display_names_field() {
        let err = LinkError::MissingField("lat");
        assert!(err.to_string().contains("lat"));
    }
}
