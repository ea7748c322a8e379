// src/domain/coords.rs

use regex::Regex;
use std::sync::LazyLock;

/// Positional patterns for a `lat,lon` pair inside a map link, in priority order.
/// Digits are ASCII only; each number needs at least one fractional digit.
static COORDINATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"@(-?[0-9]+\.[0-9]+),(-?[0-9]+\.[0-9]+)",
        r"center=(-?[0-9]+\.[0-9]+),(-?[0-9]+\.[0-9]+)",
        r"query=(-?[0-9]+\.[0-9]+),(-?[0-9]+\.[0-9]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid coordinate pattern"))
    .collect()
});

/// Coordinates exactly as they appeared in the link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCoordinates {
    pub lat: String,
    pub lon: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

impl RawCoordinates {
    pub fn to_point(&self) -> Option<GeoPoint> {
        Some(GeoPoint {
            lat: self.lat.parse().ok()?,
            lon: self.lon.parse().ok()?,
        })
    }
}

/// Finds a `lat,lon` pair in a pasted map link.
///
/// Tries `@lat,lon`, then `center=lat,lon`, then `query=lat,lon`. The first
/// pattern with a match anywhere in the string wins, so an `@` segment beats a
/// `center=` parameter even when the latter comes first. `None` means the link
/// carries no usable location.
pub fn extract_coordinates(link: &str) -> Option<RawCoordinates> {
    COORDINATE_PATTERNS.iter().find_map(|re| {
        re.captures(link).map(|caps| RawCoordinates {
            lat: caps[1].to_string(),
            lon: caps[2].to_string(),
        })
    })
}
