//! Point types for geographic and pixel coordinate spaces.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{parse_components, TileError};

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Clamp each axis independently into the given ranges.
    pub fn clamped(&self, lat_range: (f64, f64), lng_range: (f64, f64)) -> Self {
        Self {
            lat: self.lat.clamp(lat_range.0, lat_range.1),
            lng: self.lng.clamp(lng_range.0, lng_range.1),
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Parses `"lat,lng"`.
impl FromStr for GeoPoint {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [lat, lng] = parse_components::<f64, 2>(s, "lat,lng")?;
        Ok(Self { lat, lng })
    }
}

/// An integer pixel coordinate at some zoom level.
///
/// Pixel space has no inherent bounds; callers handle any wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i64,
    pub y: i64,
}

impl PixelPoint {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for PixelPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Parses `"x,y"`.
impl FromStr for PixelPoint {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y] = parse_components::<i64, 2>(s, "x,y")?;
        Ok(Self { x, y })
    }
}

/// Tile dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileSize {
    pub width: i64,
    pub height: i64,
}

impl TileSize {
    pub const fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }
}

impl Default for TileSize {
    fn default() -> Self {
        Self::new(256, 256)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_geo_point() {
        let p: GeoPoint = "39.915,116.404".parse().unwrap();
        assert_eq!(p.lat, 39.915);
        assert_eq!(p.lng, 116.404);
    }

    #[test]
    fn test_clamped_is_per_axis() {
        let p = GeoPoint::new(89.0, -200.0).clamped((-85.0, 85.0), (-180.0, 180.0));
        assert_eq!(p, GeoPoint::new(85.0, -180.0));
    }

    #[test]
    fn test_default_tile_size() {
        let size = TileSize::default();
        assert_eq!(size, TileSize::new(256, 256));
    }
}
