//! Spherical Mercator helpers on the reference sphere.
//!
//! These are plain Mercator; the provider calibration is applied by the
//! caller, never here.

use std::f64::consts::PI;

use tile_common::GeoPoint;

use crate::constants::EARTH_RADIUS;

/// A point in projected meters. Only used between transform steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

/// Half the equatorial circumference: the projected extent on each axis.
pub(crate) const HALF_CIRCUMFERENCE: f64 = PI * EARTH_RADIUS;

/// Project (lng, lat) in degrees to Mercator meters.
///
/// At exactly -90° the logarithm diverges and `y` is `-inf`; callers are
/// expected to deal with non-finite output.
#[inline]
pub(crate) fn lon_lat_to_mercator(lng: f64, lat: f64) -> ProjectedPoint {
    let x = lng * PI * EARTH_RADIUS / 180.0;
    let y_deg = ((90.0 + lat) * PI / 360.0).tan().ln().to_degrees();
    let y = y_deg * PI * EARTH_RADIUS / 180.0;
    ProjectedPoint { x, y }
}

/// Inverse of [`lon_lat_to_mercator`]. No clamping is applied.
#[inline]
pub(crate) fn mercator_to_lon_lat(x: f64, y: f64) -> GeoPoint {
    let lng = x / HALF_CIRCUMFERENCE * 180.0;
    let y_deg = y / HALF_CIRCUMFERENCE * 180.0;
    let lat = (2.0 * (y_deg * PI / 180.0).exp().atan() - PI / 2.0).to_degrees();
    GeoPoint::new(lat, lng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_maps_to_origin() {
        let p = lon_lat_to_mercator(0.0, 0.0);
        assert_eq!(p.x, 0.0);
        assert!(p.y.abs() < 1e-6, "y should be ~0, got {}", p.y);
    }

    #[test]
    fn test_antimeridian_is_half_circumference() {
        let p = lon_lat_to_mercator(180.0, 0.0);
        assert!((p.x - 20037508.342789244).abs() < 1e-6);
    }

    #[test]
    fn test_max_latitude_is_square() {
        // 85.05112878 is chosen so the projected plane is square.
        let p = lon_lat_to_mercator(180.0, 85.05112878);
        assert!((p.y - p.x).abs() < 1.0, "expected square extent, got {} vs {}", p.y, p.x);
    }

    #[test]
    fn test_roundtrip() {
        for &(lng, lat) in &[(116.404, 39.915), (-74.006, 40.7128), (151.2093, -33.8688)] {
            let p = lon_lat_to_mercator(lng, lat);
            let g = mercator_to_lon_lat(p.x, p.y);
            assert!((g.lng - lng).abs() < 1e-9);
            assert!((g.lat - lat).abs() < 1e-9);
        }
    }

    #[test]
    fn test_south_pole_diverges() {
        let p = lon_lat_to_mercator(0.0, -90.0);
        assert!(p.y.is_infinite() && p.y < 0.0);
    }
}
