//! Deterministic sample generators for sweeping the projection domain.
//!
//! These produce evenly spaced points so sweeps are reproducible without a
//! random number generator.

use tile_common::GeoPoint;

/// Evenly spaced values from `start` to `end` inclusive.
///
/// Returns just `start` when `steps` is 0.
///
/// # Example
///
/// ```
/// use test_utils::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 4), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps == 0 {
        return vec![start];
    }
    (0..=steps)
        .map(|i| start + (end - start) * i as f64 / steps as f64)
        .collect()
}

/// A `lat_steps + 1` by `lng_steps + 1` grid of points covering the given
/// ranges, row by row from the first latitude.
///
/// # Example
///
/// ```
/// use test_utils::geo_grid;
///
/// let grid = geo_grid((-85.0, 85.0), (-180.0, 180.0), 2, 4);
/// assert_eq!(grid.len(), 15); // 3 rows x 5 columns
/// assert_eq!(grid[0].lat, -85.0);
/// assert_eq!(grid[14].lng, 180.0);
/// ```
pub fn geo_grid(
    lat_range: (f64, f64),
    lng_range: (f64, f64),
    lat_steps: usize,
    lng_steps: usize,
) -> Vec<GeoPoint> {
    let lngs = linspace(lng_range.0, lng_range.1, lng_steps);
    linspace(lat_range.0, lat_range.1, lat_steps)
        .into_iter()
        .flat_map(|lat| lngs.iter().map(move |&lng| GeoPoint::new(lat, lng)))
        .collect()
}

/// The grid the round-trip properties are checked over: latitudes within
/// ±85°, longitudes within ±180°.
pub fn roundtrip_domain() -> Vec<GeoPoint> {
    geo_grid((-85.0, 85.0), (-180.0, 180.0), 34, 36)
}

/// Zoom levels a tile client actually requests.
pub fn standard_zoom_levels() -> std::ops::RangeInclusive<i32> {
    0..=18
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let values = linspace(-85.0, 85.0, 34);
        assert_eq!(values.len(), 35);
        assert_eq!(values[0], -85.0);
        assert_eq!(values[34], 85.0);
        assert_eq!(values[17], 0.0);
    }

    #[test]
    fn test_linspace_zero_steps() {
        assert_eq!(linspace(3.0, 9.0, 0), vec![3.0]);
    }

    #[test]
    fn test_roundtrip_domain_within_limits() {
        for p in roundtrip_domain() {
            assert!(p.lat >= -85.0 && p.lat <= 85.0);
            assert!(p.lng >= -180.0 && p.lng <= 180.0);
        }
    }

    #[test]
    fn test_standard_zoom_levels() {
        let zooms: Vec<i32> = standard_zoom_levels().collect();
        assert_eq!(zooms.first(), Some(&0));
        assert_eq!(zooms.last(), Some(&18));
    }
}
