//! Shared test utilities for the baidu-tiles workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Approximate float and coordinate assertions
//! - Reference locations with known Baidu pixel coordinates
//! - Deterministic sample generators for sweeps over the projection domain
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{assert_approx_eq, fixtures};
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;

/// Assert two floats differ by at most `epsilon`.
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(39.9150001, 39.915, 1e-6); // passes
/// assert_approx_eq!(39.92, 39.915, 1e-6);      // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left;
        let right: f64 = $right;
        let epsilon: f64 = $epsilon;
        let diff = (left - right).abs();
        if !(diff <= epsilon) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Assert two `GeoPoint`s agree on both axes within `epsilon` degrees.
///
/// ```ignore
/// use test_utils::assert_geo_approx_eq;
///
/// assert_geo_approx_eq!(GeoPoint::new(39.9150001, 116.404), GeoPoint::new(39.915, 116.404), 1e-6);
/// ```
#[macro_export]
macro_rules! assert_geo_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: $crate::GeoPoint = $left;
        let right: $crate::GeoPoint = $right;
        $crate::assert_approx_eq!(left.lat, right.lat, $epsilon);
        $crate::assert_approx_eq!(left.lng, right.lng, $epsilon);
    }};
}

pub use tile_common::GeoPoint;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq_passes() {
        assert_approx_eq!(1.0001, 1.0, 0.001);
        assert_approx_eq!(0.0, 0.0, 0.0);
        assert_approx_eq!(-85.05112878, -85.051128781, 1e-6);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq!(1.1, 1.0, 0.001);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_approx_eq_rejects_nan() {
        assert_approx_eq!(f64::NAN, 1.0, 0.001);
    }

    #[test]
    fn test_assert_geo_approx_eq_passes() {
        assert_geo_approx_eq!(GeoPoint::new(1.0001, 2.0001), GeoPoint::new(1.0, 2.0), 0.001);
    }
}
