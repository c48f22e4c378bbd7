//! Fixed parameters of the Baidu tiling scheme.

/// Southern latitude limit in degrees.
pub const MIN_LATITUDE: f64 = -85.05112878;
/// Northern latitude limit in degrees.
pub const MAX_LATITUDE: f64 = 85.05112878;
/// Western longitude limit in degrees.
pub const MIN_LONGITUDE: f64 = -180.0;
/// Eastern longitude limit in degrees.
pub const MAX_LONGITUDE: f64 = 180.0;

/// Radius of the reference sphere (meters). Also the projection axis.
pub const EARTH_RADIUS: f64 = 6378137.0;

/// WGS84 flattening. Informational only, the transforms are spherical.
pub const FLATTENING: f64 = 0.0033528106647474627;

/// Provider calibration applied to the Mercator Y coordinate (meters).
///
/// Subtracted before pixel conversion, added back on the way out.
pub const LATITUDE_OFFSET: f64 = 20000.0;

/// Zoom level at which one pixel covers exactly one projected meter.
pub const BASE_LEVEL: i32 = 18;

/// Tile edge length in pixels.
pub const TILE_SIZE: i64 = 256;
