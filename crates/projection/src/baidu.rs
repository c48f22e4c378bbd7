//! Baidu tile projection.
//!
//! Baidu tiles use spherical Mercator on a 6378137 m sphere, but with two
//! provider-specific twists:
//! - The pixel origin sits at `(-2^17 * 256, 2^17 * 256)` projected meters,
//!   so pixel coordinates are positive over the whole world.
//! - The Mercator Y coordinate is shifted down by 20000 m before it is
//!   converted to pixels (and shifted back on the inverse).
//!
//! Resolution is `2^(18 - zoom)` meters per pixel and does not vary with
//! latitude.

use tile_common::{
    BoundingBox, GeoPoint, PixelPoint, RectLatLng, TileError, TileResult, TileSize, TileXY,
};
use tracing::{debug, trace};

use crate::constants::{
    BASE_LEVEL, EARTH_RADIUS, FLATTENING, LATITUDE_OFFSET, MAX_LATITUDE, MAX_LONGITUDE,
    MIN_LATITUDE, MIN_LONGITUDE, TILE_SIZE,
};
use crate::mercator::{
    lon_lat_to_mercator, mercator_to_lon_lat, ProjectedPoint, HALF_CIRCUMFERENCE,
};
use crate::tiling::tile_containing;
use crate::traits::TileProjection;

/// Shared instance. The projection holds no mutable state.
pub const BAIDU: BaiduProjection = BaiduProjection::new();

/// The Baidu Mercator variant.
///
/// All operations are pure functions of their arguments and the fixed
/// constants in [`crate::constants`], so a single value can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaiduProjection {
    tile_size: TileSize,
}

impl BaiduProjection {
    pub const fn new() -> Self {
        Self {
            tile_size: TileSize::new(TILE_SIZE, TILE_SIZE),
        }
    }

    /// Meters per pixel at `level`: `2^(18 - level)`.
    ///
    /// Defined for any integer; levels above 18 give sub-meter resolution.
    pub fn level_resolution(&self, level: i32) -> f64 {
        2f64.powf(f64::from(BASE_LEVEL) - f64::from(level))
    }

    /// Projected (x, y) of pixel (0, 0). Independent of zoom.
    pub fn projected_origin(&self) -> (f64, f64) {
        let origin = self.origin();
        (origin.x, origin.y)
    }

    /// The square projected extent `[-πR, -πR, πR, πR]`.
    pub fn projected_bounds(&self) -> BoundingBox {
        BoundingBox::new(
            -HALF_CIRCUMFERENCE,
            -HALF_CIRCUMFERENCE,
            HALF_CIRCUMFERENCE,
            HALF_CIRCUMFERENCE,
        )
    }

    fn origin(&self) -> ProjectedPoint {
        let extent = self.level_resolution(1) * TILE_SIZE as f64;
        ProjectedPoint {
            x: -extent,
            y: extent,
        }
    }

    /// Fractional pixel position of (lat, lng) before truncation.
    fn pixel_offsets(&self, lat: f64, lng: f64, zoom: i32) -> (f64, f64) {
        let mut p = lon_lat_to_mercator(lng, lat);
        p.y -= LATITUDE_OFFSET;

        let origin = self.origin();
        let resolution = self.level_resolution(zoom);
        (
            (p.x - origin.x) / resolution,
            (origin.y - p.y) / resolution,
        )
    }

    /// Unclamped geographic position of a pixel.
    fn unclamped_geo(&self, x: i64, y: i64, zoom: i32) -> GeoPoint {
        let resolution = self.level_resolution(zoom);
        let origin = self.origin();

        let mercator_x = x as f64 * resolution + origin.x;
        let mercator_y = origin.y - y as f64 * resolution + LATITUDE_OFFSET;
        mercator_to_lon_lat(mercator_x, mercator_y)
    }

    /// Like [`TileProjection::forward_transform`], but rejects non-finite
    /// input and any pixel value that would not survive the integer cast.
    pub fn try_forward_transform(&self, lat: f64, lng: f64, zoom: i32) -> TileResult<PixelPoint> {
        if !lat.is_finite() {
            return Err(TileError::non_finite("latitude", lat));
        }
        if !lng.is_finite() {
            return Err(TileError::non_finite("longitude", lng));
        }

        let (x, y) = self.pixel_offsets(lat, lng, zoom);
        trace!(lat, lng, zoom, x, y, "forward transform");

        for (what, value) in [("pixel x", x), ("pixel y", y)] {
            // i64::MAX as f64 rounds up to 2^63, which itself does not fit.
            if !value.is_finite() || value.abs() >= i64::MAX as f64 {
                debug!(lat, lng, zoom, what, value, "rejecting forward transform");
                return Err(TileError::non_finite(what, value));
            }
        }

        Ok(PixelPoint::new(x as i64, y as i64))
    }

    /// Like [`TileProjection::inverse_transform`], but fails instead of
    /// returning NaN when the zoom level overflows the resolution.
    pub fn try_inverse_transform(&self, x: i64, y: i64, zoom: i32) -> TileResult<GeoPoint> {
        let geo = self.unclamped_geo(x, y, zoom);
        trace!(x, y, zoom, lat = geo.lat, lng = geo.lng, "inverse transform");

        if !geo.lat.is_finite() {
            debug!(x, y, zoom, "rejecting inverse transform");
            return Err(TileError::non_finite("latitude", geo.lat));
        }
        if !geo.lng.is_finite() {
            debug!(x, y, zoom, "rejecting inverse transform");
            return Err(TileError::non_finite("longitude", geo.lng));
        }

        Ok(clamp_to_bounds(geo))
    }
}

impl Default for BaiduProjection {
    fn default() -> Self {
        Self::new()
    }
}

impl TileProjection for BaiduProjection {
    /// Pixel coordinates are truncated toward zero, not floored.
    ///
    /// Non-finite intermediates follow Rust's float-to-int cast: NaN becomes
    /// 0 and infinities saturate.
    fn forward_transform(&self, lat: f64, lng: f64, zoom: i32) -> PixelPoint {
        let (x, y) = self.pixel_offsets(lat, lng, zoom);
        PixelPoint::new(x as i64, y as i64)
    }

    /// The result is clamped per axis into the latitude/longitude limits.
    fn inverse_transform(&self, x: i64, y: i64, zoom: i32) -> GeoPoint {
        clamp_to_bounds(self.unclamped_geo(x, y, zoom))
    }

    /// Baidu resolution does not depend on latitude.
    fn ground_resolution(&self, zoom: i32, _latitude: f64) -> f64 {
        self.level_resolution(zoom)
    }

    fn tile_matrix_min_xy(&self, zoom: i32) -> TileXY {
        let origin = self.origin();
        let bounds = self.projected_bounds();
        tile_containing(
            origin.x,
            origin.y,
            bounds.left(),
            bounds.top(),
            self.level_resolution(zoom),
            self.tile_size.width,
            self.tile_size.height,
        )
    }

    fn tile_matrix_max_xy(&self, zoom: i32) -> TileXY {
        let origin = self.origin();
        let bounds = self.projected_bounds();
        tile_containing(
            origin.x,
            origin.y,
            bounds.right(),
            bounds.bottom(),
            self.level_resolution(zoom),
            self.tile_size.width,
            self.tile_size.height,
        )
    }

    fn bounds(&self) -> RectLatLng {
        RectLatLng::from_ltrb(MIN_LONGITUDE, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE)
    }

    fn axis(&self) -> f64 {
        EARTH_RADIUS
    }

    fn flattening(&self) -> f64 {
        FLATTENING
    }

    fn tile_size(&self) -> TileSize {
        self.tile_size
    }

    /// Geographic position of the projected origin. Not clamped, and not
    /// shifted by the latitude offset.
    fn tile_origin(&self) -> GeoPoint {
        let origin = self.origin();
        mercator_to_lon_lat(origin.x, origin.y)
    }
}

fn clamp_to_bounds(geo: GeoPoint) -> GeoPoint {
    geo.clamped(
        (MIN_LATITUDE, MAX_LATITUDE),
        (MIN_LONGITUDE, MAX_LONGITUDE),
    )
}
