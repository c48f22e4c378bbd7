//! Bounding box types and operations.

use serde::{Deserialize, Serialize};

use crate::error::{parse_components, TileResult};
use crate::point::GeoPoint;

/// A projected bounding box in linear units (meters on the reference sphere).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Parse a `"minx,miny,maxx,maxy"` string.
    pub fn from_string(s: &str) -> TileResult<Self> {
        let [min_x, min_y, max_x, max_y] =
            parse_components::<f64, 4>(s, "minx,miny,maxx,maxy")?;
        Ok(Self::new(min_x, min_y, max_x, max_y))
    }

    pub fn left(&self) -> f64 {
        self.min_x
    }

    pub fn bottom(&self) -> f64 {
        self.min_y
    }

    pub fn right(&self) -> f64 {
        self.max_x
    }

    pub fn top(&self) -> f64 {
        self.max_y
    }

    /// Width of the bounding box in coordinate units.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bounding box in coordinate units.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Check if a point is contained within this bbox.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

/// A geographic rectangle in degrees, stored as left/top/right/bottom.
///
/// `left`/`right` are longitudes, `top`/`bottom` latitudes, with `top` the
/// northern edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectLatLng {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl RectLatLng {
    /// Build a rectangle from its left, top, right and bottom edges.
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Parse a `"left,top,right,bottom"` string.
    pub fn from_string(s: &str) -> TileResult<Self> {
        let [left, top, right, bottom] =
            parse_components::<f64, 4>(s, "left,top,right,bottom")?;
        Ok(Self::from_ltrb(left, top, right, bottom))
    }

    pub fn top_left(&self) -> GeoPoint {
        GeoPoint::new(self.top, self.left)
    }

    pub fn bottom_right(&self) -> GeoPoint {
        GeoPoint::new(self.bottom, self.right)
    }

    /// Whether all four edges are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.top_left().is_finite() && self.bottom_right().is_finite()
    }

    /// Longitude span in degrees.
    pub fn width_lng(&self) -> f64 {
        self.right - self.left
    }

    /// Latitude span in degrees.
    pub fn height_lat(&self) -> f64 {
        self.top - self.bottom
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.lng >= self.left
            && point.lng <= self.right
            && point.lat >= self.bottom
            && point.lat <= self.top
    }
}
