//! Common test fixtures for projection tests.
//!
//! Pixel references were computed by hand from the Baidu formulas:
//! Mercator on a 6378137 m sphere, Y shifted by -20000 m, origin at
//! `(-2^25, 2^25)` meters, resolution `2^(18 - zoom)`, truncated.

use tile_common::{GeoPoint, PixelPoint};

/// A named location with its expected pixel coordinates at a few zooms.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceLocation {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    /// (zoom, x, y)
    pub pixels: [(i32, i64, i64); 3],
}

impl ReferenceLocation {
    pub fn geo(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }

    /// Expected pixel at `zoom`, if this fixture has one.
    pub fn pixel_at(&self, zoom: i32) -> Option<PixelPoint> {
        self.pixels
            .iter()
            .find(|(z, _, _)| *z == zoom)
            .map(|&(_, x, y)| PixelPoint::new(x, y))
    }
}

pub const BEIJING: ReferenceLocation = ReferenceLocation {
    name: "beijing",
    lat: 39.915,
    lng: 116.404,
    pixels: [(18, 46512466, 28720834), (12, 726757, 448763), (3, 1419, 876)],
};

pub const SHANGHAI: ReferenceLocation = ReferenceLocation {
    name: "shanghai",
    lat: 31.2304,
    lng: 121.4737,
    pixels: [(18, 47076822, 29911724), (12, 735575, 467370), (3, 1436, 912)],
};

pub const SHENZHEN: ReferenceLocation = ReferenceLocation {
    name: "shenzhen",
    lat: 22.5431,
    lng: 114.0579,
    pixels: [(18, 46251299, 30997574), (12, 722676, 484337), (3, 1411, 945)],
};

pub const SYDNEY: ReferenceLocation = ReferenceLocation {
    name: "sydney",
    lat: -33.8688,
    lng: 151.2093,
    pixels: [(18, 50386974, 37585630), (12, 787296, 587275), (3, 1537, 1147)],
};

pub const NEW_YORK: ReferenceLocation = ReferenceLocation {
    name: "new_york",
    lat: 40.7128,
    lng: -74.006,
    pixels: [(18, 25316121, 28604360), (12, 395564, 446943), (3, 772, 872)],
};

/// All reference locations.
pub const REFERENCE_LOCATIONS: [ReferenceLocation; 5] =
    [BEIJING, SHANGHAI, SHENZHEN, SYDNEY, NEW_YORK];

/// Common geographic rectangles as (left, top, right, bottom).
pub mod rect {
    /// The full projection bounds.
    pub const WORLD: (f64, f64, f64, f64) = (-180.0, 85.05112878, 180.0, -85.05112878);

    /// Central Beijing, a few kilometers across.
    pub const BEIJING_CENTER: (f64, f64, f64, f64) = (116.35, 39.95, 116.45, 39.88);

    /// Degenerate rectangle around a single point.
    pub const POINT: (f64, f64, f64, f64) = (116.404, 39.915, 116.404, 39.915);
}
