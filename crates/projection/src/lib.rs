//! Baidu map tile projection.
//!
//! Converts between geographic coordinates and Baidu's tile pixel grid, a
//! spherical Mercator variant with a shifted origin and a fixed latitude
//! calibration offset.

pub mod baidu;
pub mod constants;
mod mercator;
pub mod tiling;
pub mod traits;

pub use baidu::{BaiduProjection, BAIDU};
pub use tiling::tile_containing;
pub use traits::TileProjection;

pub use tile_common::{
    GeoPoint, PixelPoint, RectLatLng, TileCoord, TileError, TileResult, TileSize, TileXY,
};
