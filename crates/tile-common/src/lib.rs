//! Common types shared by the tile projection crates.

pub mod bbox;
pub mod error;
pub mod point;
pub mod tile;

pub use bbox::{BoundingBox, RectLatLng};
pub use error::{TileError, TileResult};
pub use point::{GeoPoint, PixelPoint, TileSize};
pub use tile::{TileCoord, TileXY};
