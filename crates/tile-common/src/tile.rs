//! Tile index types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A tile column/row pair within a tile matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TileXY {
    /// Column (x)
    pub col: i64,
    /// Row (y)
    pub row: i64,
}

impl TileXY {
    pub const fn new(col: i64, row: i64) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for TileXY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.col, self.row)
    }
}

/// A tile coordinate (z/x/y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    /// Zoom level
    pub z: i32,
    /// Column (x)
    pub x: i64,
    /// Row (y)
    pub y: i64,
}

impl TileCoord {
    pub const fn new(z: i32, x: i64, y: i64) -> Self {
        Self { z, x, y }
    }

    pub fn from_xy(z: i32, tile: TileXY) -> Self {
        Self {
            z,
            x: tile.col,
            y: tile.row,
        }
    }

    /// Generate a cache key string.
    pub fn cache_key(&self) -> String {
        format!("{}/{}/{}", self.z, self.x, self.y)
    }

    /// Get the parent tile (zoom - 1).
    ///
    /// Uses floored division so negative indices map to the tile that
    /// actually contains them.
    pub fn parent(&self) -> Option<TileCoord> {
        if self.z <= 0 {
            return None;
        }
        Some(TileCoord {
            z: self.z - 1,
            x: self.x.div_euclid(2),
            y: self.y.div_euclid(2),
        })
    }

    /// Get the four children tiles (zoom + 1).
    pub fn children(&self) -> [TileCoord; 4] {
        let x = self.x * 2;
        let y = self.y * 2;
        let z = self.z + 1;
        [
            TileCoord { z, x, y },
            TileCoord { z, x: x + 1, y },
            TileCoord { z, x, y: y + 1 },
            TileCoord {
                z,
                x: x + 1,
                y: y + 1,
            },
        ]
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cache_key())
    }
}
