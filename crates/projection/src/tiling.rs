//! Tile-grid lookup in projected space.

use tile_common::TileXY;

/// Find the tile that contains projected point `(x, y)`.
///
/// Columns grow east of `origin_x`, rows grow south of `origin_y`. Indices
/// are floored so points west or north of the origin land in negative tiles
/// rather than collapsing onto tile 0.
pub fn tile_containing(
    origin_x: f64,
    origin_y: f64,
    x: f64,
    y: f64,
    resolution: f64,
    tile_width: i64,
    tile_height: i64,
) -> TileXY {
    let col = (x - origin_x) / (tile_width as f64 * resolution);
    let row = (origin_y - y) / (tile_height as f64 * resolution);
    TileXY::new(col.floor() as i64, row.floor() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_tile_zero() {
        assert_eq!(tile_containing(0.0, 0.0, 0.0, 0.0, 1.0, 256, 256), TileXY::new(0, 0));
    }

    #[test]
    fn test_rows_grow_downwards() {
        let tile = tile_containing(0.0, 0.0, 300.0, -600.0, 1.0, 256, 256);
        assert_eq!(tile, TileXY::new(1, 2));
    }

    #[test]
    fn test_floors_negative_offsets() {
        // Truncation would give (0, 0) here.
        let tile = tile_containing(0.0, 0.0, -1.0, 1.0, 1.0, 256, 256);
        assert_eq!(tile, TileXY::new(-1, -1));
    }

    #[test]
    fn test_resolution_scales_tile_span() {
        let tile = tile_containing(0.0, 0.0, 1024.0, 0.0, 2.0, 256, 256);
        assert_eq!(tile, TileXY::new(2, 0));
    }
}
