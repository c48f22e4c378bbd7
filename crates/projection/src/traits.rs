//! The contract a tile layer expects from a projection.

use tile_common::{GeoPoint, PixelPoint, RectLatLng, TileError, TileResult, TileSize, TileXY};

/// A projection between geographic coordinates and tile pixels.
///
/// Implementors supply the raw transforms and grid extents; the tile helpers
/// built on top of them (pixel/tile conversion, matrix sizes, area listing)
/// come for free.
pub trait TileProjection: Send + Sync {
    /// Geographic (lat, lng) in degrees to pixel coordinates at `zoom`.
    fn forward_transform(&self, lat: f64, lng: f64, zoom: i32) -> PixelPoint;

    /// Pixel coordinates at `zoom` back to a geographic point.
    fn inverse_transform(&self, x: i64, y: i64, zoom: i32) -> GeoPoint;

    /// Meters per pixel at `zoom` around `latitude`.
    fn ground_resolution(&self, zoom: i32, latitude: f64) -> f64;

    /// Tile containing the top-left corner of the projected extent.
    fn tile_matrix_min_xy(&self, zoom: i32) -> TileXY;

    /// Tile containing the bottom-right corner of the projected extent.
    fn tile_matrix_max_xy(&self, zoom: i32) -> TileXY;

    fn bounds(&self) -> RectLatLng;

    fn axis(&self) -> f64;

    fn flattening(&self) -> f64;

    fn tile_size(&self) -> TileSize;

    fn tile_origin(&self) -> GeoPoint;

    /// Tile index holding a pixel. Uses truncating integer division.
    fn from_pixel_to_tile_xy(&self, pixel: PixelPoint) -> TileXY {
        let size = self.tile_size();
        TileXY::new(pixel.x / size.width, pixel.y / size.height)
    }

    /// Top-left pixel of a tile.
    fn from_tile_xy_to_pixel(&self, tile: TileXY) -> PixelPoint {
        let size = self.tile_size();
        PixelPoint::new(tile.col * size.width, tile.row * size.height)
    }

    fn from_lat_lng_to_tile_xy(&self, lat: f64, lng: f64, zoom: i32) -> TileXY {
        self.from_pixel_to_tile_xy(self.forward_transform(lat, lng, zoom))
    }

    /// Number of tile columns and rows in the matrix at `zoom`.
    ///
    /// Saturates at `i64::MAX` once the matrix outgrows the integer range.
    fn tile_matrix_size_xy(&self, zoom: i32) -> TileXY {
        let min = self.tile_matrix_min_xy(zoom);
        let max = self.tile_matrix_max_xy(zoom);
        TileXY::new(
            max.col.saturating_sub(min.col).saturating_add(1),
            max.row.saturating_sub(min.row).saturating_add(1),
        )
    }

    /// Total tiles in the matrix at `zoom`, saturating at `i64::MAX`.
    fn tile_matrix_item_count(&self, zoom: i32) -> i64 {
        let size = self.tile_matrix_size_xy(zoom);
        size.col.saturating_mul(size.row)
    }

    /// Matrix extent in pixels at `zoom`, saturating at `i64::MAX`.
    fn tile_matrix_size_pixel(&self, zoom: i32) -> PixelPoint {
        let size = self.tile_matrix_size_xy(zoom);
        let tile = self.tile_size();
        PixelPoint::new(
            size.col.saturating_mul(tile.width),
            size.row.saturating_mul(tile.height),
        )
    }

    /// First and last tile of the padded block covering `rect` at `zoom`.
    ///
    /// Padding saturates at the ends of the `i64` range. A negative padding
    /// shrinks the block and may leave `min` past `max`, meaning no tiles.
    fn area_tile_range(&self, rect: &RectLatLng, zoom: i32, padding: i64) -> (TileXY, TileXY) {
        let top_left = self.from_lat_lng_to_tile_xy(rect.top, rect.left, zoom);
        let bottom_right = self.from_lat_lng_to_tile_xy(rect.bottom, rect.right, zoom);

        let (col_min, col_max) = min_max(top_left.col, bottom_right.col);
        let (row_min, row_max) = min_max(top_left.row, bottom_right.row);

        (
            TileXY::new(col_min.saturating_sub(padding), row_min.saturating_sub(padding)),
            TileXY::new(col_max.saturating_add(padding), row_max.saturating_add(padding)),
        )
    }

    /// Number of tiles `area_tile_list` would return, saturating at `i64::MAX`.
    fn area_tile_count(&self, rect: &RectLatLng, zoom: i32, padding: i64) -> i64 {
        let (min, max) = self.area_tile_range(rect, zoom, padding);
        let cols = (i128::from(max.col) - i128::from(min.col) + 1).max(0);
        let rows = (i128::from(max.row) - i128::from(min.row) + 1).max(0);
        i64::try_from(cols.saturating_mul(rows)).unwrap_or(i64::MAX)
    }

    /// Every tile intersecting `rect` at `zoom`, grown by `padding` tiles on
    /// each side. Row-major, starting at the top-left tile.
    ///
    /// The list is not bounded: a rectangle reaching a pole, or a huge
    /// padding, covers more tiles than fit in memory. Use
    /// [`try_area_tile_list`](Self::try_area_tile_list) for untrusted input.
    fn area_tile_list(&self, rect: &RectLatLng, zoom: i32, padding: i64) -> Vec<TileXY> {
        let (min, max) = self.area_tile_range(rect, zoom, padding);

        let mut tiles = Vec::new();
        for row in min.row..=max.row {
            for col in min.col..=max.col {
                tiles.push(TileXY::new(col, row));
            }
        }
        tiles
    }

    /// [`area_tile_list`](Self::area_tile_list) for untrusted input.
    ///
    /// Fails on a rectangle with a non-finite edge, and when the padded block
    /// holds more than `max_tiles` tiles. Nothing is allocated in either case.
    fn try_area_tile_list(
        &self,
        rect: &RectLatLng,
        zoom: i32,
        padding: i64,
        max_tiles: usize,
    ) -> TileResult<Vec<TileXY>> {
        if !rect.is_finite() {
            return Err(TileError::invalid_parameter(
                "rect",
                format!(
                    "edges must be finite, got {},{},{},{}",
                    rect.left, rect.top, rect.right, rect.bottom
                ),
            ));
        }

        let count = self.area_tile_count(rect, zoom, padding);
        if usize::try_from(count).map_or(true, |count| count > max_tiles) {
            let message = if count == i64::MAX {
                format!("covers too many tiles at zoom {} (limit {})", zoom, max_tiles)
            } else {
                format!("covers {} tiles at zoom {} (limit {})", count, zoom, max_tiles)
            };
            return Err(TileError::invalid_parameter("rect", message));
        }

        Ok(self.area_tile_list(rect, zoom, padding))
    }

    /// Great-circle distance in kilometers on a sphere of radius `axis()`.
    fn distance_km(&self, p1: GeoPoint, p2: GeoPoint) -> f64 {
        let lat1 = p1.lat.to_radians();
        let lat2 = p2.lat.to_radians();
        let d_lat = lat2 - lat1;
        let d_lng = (p2.lng - p1.lng).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        self.axis() / 1000.0 * c
    }

    fn forward_batch(&self, points: &[GeoPoint], zoom: i32) -> Vec<PixelPoint> {
        points
            .iter()
            .map(|p| self.forward_transform(p.lat, p.lng, zoom))
            .collect()
    }

    fn inverse_batch(&self, pixels: &[PixelPoint], zoom: i32) -> Vec<GeoPoint> {
        pixels
            .iter()
            .map(|p| self.inverse_transform(p.x, p.y, zoom))
            .collect()
    }
}

fn min_max(a: i64, b: i64) -> (i64, i64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
