use std::f64::consts::PI;

use crate::position::Position;

/// Edge length of one slippy-map tile in pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Highest zoom level most public tile servers serve.
pub const MAX_ZOOM: u8 = 19;

/// Latitude at which Web Mercator squares the world.
pub const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_78;

/// Width (and height) of the whole world in pixels at `zoom`.
pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * f64::from(1u32 << zoom.min(MAX_ZOOM))
}

/// Project a position to world pixel coordinates at `zoom`.
///
/// `x` grows eastward from the antimeridian, `y` grows southward from the
/// top edge. Latitudes beyond the Mercator limit are clamped.
pub fn project(position: &Position, zoom: u8) -> (f64, f64) {
    let size = world_size(zoom);
    let lat = position
        .latitude()
        .clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE)
        .to_radians();
    let x = (position.longitude() + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    (x, y)
}

/// Longitude in `[-180, 180)` of world pixel column `x`, wrapping around.
pub fn longitude_at(x: f64, zoom: u8) -> f64 {
    let size = world_size(zoom);
    x.rem_euclid(size) / size * 360.0 - 180.0
}

/// Latitude of world pixel row `y`. Rows outside the world clamp to the poles.
pub fn latitude_at(y: f64, zoom: u8) -> f64 {
    let size = world_size(zoom);
    let n = PI * (1.0 - 2.0 * y.clamp(0.0, size) / size);
    n.sinh().atan().to_degrees()
}

/// A slippy-map tile address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCoord {
    pub z: u8,
    pub x: u32,
    pub y: u32,
}

impl TileCoord {
    /// The tile that contains `position` at `zoom`.
    pub fn containing(position: &Position, zoom: u8) -> Self {
        let zoom = zoom.min(MAX_ZOOM);
        let n = 1i64 << zoom;
        let (px, py) = project(position, zoom);
        let x_raw = (px / TILE_SIZE).floor() as i64;
        let y_raw = (py / TILE_SIZE).floor() as i64;

        Self {
            z: zoom,
            x: x_raw.rem_euclid(n) as u32,
            y: y_raw.clamp(0, n - 1) as u32,
        }
    }
}

/// Expand a `{s}/{z}/{x}/{y}` tile URL template.
pub fn tile_url(template: &str, tile: &TileCoord) -> String {
    template
        .replace("{s}", "a")
        .replace("{z}", &tile.z.to_string())
        .replace("{x}", &tile.x.to_string())
        .replace("{y}", &tile.y.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(lat: f64, lon: f64) -> Position {
        Position::new(lat, lon).unwrap()
    }

    #[test]
    fn test_origin_projects_to_world_center() {
        let (x, y) = project(&Position::default(), 3);
        assert_eq!(x, 1024.0);
        assert!((y - 1024.0).abs() < 1e-9);
    }

    #[test]
    fn test_unproject_inverts_project() {
        let p = pos(51.5, -0.12);
        let (x, y) = project(&p, 5);
        assert!((longitude_at(x, 5) - p.longitude()).abs() < 1e-9);
        assert!((latitude_at(y, 5) - p.latitude()).abs() < 1e-9);
    }

    #[test]
    fn test_longitude_wraps() {
        let size = world_size(2);
        assert!((longitude_at(size + 10.0, 2) - longitude_at(10.0, 2)).abs() < 1e-9);
        assert!((longitude_at(-10.0, 2) - longitude_at(size - 10.0, 2)).abs() < 1e-9);
    }

    #[test]
    fn test_poles_are_clamped() {
        let (_, y_north) = project(&pos(90.0, 0.0), 1);
        let (_, y_south) = project(&pos(-90.0, 0.0), 1);
        assert!(y_north.abs() < 1e-6);
        assert!((y_south - world_size(1)).abs() < 1e-6);
    }

    #[test]
    fn test_tile_containing_origin() {
        assert_eq!(
            TileCoord::containing(&Position::default(), 3),
            TileCoord { z: 3, x: 4, y: 4 }
        );
        assert_eq!(
            TileCoord::containing(&Position::default(), 0),
            TileCoord { z: 0, x: 0, y: 0 }
        );
    }

    #[test]
    fn test_tile_containing_extremes_stay_in_grid() {
        let tile = TileCoord::containing(&pos(-90.0, 180.0), 4);
        assert_eq!(tile.x, 0); // 180° wraps onto the first column
        assert_eq!(tile.y, 15);
    }

    #[test]
    fn test_tile_url_expansion() {
        let tile = TileCoord { z: 3, x: 2, y: 3 };
        assert_eq!(
            tile_url("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png", &tile),
            "https://a.tile.openstreetmap.org/3/2/3.png"
        );
    }
}
