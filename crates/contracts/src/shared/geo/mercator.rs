//! Web Mercator (EPSG:3857) projection and slippy-map tile layout.
//!
//! World pixel coordinates follow the OSM tile scheme: at zoom `z` the world
//! is a square of `256 * 2^z` pixels with the origin at the north-west corner.

use super::LatLng;
use std::f64::consts::PI;

pub const TILE_SIZE: f64 = 256.0;
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_6;
pub const MIN_ZOOM: u8 = 2;
pub const MAX_ZOOM: u8 = 19;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

impl Pixel {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * 2f64.powi(zoom as i32)
}

/// Geographic position -> world pixel at `zoom`. Latitude is clamped to the
/// projection's valid band.
pub fn project(pos: LatLng, zoom: u8) -> Pixel {
    let size = world_size(zoom);
    let lat = pos.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (pos.lng + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    Pixel::new(x, y)
}

/// World pixel at `zoom` -> geographic position
pub fn unproject(p: Pixel, zoom: u8) -> LatLng {
    let size = world_size(zoom);
    let lng = p.x / size * 360.0 - 180.0;
    let n = PI - 2.0 * PI * p.y / size;
    LatLng::new(n.sinh().atan().to_degrees(), lng)
}

// ============================================================================
// Tiles
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl TileId {
    /// Fill a `{s}/{z}/{x}/{y}` URL template. The subdomain is picked from
    /// `(x + y) % len` so neighbouring tiles spread across hosts.
    pub fn url(&self, template: &str, subdomains: &[String]) -> String {
        let subdomain = if subdomains.is_empty() {
            ""
        } else {
            subdomains[(self.x as usize + self.y as usize) % subdomains.len()].as_str()
        };
        template
            .replace("{s}", subdomain)
            .replace("{z}", &self.z.to_string())
            .replace("{x}", &self.x.to_string())
            .replace("{y}", &self.y.to_string())
    }
}

/// Tile positioned relative to the viewport's top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTile {
    pub id: TileId,
    /// Unwrapped column, unique within one layout even when the world repeats
    pub column: i64,
    pub left: f64,
    pub top: f64,
}

impl PlacedTile {
    pub fn key(&self) -> (u8, i64, u32) {
        (self.id.z, self.column, self.id.y)
    }
}

// ============================================================================
// Viewport
// ============================================================================

/// Visible window onto the map: a center, a zoom level and a size in CSS
/// pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: u8,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(center: LatLng, zoom: u8, width: f64, height: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// World pixel of the viewport's top-left corner
    pub fn origin(&self) -> Pixel {
        let c = project(self.center, self.zoom);
        Pixel::new(c.x - self.width / 2.0, c.y - self.height / 2.0)
    }

    /// Container-relative point (e.g. a click offset) -> geographic position
    pub fn to_lat_lng(&self, x: f64, y: f64) -> LatLng {
        let o = self.origin();
        unproject(Pixel::new(o.x + x, o.y + y), self.zoom).wrapped()
    }

    /// Geographic position -> container-relative point
    pub fn to_container(&self, pos: LatLng) -> Pixel {
        let o = self.origin();
        let p = project(pos, self.zoom);
        Pixel::new(p.x - o.x, p.y - o.y)
    }

    /// Center after dragging the map content by (dx, dy) pixels, starting
    /// from `from`.
    pub fn center_after_drag(&self, from: LatLng, dx: f64, dy: f64) -> LatLng {
        let c = project(from, self.zoom);
        unproject(Pixel::new(c.x - dx, c.y - dy), self.zoom).wrapped()
    }

    /// Top-left corner of a tile relative to the viewport
    pub fn tile_position(&self, column: i64, row: u32) -> Pixel {
        let o = self.origin();
        Pixel::new(column as f64 * TILE_SIZE - o.x, row as f64 * TILE_SIZE - o.y)
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom(self.zoom.saturating_add(1))
    }

    pub fn zoom_out(&mut self) -> bool {
        self.set_zoom(self.zoom.saturating_sub(1))
    }

    fn set_zoom(&mut self, zoom: u8) -> bool {
        let zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        let changed = zoom != self.zoom;
        self.zoom = zoom;
        changed
    }

    /// Tiles covering the viewport, row by row. Rows outside the world are
    /// skipped, columns wrap around the antimeridian.
    pub fn visible_tiles(&self) -> Vec<PlacedTile> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Vec::new();
        }

        let o = self.origin();
        let tiles_per_side = 1i64 << self.zoom;

        let first_col = (o.x / TILE_SIZE).floor() as i64;
        let last_col = ((o.x + self.width - 1.0) / TILE_SIZE).floor() as i64;
        let first_row = ((o.y / TILE_SIZE).floor() as i64).max(0);
        let last_row = (((o.y + self.height - 1.0) / TILE_SIZE).floor() as i64).min(tiles_per_side - 1);

        let mut tiles = Vec::new();
        for row in first_row..=last_row {
            for column in first_col..=last_col {
                let position = self.tile_position(column, row as u32);
                tiles.push(PlacedTile {
                    id: TileId {
                        x: column.rem_euclid(tiles_per_side) as u32,
                        y: row as u32,
                        z: self.zoom,
                    },
                    column,
                    left: position.x,
                    top: position.y,
                });
            }
        }
        tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn test_project_world_center() {
        let p = project(LatLng::ORIGIN, 0);
        assert!((p.x - 128.0).abs() < EPS);
        assert!((p.y - 128.0).abs() < EPS);

        let p = project(LatLng::ORIGIN, 1);
        assert!((p.x - 256.0).abs() < EPS);
        assert!((p.y - 256.0).abs() < EPS);
    }

    #[test]
    fn test_project_clamps_latitude() {
        let north = project(LatLng::new(90.0, 0.0), 3);
        assert!(north.y.abs() < 1e-3);
    }

    #[test]
    fn test_click_round_trip() {
        let viewport = Viewport::new(LatLng::new(-25.4430381, -54.4013914), 15, 600.0, 350.0);

        for &(x, y) in &[(0.0, 0.0), (300.0, 175.0), (599.0, 12.5), (42.25, 349.0)] {
            let pos = viewport.to_lat_lng(x, y);
            let back = viewport.to_container(pos);
            assert!((back.x - x).abs() < EPS, "x: {} vs {}", back.x, x);
            assert!((back.y - y).abs() < EPS, "y: {} vs {}", back.y, y);
        }
    }

    #[test]
    fn test_center_maps_to_middle_of_container() {
        let center = LatLng::new(-23.55, -46.63);
        let viewport = Viewport::new(center, 12, 400.0, 300.0);
        let p = viewport.to_container(center);
        assert!((p.x - 200.0).abs() < EPS);
        assert!((p.y - 150.0).abs() < EPS);
    }

    #[test]
    fn test_drag_moves_center_opposite_to_content() {
        let center = LatLng::new(-25.0, -54.0);
        let viewport = Viewport::new(center, 10, 400.0, 300.0);

        // content dragged right -> we now look further west
        let moved = viewport.center_after_drag(center, 100.0, 0.0);
        assert!(moved.lng < center.lng);
        assert!((moved.lat - center.lat).abs() < EPS);
    }

    #[test]
    fn test_visible_tiles_layout() {
        let viewport = Viewport::new(LatLng::ORIGIN, 2, 512.0, 256.0);
        let tiles = viewport.visible_tiles();

        assert_eq!(tiles.len(), 4);
        assert_eq!(tiles[0].id, TileId { x: 1, y: 1, z: 2 });
        assert!((tiles[0].left - 0.0).abs() < EPS);
        assert!((tiles[0].top + 128.0).abs() < EPS);
        assert_eq!(tiles[3].id, TileId { x: 2, y: 2, z: 2 });
    }

    #[test]
    fn test_visible_tiles_wrap_columns_and_skip_rows() {
        let viewport = Viewport::new(LatLng::new(MAX_LATITUDE, 180.0), 2, 256.0, 256.0);
        let tiles = viewport.visible_tiles();

        assert!(tiles.iter().all(|t| t.id.y == 0));
        assert!(tiles.iter().all(|t| t.id.x < 4));
        assert!(tiles.iter().any(|t| t.column >= 4));
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut viewport = Viewport::new(LatLng::ORIGIN, MAX_ZOOM, 100.0, 100.0);
        assert!(!viewport.zoom_in());
        assert!(viewport.zoom_out());
        assert_eq!(viewport.zoom, MAX_ZOOM - 1);

        let viewport = Viewport::new(LatLng::ORIGIN, 0, 100.0, 100.0);
        assert_eq!(viewport.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_tile_url() {
        let subdomains = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let tile = TileId { x: 3, y: 5, z: 4 };

        assert_eq!(
            tile.url("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png", &subdomains),
            "https://c.tile.openstreetmap.org/4/3/5.png"
        );
        assert_eq!(
            tile.url("https://tiles.example/{z}/{x}/{y}.png", &[]),
            "https://tiles.example/4/3/5.png"
        );
    }
}
