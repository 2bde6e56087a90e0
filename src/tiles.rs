//! Web Mercator math for the raster tile layer.
//!
//! World pixel space at zoom `z` is a square of `TILE_SIZE * 2^z` pixels with
//! the origin at the north-west corner (lon -180, lat ~85.05).

use std::f64::consts::PI;

use crate::config::TileSource;
use crate::model::{Coordinate, MERCATOR_MAX_LAT};

pub const TILE_SIZE: f64 = 256.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

/// One tile to draw: its address and where its top-left corner lands on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TilePlacement {
    pub z: u8,
    /// Unwrapped column; differs from `x` on copies of the world.
    pub col: i64,
    /// Column wrapped into `[0, 2^z)`.
    pub x: u32,
    pub y: u32,
    pub left: f64,
    pub top: f64,
}

pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * f64::from(1u32 << zoom.min(30))
}

pub fn project(coord: Coordinate, zoom: u8) -> WorldPoint {
    let size = world_size(zoom);
    let lat = coord.lat().clamp(-MERCATOR_MAX_LAT, MERCATOR_MAX_LAT).to_radians();
    let x = (coord.lon() + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    WorldPoint { x, y }
}

/// Tiles covering a `width` x `height` viewport centred on `center` (world px).
pub fn visible_tiles(center: WorldPoint, zoom: u8, width: f64, height: f64) -> Vec<TilePlacement> {
    let tiles_per_side = 1i64 << zoom.min(30);
    let origin_x = center.x - width / 2.0;
    let origin_y = center.y - height / 2.0;
    let first_col = (origin_x / TILE_SIZE).floor() as i64;
    let last_col = ((origin_x + width) / TILE_SIZE).floor() as i64;
    let first_row = ((origin_y / TILE_SIZE).floor() as i64).max(0);
    let last_row = ((origin_y + height) / TILE_SIZE)
        .floor()
        .min((tiles_per_side - 1) as f64) as i64;

    let mut out = Vec::new();
    for row in first_row..=last_row {
        for col in first_col..=last_col {
            out.push(TilePlacement {
                z: zoom,
                col,
                x: col.rem_euclid(tiles_per_side) as u32,
                y: row as u32,
                left: col as f64 * TILE_SIZE - origin_x,
                top: row as f64 * TILE_SIZE - origin_y,
            });
        }
    }
    out
}

impl TileSource {
    /// Expand `{s}`, `{z}`, `{x}`, `{y}` and `{r}` in the url template.
    pub fn url(&self, tile: &TilePlacement, retina: bool) -> String {
        let subdomain = if self.subdomains.is_empty() {
            ""
        } else {
            let i = (tile.x as usize + tile.y as usize) % self.subdomains.len();
            self.subdomains[i].as_str()
        };
        self.url_template
            .replace("{s}", subdomain)
            .replace("{z}", &tile.z.to_string())
            .replace("{x}", &tile.x.to_string())
            .replace("{y}", &tile.y.to_string())
            .replace("{r}", if retina { "@2x" } else { "" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn unproject(p: WorldPoint, zoom: u8) -> Coordinate {
        let size = world_size(zoom);
        let lon = p.x / size * 360.0 - 180.0;
        let n = PI * (1.0 - 2.0 * p.y / size);
        let lat = n.sinh().atan().to_degrees();
        Coordinate::clamped(lat, lon)
    }

    #[test]
    fn null_island_is_world_center() {
        let p = project(Coordinate::new(0.0, 0.0).unwrap(), 1);
        assert!(close(p.x, 256.0) && close(p.y, 256.0));
    }

    #[test]
    fn poles_clamp_to_world_edges() {
        let n = project(Coordinate::new(90.0, -180.0).unwrap(), 0);
        let s = project(Coordinate::new(-90.0, 180.0).unwrap(), 0);
        assert!(close(n.x, 0.0) && n.y.abs() < 1e-3);
        assert!(close(s.x, 256.0) && (s.y - 256.0).abs() < 1e-3);
    }

    #[test]
    fn project_is_invertible() {
        let verona = Coordinate::new(45.4384, 10.9916).unwrap();
        let back = unproject(project(verona, 13), 13);
        assert!(close(back.lat(), verona.lat()));
        assert!(close(back.lon(), verona.lon()));
    }

    #[test]
    fn verona_tile_at_zoom_13() {
        let p = project(Coordinate::new(45.4384, 10.9916).unwrap(), 13);
        assert_eq!(((p.x / TILE_SIZE) as u32, (p.y / TILE_SIZE) as u32), (4346, 2932));
    }

    #[test]
    fn tiles_cover_viewport() {
        let center = WorldPoint { x: 1000.0, y: 1000.0 };
        let tiles = visible_tiles(center, 4, 512.0, 256.0);
        // origin (744, 872): columns 2..=4, rows 3..=4
        assert_eq!(tiles.len(), 6);
        let first = tiles[0];
        assert_eq!((first.x, first.y), (2, 3));
        assert!(close(first.left, 512.0 - 744.0));
        assert!(close(first.top, 768.0 - 872.0));
    }

    #[test]
    fn columns_wrap_rows_do_not() {
        let tiles = visible_tiles(WorldPoint { x: 0.0, y: 128.0 }, 1, 256.0, 200.0);
        let cols: Vec<(i64, u32)> = tiles.iter().map(|t| (t.col, t.x)).collect();
        assert_eq!(cols, vec![(-1, 1), (0, 0)]);
        assert!(tiles.iter().all(|t| t.y == 0));
    }

    #[test]
    fn expands_url_template() {
        let src = TileSource::default();
        let tile = TilePlacement { z: 13, col: 4346, x: 4346, y: 2932, left: 0.0, top: 0.0 };
        assert_eq!(
            src.url(&tile, false),
            "https://c.basemaps.cartocdn.com/light_all/13/4346/2932.png"
        );
        let tile = TilePlacement { col: 4347, x: 4347, ..tile };
        assert_eq!(
            src.url(&tile, true),
            "https://d.basemaps.cartocdn.com/light_all/13/4347/2932@2x.png"
        );
    }
}
