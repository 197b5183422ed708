//! Web Mercator viewport, 256 px tiles, container-pixel output.

use crate::config::MapConfig;
use crate::geometry::GeoPoint;
use crate::labels::{PixelPoint, Projector};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

const TILE_SIZE: f64 = 256.0;
const MAX_LATITUDE: f64 = 85.051_128_779_8;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: GeoPoint,
    pub zoom: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(center: GeoPoint, zoom: f64, width: f64, height: f64) -> Self {
        Self {
            center,
            zoom,
            width,
            height,
        }
    }

    /// Viewport restricted to the map's zoom range and maximum bounds.
    pub fn clamped(center: GeoPoint, zoom: f64, width: f64, height: f64, map: &MapConfig) -> Self {
        let zoom = zoom.clamp(map.min_zoom.min(map.max_zoom), map.max_zoom.max(map.min_zoom));
        let [south_west, north_east] = map.max_bounds;
        let center = GeoPoint::new(
            center.lat.clamp(south_west.lat.min(north_east.lat), north_east.lat.max(south_west.lat)),
            center.lng.clamp(south_west.lng.min(north_east.lng), north_east.lng.max(south_west.lng)),
        );
        Self::new(center, zoom, width.max(1.0), height.max(1.0))
    }

    /// The configured initial view of the map.
    pub fn from_map_config(map: &MapConfig, width: f64, height: f64) -> Self {
        Self::clamped(map.center, map.zoom, width, height, map)
    }

    fn scale(&self) -> f64 {
        TILE_SIZE * self.zoom.exp2()
    }

    /// Absolute pixel position on the world map at this zoom.
    pub fn world_pixel(&self, point: GeoPoint) -> PixelPoint {
        let scale = self.scale();
        let lat = point.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let x = scale * (point.lng / 360.0 + 0.5);
        let y = scale * (0.5 - (PI / 4.0 + lat / 2.0).tan().ln() / (2.0 * PI));
        PixelPoint::new(x, y)
    }

    /// World pixel of the container's top-left corner, rounded to whole pixels.
    fn pixel_origin(&self) -> PixelPoint {
        let center = self.world_pixel(self.center);
        PixelPoint::new(
            (center.x - self.width / 2.0).round(),
            (center.y - self.height / 2.0).round(),
        )
    }

    pub fn contains(&self, pixel: PixelPoint) -> bool {
        (0.0..=self.width).contains(&pixel.x) && (0.0..=self.height).contains(&pixel.y)
    }
}

impl Projector for Viewport {
    fn project(&self, point: GeoPoint) -> PixelPoint {
        let world = self.world_pixel(point);
        let origin = self.pixel_origin();
        PixelPoint::new(world.x - origin.x, world.y - origin.y)
    }
}
