//! Planar geometry over `(lat, lng)` polygons.
//!
//! Coordinates are treated as plain numbers: no geodesic correction is applied,
//! which is accurate enough for placing labels on a single map view.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A geographic point. Serialises as `[lat, lng]`, the pair layout of the
/// border dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn offset(self, d_lat: f64, d_lng: f64) -> Self {
        Self::new(self.lat + d_lat, self.lng + d_lng)
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(point: GeoPoint) -> Self {
        [point.lat, point.lng]
    }
}

/// A simple polygon with at least three vertices. The ring is implicitly
/// closed: the last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<GeoPoint>,
}

impl Polygon {
    pub fn new(vertices: Vec<GeoPoint>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(Error::InvalidGeometry {
                vertices: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    pub fn from_pairs(pairs: &[[f64; 2]]) -> Result<Self> {
        Self::new(pairs.iter().copied().map(GeoPoint::from).collect())
    }

    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// `(south_west, north_east)` corners.
    pub fn bounding_box(&self) -> (GeoPoint, GeoPoint) {
        let mut min = self.vertices[0];
        let mut max = self.vertices[0];
        for v in &self.vertices[1..] {
            min.lat = min.lat.min(v.lat);
            min.lng = min.lng.min(v.lng);
            max.lat = max.lat.max(v.lat);
            max.lng = max.lng.max(v.lng);
        }
        (min, max)
    }
}

/// Area-weighted centroid of the polygon.
///
/// Edges are accumulated with `x = lng` and `y = lat`; the area term is scaled
/// by 3 so that it carries the same factor as the weighted sums. A polygon
/// whose scaled area is exactly zero (collinear or repeated vertices) falls
/// back to the plain vertex mean.
pub fn compute_centroid(polygon: &Polygon) -> GeoPoint {
    let vertices = polygon.vertices();
    let n = vertices.len();
    let mut area = 0.0;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;

    for i in 0..n {
        let j = (i + 1) % n;
        let (xi, yi) = (vertices[i].lng, vertices[i].lat);
        let (xj, yj) = (vertices[j].lng, vertices[j].lat);
        let cross = xi * yj - xj * yi;
        area += cross;
        sum_x += (xi + xj) * cross;
        sum_y += (yi + yj) * cross;
    }

    area *= 3.0;
    if area == 0.0 {
        return vertex_mean(vertices);
    }
    GeoPoint::new(sum_y / area, sum_x / area)
}

fn vertex_mean(vertices: &[GeoPoint]) -> GeoPoint {
    let n = vertices.len() as f64;
    let lat = vertices.iter().map(|v| v.lat).sum::<f64>() / n;
    let lng = vertices.iter().map(|v| v.lng).sum::<f64>() / n;
    GeoPoint::new(lat, lng)
}

/// Crossing-number containment test. The ray runs along the latitude axis;
/// points exactly on an edge get whatever the crossing expression yields.
pub fn is_point_in_polygon(point: GeoPoint, polygon: &Polygon) -> bool {
    let vertices = polygon.vertices();
    let (x, y) = (point.lat, point.lng);
    let mut inside = false;
    let mut j = vertices.len() - 1;

    for i in 0..vertices.len() {
        let (xi, yi) = (vertices[i].lat, vertices[i].lng);
        let (xj, yj) = (vertices[j].lat, vertices[j].lng);
        let crosses = (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi;
        if crosses {
            inside = !inside;
        }
        j = i;
    }

    inside
}
