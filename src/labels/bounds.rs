use crate::geometry::GeoPoint;
use serde::{Deserialize, Serialize};

/// A point in screen pixels (container coordinates, y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Maps geographic points to screen pixels for the current view.
///
/// Implementations reflect whatever viewport they were built for; callers
/// must not cache results across view changes.
pub trait Projector {
    fn project(&self, point: GeoPoint) -> PixelPoint;
}

impl<F> Projector for F
where
    F: Fn(GeoPoint) -> PixelPoint,
{
    fn project(&self, point: GeoPoint) -> PixelPoint {
        self(point)
    }
}

/// Axis-aligned label footprint in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl LabelBounds {
    /// Builds bounds from two corners in any order.
    pub fn from_corners(a: PixelPoint, b: PixelPoint) -> Self {
        Self {
            min_x: a.x.min(b.x),
            max_x: a.x.max(b.x),
            min_y: a.y.min(b.y),
            max_y: a.y.max(b.y),
        }
    }

    pub fn centered(center: PixelPoint, width: f64, height: f64) -> Self {
        let half_w = width.abs() / 2.0;
        let half_h = height.abs() / 2.0;
        Self {
            min_x: center.x - half_w,
            max_x: center.x + half_w,
            min_y: center.y - half_h,
            max_y: center.y + half_h,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> PixelPoint {
        PixelPoint::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn overlaps(&self, other: &LabelBounds) -> bool {
        super::collision::overlaps(self, other)
    }
}

/// Linear label size model: no font metrics, just a per-character width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LabelMetrics {
    pub char_width: f64,
    pub padding: f64,
    pub height: f64,
}

impl Default for LabelMetrics {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            padding: 20.0,
            height: 30.0,
        }
    }
}

impl LabelMetrics {
    pub fn width(&self, size_hint: usize) -> f64 {
        size_hint as f64 * self.char_width + self.padding
    }
}

/// Screen-space footprint of a label anchored (centred) at `anchor`.
pub fn estimate_bounds(
    anchor: GeoPoint,
    size_hint: usize,
    metrics: &LabelMetrics,
    projector: &dyn Projector,
) -> LabelBounds {
    let center = projector.project(anchor);
    LabelBounds::centered(center, metrics.width(size_hint), metrics.height)
}
