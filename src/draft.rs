use crate::dataset::Border;
use crate::error::{Error, Result};
use crate::geometry::GeoPoint;

/// A border being drawn point by point.
#[derive(Debug, Clone, Default)]
pub struct BorderDraft {
    points: Vec<GeoPoint>,
}

impl BorderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point(&mut self, point: GeoPoint) {
        self.points.push(point);
    }

    /// Removes the most recent point.
    pub fn undo_last(&mut self) -> Option<GeoPoint> {
        self.points.pop()
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn can_finish(&self) -> bool {
        self.points.len() >= 3
    }

    pub fn cancel(&mut self) {
        self.points.clear();
    }

    /// Turns the draft into a border record. The draft is left empty on
    /// success and untouched on failure.
    pub fn finish(
        &mut self,
        name: &str,
        details: &str,
        color: &str,
        year: i32,
    ) -> Result<Border> {
        if !self.can_finish() {
            return Err(Error::InvalidGeometry {
                vertices: self.points.len(),
            });
        }
        let points = std::mem::take(&mut self.points);
        Ok(Border::new(name, points, year, details, color))
    }
}
