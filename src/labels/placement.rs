// First-fit label placement over a fixed table of offsets around the polygon
// centroid. Offsets are geographic, so their on-screen distance depends on the
// zoom level; that approximation is accepted.

use super::bounds::{LabelBounds, LabelMetrics, Projector, estimate_bounds};
use super::collision::collides_with_any;
use crate::geometry::{GeoPoint, Polygon, compute_centroid, is_point_in_polygon};
use serde::Serialize;
use tracing::debug;

/// `(d_lat, d_lng)` offsets from the centroid, in priority order.
pub const CANDIDATE_OFFSETS: [(f64, f64); 9] = [
    (0.0, 0.0),
    (0.5, 0.0),
    (-0.5, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (0.5, 1.0),
    (-0.5, 1.0),
    (0.5, -1.0),
    (-0.5, -1.0),
];

/// A label that has already been accepted during the current pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedLabel {
    pub anchor: GeoPoint,
    pub bounds: LabelBounds,
}

impl PlacedLabel {
    pub fn new(
        anchor: GeoPoint,
        size_hint: usize,
        metrics: &LabelMetrics,
        projector: &dyn Projector,
    ) -> Self {
        Self {
            anchor,
            bounds: estimate_bounds(anchor, size_hint, metrics, projector),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "index")]
pub enum PlacementOutcome {
    /// Index into `CANDIDATE_OFFSETS` of the accepted candidate.
    Candidate(usize),
    /// Every candidate was rejected; the raw centroid is used.
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub anchor: GeoPoint,
    pub outcome: PlacementOutcome,
}

impl Placement {
    pub fn candidate_index(&self) -> Option<usize> {
        match self.outcome {
            PlacementOutcome::Candidate(idx) => Some(idx),
            PlacementOutcome::Fallback => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.outcome == PlacementOutcome::Fallback
    }
}

pub fn candidate_positions(center: GeoPoint) -> [GeoPoint; 9] {
    CANDIDATE_OFFSETS.map(|(d_lat, d_lng)| center.offset(d_lat, d_lng))
}

/// Picks the first candidate whose bounds avoid every placed label and which
/// lies inside the polygon. Falls back to the centroid when none qualifies.
pub fn choose_position(
    polygon: &Polygon,
    size_hint: usize,
    already_placed: &[PlacedLabel],
    metrics: &LabelMetrics,
    projector: &dyn Projector,
) -> Placement {
    let center = compute_centroid(polygon);

    for (idx, candidate) in candidate_positions(center).into_iter().enumerate() {
        let bounds = estimate_bounds(candidate, size_hint, metrics, projector);
        if collides_with_any(&bounds, already_placed.iter().map(|placed| &placed.bounds)) {
            continue;
        }
        if !is_point_in_polygon(candidate, polygon) {
            continue;
        }
        return Placement {
            anchor: candidate,
            outcome: PlacementOutcome::Candidate(idx),
        };
    }

    debug!(
        lat = center.lat,
        lng = center.lng,
        placed = already_placed.len(),
        "no free candidate inside polygon, using centroid"
    );
    Placement {
        anchor: center,
        outcome: PlacementOutcome::Fallback,
    }
}

/// Anchor for a polygon's label given the labels already placed in this pass.
pub fn place_label(
    polygon: &Polygon,
    size_hint: usize,
    already_placed: &[PlacedLabel],
    metrics: &LabelMetrics,
    projector: &dyn Projector,
) -> GeoPoint {
    choose_position(polygon, size_hint, already_placed, metrics, projector).anchor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::bounds::PixelPoint;

    // 1 degree = 100 px keeps the half-degree offsets clear of a 30 px label.
    fn wide(point: GeoPoint) -> PixelPoint {
        PixelPoint::new(point.lng * 100.0, point.lat * 100.0)
    }

    fn square() -> Polygon {
        Polygon::from_pairs(&[[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0]]).unwrap()
    }

    // Chevron opening towards low longitudes; its centroid sits in the notch.
    fn sliver() -> Polygon {
        Polygon::from_pairs(&[
            [0.0, 0.0],
            [0.2, 0.4],
            [0.4, 0.0],
            [0.38, 0.0],
            [0.2, 0.36],
            [0.02, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn candidate_table_order() {
        let c = candidate_positions(GeoPoint::new(5.0, 5.0));
        assert_eq!(c[0], GeoPoint::new(5.0, 5.0));
        assert_eq!(c[1], GeoPoint::new(5.5, 5.0));
        assert_eq!(c[2], GeoPoint::new(4.5, 5.0));
        assert_eq!(c[3], GeoPoint::new(5.0, 6.0));
        assert_eq!(c[4], GeoPoint::new(5.0, 4.0));
        assert_eq!(c[5], GeoPoint::new(5.5, 6.0));
        assert_eq!(c[6], GeoPoint::new(4.5, 6.0));
        assert_eq!(c[7], GeoPoint::new(5.5, 4.0));
        assert_eq!(c[8], GeoPoint::new(4.5, 4.0));
    }

    #[test]
    fn empty_pass_returns_centroid() {
        let metrics = LabelMetrics::default();
        let placement = choose_position(&square(), 5, &[], &metrics, &wide);
        assert_eq!(placement.anchor, GeoPoint::new(5.0, 5.0));
        assert_eq!(placement.outcome, PlacementOutcome::Candidate(0));
    }

    #[test]
    fn occupied_centroid_moves_to_first_offset() {
        let metrics = LabelMetrics::default();
        let blocker = PlacedLabel::new(GeoPoint::new(5.0, 5.0), 5, &metrics, &wide);
        let placement = choose_position(&square(), 5, &[blocker], &metrics, &wide);
        assert_eq!(placement.anchor, GeoPoint::new(5.5, 5.0));
        assert_eq!(placement.candidate_index(), Some(1));
    }

    #[test]
    fn skips_candidates_outside_polygon() {
        // Centroid at (0.25, 5): the +0.5 lat offset leaves the strip, -0.5 too.
        let strip =
            Polygon::from_pairs(&[[0.0, 0.0], [0.0, 10.0], [0.5, 10.0], [0.5, 0.0]]).unwrap();
        let metrics = LabelMetrics::default();
        let blocker = PlacedLabel::new(GeoPoint::new(0.25, 5.0), 5, &metrics, &wide);
        let placement = choose_position(&strip, 5, &[blocker], &metrics, &wide);
        assert_eq!(placement.anchor, GeoPoint::new(0.25, 6.0));
        assert_eq!(placement.candidate_index(), Some(3));
    }

    #[test]
    fn sliver_falls_back_to_centroid() {
        let polygon = sliver();
        let center = compute_centroid(&polygon);
        assert!(!is_point_in_polygon(center, &polygon));
        let placement = choose_position(&polygon, 3, &[], &LabelMetrics::default(), &wide);
        assert!(placement.is_fallback());
        assert_eq!(placement.anchor, center);
    }

    #[test]
    fn crowded_map_still_returns_a_candidate() {
        let metrics = LabelMetrics::default();
        let polygon = square();
        let center = compute_centroid(&polygon);
        let candidates = candidate_positions(center);
        let mut placed = Vec::new();
        for step in 0..40 {
            let anchor = GeoPoint::new(step as f64 * 0.25, 10.0 - step as f64 * 0.25);
            placed.push(PlacedLabel::new(anchor, 7, &metrics, &wide));
            let anchor = place_label(&polygon, 6, &placed, &metrics, &wide);
            assert!(candidates.contains(&anchor), "{anchor:?} is not a candidate");
        }
    }

    #[test]
    fn fully_blocked_falls_back() {
        let metrics = LabelMetrics::default();
        let huge = PlacedLabel {
            anchor: GeoPoint::new(5.0, 5.0),
            bounds: LabelBounds::centered(PixelPoint::new(500.0, 500.0), 5000.0, 5000.0),
        };
        let placement = choose_position(&square(), 5, &[huge], &metrics, &wide);
        assert!(placement.is_fallback());
        assert_eq!(placement.anchor, GeoPoint::new(5.0, 5.0));
    }

    #[test]
    fn placement_is_idempotent() {
        let metrics = LabelMetrics::default();
        let placed = vec![
            PlacedLabel::new(GeoPoint::new(5.0, 5.0), 8, &metrics, &wide),
            PlacedLabel::new(GeoPoint::new(5.5, 5.0), 8, &metrics, &wide),
        ];
        let first = choose_position(&square(), 8, &placed, &metrics, &wide);
        let second = choose_position(&square(), 8, &placed, &metrics, &wide);
        assert_eq!(first, second);
    }
}
