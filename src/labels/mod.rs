//! Label placement for border polygons.
//!
//! A placement pass walks the borders of one year in dataset order. Every
//! border's label must avoid the labels accepted before it, so passes are
//! strictly sequential and always start from an empty set.

pub mod bounds;
pub mod collision;
pub mod placement;

pub use bounds::{LabelBounds, LabelMetrics, PixelPoint, Projector, estimate_bounds};
pub use collision::overlaps;
pub use placement::{
    CANDIDATE_OFFSETS, PlacedLabel, Placement, PlacementOutcome, candidate_positions,
    choose_position, place_label,
};

use crate::dataset::{Border, BorderDataset};
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize)]
pub struct BorderLabel {
    /// Position of the border in its dataset.
    pub index: usize,
    pub name: String,
    pub year: i32,
    pub placement: Placement,
    pub bounds: LabelBounds,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedBorder {
    pub index: usize,
    pub name: String,
    pub reason: String,
}

/// Result of one placement pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LabelPass {
    pub labels: Vec<BorderLabel>,
    pub skipped: Vec<SkippedBorder>,
}

impl LabelPass {
    /// The accumulated `PlacedLabel` sequence, in insertion order.
    pub fn placed(&self) -> Vec<PlacedLabel> {
        self.labels
            .iter()
            .map(|label| PlacedLabel {
                anchor: label.placement.anchor,
                bounds: label.bounds,
            })
            .collect()
    }

    pub fn fallback_count(&self) -> usize {
        self.labels
            .iter()
            .filter(|label| label.placement.is_fallback())
            .count()
    }
}

/// Places one label per border, in iteration order.
///
/// Borders with fewer than three vertices are skipped and reported instead of
/// aborting the pass.
pub fn label_borders<'a, I>(borders: I, metrics: &LabelMetrics, projector: &dyn Projector) -> LabelPass
where
    I: IntoIterator<Item = (usize, &'a Border)>,
{
    let mut pass = LabelPass::default();
    let mut placed: Vec<PlacedLabel> = Vec::new();

    for (index, border) in borders {
        let polygon = match border.polygon() {
            Ok(polygon) => polygon,
            Err(err) => {
                warn!(index, name = %border.name, "skipping border: {err}");
                pass.skipped.push(SkippedBorder {
                    index,
                    name: border.name.clone(),
                    reason: err.to_string(),
                });
                continue;
            }
        };

        let size_hint = border.size_hint();
        let placement = choose_position(&polygon, size_hint, &placed, metrics, projector);
        let accepted = PlacedLabel::new(placement.anchor, size_hint, metrics, projector);
        placed.push(accepted);

        pass.labels.push(BorderLabel {
            index,
            name: border.name.clone(),
            year: border.year,
            placement,
            bounds: accepted.bounds,
        });
    }

    debug!(
        labels = pass.labels.len(),
        skipped = pass.skipped.len(),
        fallbacks = pass.fallback_count(),
        "label pass finished"
    );
    pass
}

/// Runs a fresh placement pass over the borders of `year`.
pub fn label_year(
    dataset: &BorderDataset,
    year: i32,
    metrics: &LabelMetrics,
    projector: &dyn Projector,
) -> LabelPass {
    label_borders(dataset.for_year(year), metrics, projector)
}
