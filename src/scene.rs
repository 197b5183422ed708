use crate::config::Config;
use crate::dataset::BorderDataset;
use crate::labels::{LabelBounds, LabelPass, PixelPoint, Projector, label_year};
use crate::projection::Viewport;

/// A border polygon projected into container pixels.
#[derive(Debug, Clone)]
pub struct SceneBorder {
    pub index: usize,
    pub name: String,
    pub details: String,
    pub year: i32,
    pub color: String,
    pub points: Vec<PixelPoint>,
}

#[derive(Debug, Clone)]
pub struct SceneLabel {
    pub index: usize,
    pub text: String,
    pub position: PixelPoint,
    pub bounds: LabelBounds,
}

/// Everything needed to draw one year of the map.
#[derive(Debug, Clone)]
pub struct MapScene {
    pub year: i32,
    pub viewport: Viewport,
    pub borders: Vec<SceneBorder>,
    pub labels: Vec<SceneLabel>,
    pub pass: LabelPass,
}

/// Projects the borders of `year` and places their labels. Borders that
/// cannot form a polygon are neither drawn nor labeled.
pub fn compute_scene(
    dataset: &BorderDataset,
    year: i32,
    viewport: &Viewport,
    config: &Config,
) -> MapScene {
    let pass = label_year(dataset, year, &config.labels, viewport);

    let borders = dataset
        .for_year(year)
        .filter(|(_, border)| border.coords.len() >= 3)
        .map(|(index, border)| SceneBorder {
            index,
            name: border.name.clone(),
            details: border.details.clone(),
            year: border.year,
            color: border.display_color().to_string(),
            points: border
                .coords
                .iter()
                .map(|point| viewport.project(*point))
                .collect(),
        })
        .collect();

    let labels = pass
        .labels
        .iter()
        .map(|label| SceneLabel {
            index: label.index,
            text: label.name.clone(),
            position: viewport.project(label.placement.anchor),
            bounds: label.bounds,
        })
        .collect();

    MapScene {
        year,
        viewport: *viewport,
        borders,
        labels,
        pass,
    }
}
