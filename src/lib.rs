#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod dataset;
pub mod draft;
pub mod error;
pub mod geometry;
pub mod label_dump;
pub mod labels;
pub mod projection;
pub mod render;
pub mod scene;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, MapConfig, RenderConfig, Timeline, load_config};
pub use dataset::{Border, BorderDataset};
pub use draft::BorderDraft;
pub use error::{Error, Result};
pub use geometry::{GeoPoint, Polygon, compute_centroid, is_point_in_polygon};
pub use labels::{
    LabelBounds, LabelMetrics, LabelPass, PixelPoint, PlacedLabel, Placement, PlacementOutcome,
    Projector, estimate_bounds, label_borders, label_year, overlaps, place_label,
};
pub use projection::Viewport;
pub use render::render_svg;
pub use scene::{MapScene, compute_scene};
pub use theme::Theme;

/// Parses a dataset and renders the given year (or the first timeline year)
/// with the configured initial view.
pub fn render_dataset_svg(dataset_json: &str, year: Option<i32>, config: &Config) -> Result<String> {
    let dataset = BorderDataset::from_json(dataset_json)?;
    let year = config.map.timeline.resolve(year)?;
    let viewport =
        Viewport::from_map_config(&config.map, config.render.width, config.render.height);
    let scene = compute_scene(&dataset, year, &viewport, config);
    Ok(render_svg(&scene, &config.theme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_dataset_for_first_timeline_year() {
        let input = r#"[{"name": "Poland", "coords": [[54.0, 14.0], [54.5, 23.5], [49.0, 24.0], [49.5, 15.0]], "year": 1918}]"#;
        let svg = render_dataset_svg(input, None, &Config::default()).unwrap();
        assert!(svg.contains("data-year=\"1918\""));
        assert!(svg.contains(">Poland</text>"));
        assert!(render_dataset_svg(input, Some(1900), &Config::default()).is_err());
    }
}
