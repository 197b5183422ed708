use border_atlas::{
    BorderDataset, Config, Theme, Viewport, compute_scene, label_dump::label_dump_json,
    render_svg,
};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MapRenderOptions {
    theme: Option<String>,
    font_family: Option<String>,
    font_size: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
    zoom: Option<f64>,
    center: Option<[f64; 2]>,
}

fn build_config(options: &MapRenderOptions) -> Config {
    let mut config = Config::default();
    if options.theme.as_deref() == Some("dark") {
        config.theme = Theme::dark();
        config.render.background = config.theme.background.clone();
    }
    if let Some(font_family) = &options.font_family {
        config.theme.font_family = font_family.clone();
    }
    if let Some(font_size) = options.font_size {
        config.theme.font_size = font_size;
    }
    if let Some(width) = options.width {
        config.render.width = width;
    }
    if let Some(height) = options.height {
        config.render.height = height;
    }
    config
}

fn build_viewport(options: &MapRenderOptions, config: &Config) -> Viewport {
    let center = options.center.map(Into::into).unwrap_or(config.map.center);
    Viewport::clamped(
        center,
        options.zoom.unwrap_or(config.map.zoom),
        config.render.width,
        config.render.height,
        &config.map,
    )
}

fn parse_options(options_json: Option<String>) -> Result<MapRenderOptions, String> {
    match options_json {
        Some(raw) => serde_json::from_str(&raw).map_err(|error| error.to_string()),
        None => Ok(MapRenderOptions::default()),
    }
}

fn render(dataset_json: &str, year: Option<i32>, options: &MapRenderOptions) -> Result<String, String> {
    let config = build_config(options);
    let dataset = BorderDataset::from_json(dataset_json).map_err(|error| error.to_string())?;
    let year = config.map.timeline.resolve(year).map_err(|error| error.to_string())?;
    let scene = compute_scene(&dataset, year, &build_viewport(options, &config), &config);
    Ok(render_svg(&scene, &config.theme))
}

fn place(dataset_json: &str, year: Option<i32>, options: &MapRenderOptions) -> Result<String, String> {
    let config = build_config(options);
    let dataset = BorderDataset::from_json(dataset_json).map_err(|error| error.to_string())?;
    let year = config.map.timeline.resolve(year).map_err(|error| error.to_string())?;
    let scene = compute_scene(&dataset, year, &build_viewport(options, &config), &config);
    label_dump_json(&scene).map_err(|error| error.to_string())
}

#[wasm_bindgen]
pub fn render_borders_svg(
    dataset_json: &str,
    year: Option<i32>,
    options_json: Option<String>,
) -> Result<String, JsValue> {
    let options = parse_options(options_json).map_err(|error| JsValue::from_str(&error))?;
    render(dataset_json, year, &options).map_err(|error| JsValue::from_str(&error))
}

#[wasm_bindgen]
pub fn place_border_labels(
    dataset_json: &str,
    year: Option<i32>,
    options_json: Option<String>,
) -> Result<String, JsValue> {
    let options = parse_options(options_json).map_err(|error| JsValue::from_str(&error))?;
    place(dataset_json, year, &options).map_err(|error| JsValue::from_str(&error))
}

#[cfg(test)]
mod tests {
    use crate::{MapRenderOptions, parse_options, place, render};

    const DATASET: &str = r##"[
        {"name": "Estonia", "coords": [[59.5, 23.5], [59.5, 28.0], [57.6, 27.3], [57.9, 23.8]], "year": 1918, "details": "", "color": "#0072ce"},
        {"name": "Latvia", "coords": [[57.9, 21.0], [57.6, 27.3], [55.7, 28.0], [56.3, 21.0]], "year": 1918, "details": "", "color": "#9e3039"}
    ]"##;

    #[test]
    fn renders_borders_of_the_first_year() {
        let svg = render(DATASET, None, &MapRenderOptions::default())
            .expect("dataset should render");
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Estonia"));
        assert!(svg.contains("Latvia"));
    }

    #[test]
    fn options_are_camel_case() {
        let options =
            parse_options(Some(r#"{"theme": "dark", "fontSize": 12, "center": [57.0, 25.0]}"#.to_string()))
                .unwrap();
        assert_eq!(options.font_size, Some(12.0));
        assert_eq!(options.center, Some([57.0, 25.0]));
        let labels = place(DATASET, Some(1918), &options).unwrap();
        assert!(labels.contains("\"name\": \"Latvia\""));
    }

    #[test]
    fn off_timeline_year_is_an_error() {
        let err = render(DATASET, Some(1939), &MapRenderOptions::default()).unwrap_err();
        assert!(err.contains("1939"));
    }
}
