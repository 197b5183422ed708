use crate::error::{Error, Result};
use crate::geometry::GeoPoint;
use crate::labels::LabelMetrics;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_YEARS: [i32; 5] = [1918, 1941, 1945, 1992, 2020];

/// Ordered list of years a map can be shown for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    years: Vec<i32>,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            years: DEFAULT_YEARS.to_vec(),
        }
    }
}

impl Timeline {
    pub fn new(years: Vec<i32>) -> Self {
        Self { years }
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn year_at(&self, index: usize) -> Option<i32> {
        self.years.get(index).copied()
    }

    pub fn index_of(&self, year: i32) -> Option<usize> {
        self.years.iter().position(|&y| y == year)
    }

    pub fn contains(&self, year: i32) -> bool {
        self.index_of(year).is_some()
    }

    /// The requested year, or the first one on the timeline when none is
    /// given. Years off the timeline are rejected.
    pub fn resolve(&self, year: Option<i32>) -> Result<i32> {
        let year = match year {
            Some(year) => year,
            None => self.year_at(0).ok_or_else(|| self.unknown(0))?,
        };
        if self.contains(year) {
            Ok(year)
        } else {
            Err(self.unknown(year))
        }
    }

    fn unknown(&self, year: i32) -> Error {
        Error::UnknownYear {
            year,
            timeline: self
                .years
                .iter()
                .map(|y| y.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub center: GeoPoint,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// `[south_west, north_east]`.
    pub max_bounds: [GeoPoint; 2],
    pub timeline: Timeline,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: GeoPoint::new(54.526, 15.2551),
            zoom: 6.0,
            min_zoom: 5.0,
            max_zoom: 6.0,
            max_bounds: [GeoPoint::new(35.0, -25.0), GeoPoint::new(75.0, 50.0)],
            timeline: Timeline::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: f64,
    pub height: f64,
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            background: "#FFFFFF".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub map: MapConfig,
    pub labels: LabelMetrics,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        let theme = Theme::atlas();
        let render = RenderConfig {
            background: theme.background.clone(),
            ..Default::default()
        };
        Self {
            theme,
            map: MapConfig::default(),
            labels: LabelMetrics::default(),
            render,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    font_size: Option<f64>,
    label_color: Option<String>,
    label_halo_color: Option<String>,
    border_fill_opacity: Option<f64>,
    border_stroke_width: Option<f64>,
    background: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MapVariables {
    center: Option<GeoPoint>,
    zoom: Option<f64>,
    min_zoom: Option<f64>,
    max_zoom: Option<f64>,
    max_bounds: Option<[GeoPoint; 2]>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    map: Option<MapVariables>,
    years: Option<Vec<i32>>,
    labels: Option<LabelMetrics>,
    width: Option<f64>,
    height: Option<f64>,
}

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents, config)
}

fn parse_config(contents: &str, mut config: Config) -> Result<Config> {
    let parsed: ConfigFile = serde_json::from_str(contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        if theme_name == "dark" {
            config.theme = Theme::dark();
        } else if theme_name == "atlas" || theme_name == "default" {
            config.theme = Theme::atlas();
        }
        config.render.background = config.theme.background.clone();
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.font_size {
            config.theme.font_size = v;
        }
        if let Some(v) = vars.label_color {
            config.theme.label_color = v;
        }
        if let Some(v) = vars.label_halo_color {
            config.theme.label_halo_color = v;
        }
        if let Some(v) = vars.border_fill_opacity {
            config.theme.border_fill_opacity = v.clamp(0.0, 1.0);
        }
        if let Some(v) = vars.border_stroke_width {
            config.theme.border_stroke_width = v.max(0.0);
        }
        if let Some(v) = vars.background {
            config.theme.background = v.clone();
            config.render.background = v;
        }
    }

    if let Some(map) = parsed.map {
        if let Some(v) = map.center {
            config.map.center = v;
        }
        if let Some(v) = map.zoom {
            config.map.zoom = v;
        }
        if let Some(v) = map.min_zoom {
            config.map.min_zoom = v;
        }
        if let Some(v) = map.max_zoom {
            config.map.max_zoom = v;
        }
        if let Some(v) = map.max_bounds {
            config.map.max_bounds = v;
        }
    }

    if let Some(years) = parsed.years {
        if !years.is_empty() {
            config.map.timeline = Timeline::new(years);
        }
    }
    if let Some(labels) = parsed.labels {
        config.labels = labels;
    }
    if let Some(v) = parsed.width {
        config.render.width = v;
    }
    if let Some(v) = parsed.height {
        config.render.height = v;
    }

    Ok(config)
}
