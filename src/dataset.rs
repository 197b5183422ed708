//! Border records and their JSON form.
//!
//! A dataset is a bare JSON array of `{name, coords, year, details, color}`
//! objects, `coords` being `[lat, lng]` pairs.

use crate::error::{Error, Result};
use crate::geometry::{GeoPoint, Polygon};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

pub const DEFAULT_BORDER_NAME: &str = "Untitled";
pub const DEFAULT_BORDER_COLOR: &str = "#3388ff";
const EXPORT_FILE_PREFIX: &str = "historical_borders";

static COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})|[a-zA-Z]+)$").unwrap());

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Border {
    #[serde(default)]
    pub name: String,
    pub coords: Vec<GeoPoint>,
    pub year: i32,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub color: String,
}

impl Border {
    /// New border with the tool's defaults for an empty name or colour.
    pub fn new<I>(
        name: impl Into<String>,
        coords: I,
        year: i32,
        details: impl Into<String>,
        color: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<GeoPoint>,
    {
        let name = name.into();
        let color = color.into();
        Self {
            name: if name.trim().is_empty() {
                DEFAULT_BORDER_NAME.to_string()
            } else {
                name
            },
            coords: coords.into_iter().map(Into::into).collect(),
            year,
            details: details.into(),
            color: if color.trim().is_empty() {
                DEFAULT_BORDER_COLOR.to_string()
            } else {
                color
            },
        }
    }

    pub fn polygon(&self) -> Result<Polygon> {
        Polygon::new(self.coords.clone())
    }

    /// Label length in UTF-16 code units, the unit the label size model was
    /// tuned against.
    pub fn size_hint(&self) -> usize {
        self.name.encode_utf16().count()
    }

    /// Stored colour if it is a hex or named CSS colour, the default otherwise.
    pub fn display_color(&self) -> &str {
        if COLOR_RE.is_match(self.color.trim()) {
            self.color.trim()
        } else {
            DEFAULT_BORDER_COLOR
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BorderDataset {
    borders: Vec<Border>,
}

impl BorderDataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_borders(borders: Vec<Border>) -> Self {
        Self { borders }
    }

    /// Parses an exported dataset. Strict JSON is tried first; hand-edited
    /// files with comments or trailing commas are accepted through JSON5.
    pub fn from_json(input: &str) -> Result<Self> {
        let value = match serde_json::from_str::<serde_json::Value>(input) {
            Ok(value) => value,
            Err(strict_err) => match json5::from_str::<serde_json::Value>(input) {
                Ok(value) => value,
                Err(_) => return Err(Error::Json(strict_err)),
            },
        };
        if !value.is_array() {
            return Err(Error::NotAnArray);
        }
        let borders: Vec<Border> = serde_json::from_value(value)?;
        Ok(Self { borders })
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.borders)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let dataset = Self::from_json(&contents)?;
        info!(path = %path.display(), borders = dataset.len(), "loaded borders");
        Ok(dataset)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json_pretty()?)?;
        info!(path = %path.display(), borders = self.len(), "saved borders");
        Ok(())
    }

    /// Loads the working copy at `primary`; when it does not exist, seeds it
    /// from `seed` (if given and readable). Never fails: unreadable data
    /// yields an empty dataset.
    pub fn load_or_seed(primary: &Path, seed: Option<&Path>) -> Self {
        if primary.exists() {
            return match Self::load(primary) {
                Ok(dataset) => dataset,
                Err(err) => {
                    error!(path = %primary.display(), "failed to load borders: {err}");
                    Self::new()
                }
            };
        }

        let Some(seed) = seed else {
            return Self::new();
        };
        match Self::load(seed) {
            Ok(dataset) => {
                if let Err(err) = dataset.save(primary) {
                    warn!(path = %primary.display(), "failed to store seeded borders: {err}");
                }
                dataset
            }
            Err(err) => {
                info!(path = %seed.display(), "no seed borders, starting empty: {err}");
                Self::new()
            }
        }
    }

    /// Writes the dataset into `dir` under its dated export name.
    pub fn export_to_dir(&self, dir: &Path, date: NaiveDate) -> Result<PathBuf> {
        if self.is_empty() {
            return Err(Error::EmptyDataset);
        }
        let path = dir.join(export_file_name(date));
        self.save(&path)?;
        Ok(path)
    }

    pub fn len(&self) -> usize {
        self.borders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.borders.is_empty()
    }

    pub fn borders(&self) -> &[Border] {
        &self.borders
    }

    pub fn iter(&self) -> impl Iterator<Item = &Border> {
        self.borders.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Border> {
        self.borders.get(index)
    }

    pub fn push(&mut self, border: Border) {
        self.borders.push(border);
    }

    pub fn remove(&mut self, index: usize) -> Option<Border> {
        (index < self.borders.len()).then(|| self.borders.remove(index))
    }

    /// Borders of `year` with their dataset positions, in dataset order.
    pub fn for_year(&self, year: i32) -> impl Iterator<Item = (usize, &Border)> {
        self.borders
            .iter()
            .enumerate()
            .filter(move |(_, border)| border.year == year)
    }

    /// Distinct years present in the dataset, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.borders
            .iter()
            .map(|border| border.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

pub fn export_file_name(date: NaiveDate) -> String {
    format!("{EXPORT_FILE_PREFIX}_{}.json", date.format("%Y-%m-%d"))
}
