//! Layout files: a rectangle sequence stored on disk.
//!
//! TOML is the default format, one `[[rectangle]]` table per element:
//!
//! ```toml
//! [[rectangle]]
//! x = 0
//! y = 0
//! width = 2
//! height = 1
//! ```
//!
//! Files ending in `.json` are read as `{"rectangle": [{...}, ...]}`.
//! The anchor coordinates default to `0`. Every entry is validated, so a
//! zero or negative dimension fails the whole load.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rect::RectangleSpec;
use crate::{Rectangle, Rectangles, Result};

/// On-disk shape shared by the TOML and JSON formats.
#[derive(Serialize)]
struct LayoutFile<'a> {
    rectangle: &'a Rectangles,
}

/// Unvalidated form of [`LayoutFile`]; entries are checked after parsing
/// so a bad dimension surfaces as `NonPositiveDimension`.
#[derive(Deserialize)]
struct RawLayoutFile {
    #[serde(default)]
    rectangle: Vec<RectangleSpec>,
}

impl RawLayoutFile {
    fn validate(self) -> Result<Rectangles> {
        self.rectangle.into_iter().map(Rectangle::try_from).collect()
    }
}

/// Serialization format of a layout file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// Picks the format from the file extension; anything but `.json`
    /// is treated as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

pub fn parse_toml(content: &str) -> Result<Rectangles> {
    let file: RawLayoutFile = toml::from_str(content)?;
    file.validate()
}

pub fn parse_json(content: &str) -> Result<Rectangles> {
    let file: RawLayoutFile = serde_json::from_str(content)?;
    file.validate()
}

pub fn parse(content: &str, format: Format) -> Result<Rectangles> {
    match format {
        Format::Toml => parse_toml(content),
        Format::Json => parse_json(content),
    }
}

/// Reads and validates a layout file.
pub fn load(path: &Path) -> Result<Rectangles> {
    let format = Format::from_path(path);
    let content = std::fs::read_to_string(path)?;
    let rects = parse(&content, format)?;
    debug!(path = %path.display(), ?format, count = rects.size(), "loaded layout");
    Ok(rects)
}

pub fn to_toml(rects: &Rectangles) -> Result<String> {
    let file = LayoutFile { rectangle: rects };
    Ok(toml::to_string(&file)?)
}

pub fn to_json(rects: &Rectangles) -> Result<String> {
    let file = LayoutFile { rectangle: rects };
    Ok(serde_json::to_string_pretty(&file)?)
}

/// Renders `rects` in the given format.
pub fn render(rects: &Rectangles, format: Format) -> Result<String> {
    match format {
        Format::Toml => to_toml(rects),
        Format::Json => to_json(rects),
    }
}
