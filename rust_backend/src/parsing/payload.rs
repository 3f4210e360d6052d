use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use std::path::Path;

use crate::core::domain::{Cell, Grid, HoverValue, ViewSelector};
use crate::error::{HeatmapError, HeatmapResult};

/// Date-axis value as the host sends it: epoch milliseconds or a date string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(f64),
    Text(String),
}

/// Custom deserializer that accepts epoch milliseconds, `YYYY-MM-DD`,
/// `YYYY-MM-DD HH:MM[:SS]` or RFC 3339 for each column
fn deserialize_x_axis<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    Vec::<RawTimestamp>::deserialize(deserializer)?
        .into_iter()
        .map(|raw| match raw {
            RawTimestamp::Millis(ms) => Ok(ms),
            RawTimestamp::Text(text) => parse_timestamp_millis(&text).map_err(D::Error::custom),
        })
        .collect()
}

/// Raw JSON structure of the grid payload
#[derive(Debug, Deserialize)]
struct RawGrid {
    z: Vec<Vec<Cell>>,
    #[serde(deserialize_with = "deserialize_x_axis")]
    x: Vec<f64>,
    y: Vec<String>,
    hover: Vec<Vec<HoverValue>>,
    max: f64,
    #[serde(default)]
    close: Option<f64>,
    #[serde(default)]
    nr_slots: Option<usize>,
}

/// Parse a grid payload file
pub fn parse_grid_json(json_path: &Path) -> HeatmapResult<Grid> {
    let json_content = std::fs::read_to_string(json_path)?;
    parse_grid_json_str(&json_content)
}

/// Parse a grid payload from a string and validate it
pub fn parse_grid_json_str(json_str: &str) -> HeatmapResult<Grid> {
    let deserializer = &mut serde_json::Deserializer::from_str(json_str);
    let raw: RawGrid = serde_path_to_error::deserialize(deserializer)?;

    let mut grid = Grid::new(raw.z, raw.x, raw.y, raw.hover, raw.max)?;
    if let Some(close) = raw.close {
        grid = grid.with_close(close)?;
    }
    if let Some(nr_slots) = raw.nr_slots {
        grid = grid.with_nr_slots(nr_slots)?;
    }
    Ok(grid)
}

/// Parse the view selector the UI stores (`{"show": ..., "show_text": ...}`).
/// Extra keys such as `zone` are ignored.
pub fn parse_view_json_str(json_str: &str) -> HeatmapResult<ViewSelector> {
    let deserializer = &mut serde_json::Deserializer::from_str(json_str);
    let view: ViewSelector = serde_path_to_error::deserialize(deserializer)?;
    Ok(view)
}

/// Convert a date or date-time string to epoch milliseconds (UTC)
pub fn parse_timestamp_millis(text: &str) -> HeatmapResult<f64> {
    let text = text.trim();
    let invalid = || HeatmapError::Parse {
        path: "x".to_string(),
        message: format!("unrecognized date `{}`", text),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.timestamp_millis() as f64);
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(dt.and_utc().timestamp_millis() as f64);
        }
    }
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| invalid())?;
    let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(invalid)?;
    Ok(midnight.and_utc().timestamp_millis() as f64)
}
