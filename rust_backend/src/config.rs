//! Renderer configuration file support.
//!
//! This module provides utilities for reading renderer options from TOML
//! configuration files. Every field has a default, so an empty file (or no
//! file at all) yields the canonical rendering.
//!
//! ```toml
//! [labels]
//! policy = "remaining"     # or "occupancy"
//! overlay = "series"       # or "annotations"
//!
//! [scale]
//! near_capacity = "fixed"  # or "close"
//! close = 2.0
//!
//! [view]
//! peak = "scaled"          # or "fixed"
//!
//! [layout]
//! tick_offset = 0.0
//! hour_marker = ":00"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HeatmapError, HeatmapResult};
use crate::models::figure::Margin;

/// Text shown in each labelled cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPolicy {
    /// `max - value`: places still free.
    #[default]
    Remaining,
    /// The raw hover value.
    Occupancy,
}

/// How labels reach the plotting surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayStyle {
    /// A separate text series with per-point colours.
    #[default]
    Series,
    /// Layout annotations in white (legacy).
    Annotations,
}

/// Sizing of the bands just below capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NearCapacityBands {
    /// One unit each at `max-2` and `max-1`.
    #[default]
    Fixed,
    /// Sized by a `close` threshold (legacy).
    Close,
}

/// How the "peak" view maps onto rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeakWindow {
    /// Scaled by slots per day.
    #[default]
    Scaled,
    /// Absolute rows of a 96-slot day (legacy).
    Fixed,
}

/// Renderer configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RendererConfig {
    #[serde(default)]
    pub labels: LabelSettings,
    #[serde(default)]
    pub scale: ScaleSettings,
    #[serde(default)]
    pub view: ViewSettings,
    #[serde(default)]
    pub layout: LayoutSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelSettings {
    #[serde(default)]
    pub policy: LabelPolicy,
    #[serde(default)]
    pub overlay: OverlayStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleSettings {
    #[serde(default)]
    pub near_capacity: NearCapacityBands,
    /// Width of each near-capacity band in `close` mode.
    #[serde(default = "default_close")]
    pub close: f64,
    /// Draw legacy bands sized by the `close` value sent with the grid,
    /// whenever the grid carries one.
    #[serde(default)]
    pub use_payload_close: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    #[serde(default)]
    pub peak: PeakWindow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSettings {
    /// Added to each hour tick's row index.
    #[serde(default)]
    pub tick_offset: f64,
    /// Suffix identifying whole-hour row labels.
    #[serde(default = "default_hour_marker")]
    pub hour_marker: String,
    #[serde(default = "default_x_tick_format")]
    pub x_tick_format: String,
    #[serde(default = "default_xgap")]
    pub xgap: f64,
    #[serde(default = "default_ygap")]
    pub ygap: f64,
    #[serde(default)]
    pub margin: Margin,
}

fn default_close() -> f64 {
    2.0
}

fn default_hour_marker() -> String {
    ":00".to_string()
}

fn default_x_tick_format() -> String {
    "%a\n%d/%m".to_string()
}

fn default_xgap() -> f64 {
    5.0
}

fn default_ygap() -> f64 {
    0.1
}

impl Default for ScaleSettings {
    fn default() -> Self {
        Self {
            near_capacity: NearCapacityBands::default(),
            close: default_close(),
            use_payload_close: false,
        }
    }
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            tick_offset: 0.0,
            hour_marker: default_hour_marker(),
            x_tick_format: default_x_tick_format(),
            xgap: default_xgap(),
            ygap: default_ygap(),
            margin: Margin::default(),
        }
    }
}

impl RendererConfig {
    /// Load renderer configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(RendererConfig)` if successful
    /// * `Err(HeatmapError)` if the file cannot be read, parsed, or validated
    pub fn from_file<P: AsRef<Path>>(path: P) -> HeatmapResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            HeatmapError::Configuration(format!("Failed to read config file: {}", e))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse renderer configuration from TOML text.
    pub fn from_toml_str(content: &str) -> HeatmapResult<Self> {
        let config: RendererConfig = toml::from_str(content).map_err(|e| {
            HeatmapError::Configuration(format!("Failed to parse config file: {}", e))
        })?;
        config.validate()?;

        Ok(config)
    }

    /// Load renderer configuration from the default location.
    ///
    /// Searches for `heatmap.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    ///
    /// # Returns
    /// * `Ok(None)` if no file exists in any of them
    /// * `Err(HeatmapError)` if the first file found is unusable
    pub fn from_default_location() -> HeatmapResult<Option<Self>> {
        Self::from_search_root(Path::new("."))
    }

    /// Same search as [`Self::from_default_location`], relative to `root`.
    pub fn from_search_root(root: &Path) -> HeatmapResult<Option<Self>> {
        let search_paths = [
            PathBuf::from("heatmap.toml"),
            PathBuf::from("rust_backend/heatmap.toml"),
            PathBuf::from("../heatmap.toml"),
        ];

        for path in search_paths.iter().map(|p| root.join(p)) {
            if path.exists() {
                log::debug!("Loading renderer config from {}", path.display());
                return Self::from_file(&path).map(Some);
            }
        }

        Ok(None)
    }

    /// Load from the default location, or fall back to the built-in defaults.
    pub fn from_default_location_or_default() -> Self {
        match Self::from_default_location() {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("Ignoring unusable renderer config: {}", e);
                Self::default()
            }
        }
    }

    /// Check value ranges that TOML types alone cannot express.
    pub fn validate(&self) -> HeatmapResult<()> {
        if !self.scale.close.is_finite() || self.scale.close <= 0.0 {
            return Err(HeatmapError::Configuration(format!(
                "scale.close must be a positive number, got {}",
                self.scale.close
            )));
        }
        if !self.layout.tick_offset.is_finite() {
            return Err(HeatmapError::Configuration(
                "layout.tick_offset must be finite".to_string(),
            ));
        }
        if self.layout.hour_marker.is_empty() {
            return Err(HeatmapError::Configuration(
                "layout.hour_marker must not be empty".to_string(),
            ));
        }
        if self.layout.xgap < 0.0 || self.layout.ygap < 0.0 {
            return Err(HeatmapError::Configuration(
                "layout gaps must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}
