//! Occupancy heatmap renderer.
//!
//! Turns a booking-occupancy grid (time-of-day rows × date columns) and a view
//! selection into a declarative figure: a stepped colour-banded heatmap, an
//! optional remaining-capacity text overlay for the visible rows, and a layout
//! with hour ticks and a weekday/date axis.
//!
//! ```
//! use occupancy_heatmap::parsing::{parse_grid_json_str, parse_view_json_str};
//! use occupancy_heatmap::services::HeatmapRenderer;
//!
//! let grid = parse_grid_json_str(
//!     r#"{"z": [[7, 10]], "x": [0, 86400000], "y": ["07:00"], "hover": [[7, 10]], "max": 10}"#,
//! )
//! .unwrap();
//! let view = parse_view_json_str(r#"{"show": "all", "show_text": true}"#).unwrap();
//!
//! let figure = HeatmapRenderer::default().render(&grid, &view);
//! assert_eq!(figure.text_overlay().unwrap().text, vec!["3"]);
//! ```

pub mod algorithms;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod parsing;
pub mod services;
pub mod time;

#[cfg(feature = "python")]
pub mod routes;

pub use error::{HeatmapError, HeatmapResult};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Occupancy heatmap - Python extension for the booking dashboard
#[cfg(feature = "python")]
#[pymodule]
fn occupancy_heatmap(m: &Bound<'_, PyModule>) -> PyResult<()> {
    routes::register_route_functions(m)?;
    Ok(())
}
