use pyo3::prelude::*;

use crate::config::RendererConfig;
use crate::error::HeatmapError;
use crate::parsing::payload::{parse_grid_json_str, parse_view_json_str};
use crate::services::HeatmapRenderer;
use crate::time;

/// Route function name constant for the heatmap figure
pub const RENDER_HEATMAP: &str = "render_heatmap";
/// Route function name constant for click decoding
pub const SLOT_FROM_CLICK: &str = "slot_from_click";

impl From<HeatmapError> for PyErr {
    fn from(err: HeatmapError) -> Self {
        match err {
            HeatmapError::Io(e) => PyErr::new::<pyo3::exceptions::PyIOError, _>(e.to_string()),
            other => PyErr::new::<pyo3::exceptions::PyValueError, _>(other.to_string()),
        }
    }
}

/// Render the occupancy heatmap figure.
///
/// Takes the grid payload and the stored view selection as JSON strings and
/// returns the figure JSON for the graph component. `config_toml` overrides
/// the built-in renderer options.
#[pyfunction]
#[pyo3(signature = (grid_json, view_json, config_toml=None))]
pub fn render_heatmap(
    grid_json: &str,
    view_json: &str,
    config_toml: Option<&str>,
) -> PyResult<String> {
    let grid = parse_grid_json_str(grid_json)?;
    let view = parse_view_json_str(view_json)?;

    let figure = match config_toml {
        Some(toml_str) => {
            HeatmapRenderer::new(RendererConfig::from_toml_str(toml_str)?).render(&grid, &view)
        }
        None => HeatmapRenderer::shared().render(&grid, &view),
    };

    figure
        .to_json_string()
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))
}

/// Decode a clicked cell into the ISO start time of its slot.
#[pyfunction]
pub fn slot_from_click(x: &str, y: &str) -> PyResult<String> {
    let start = time::slot_from_click(x, y)?;
    Ok(start.format("%Y-%m-%dT%H:%M:%S").to_string())
}

/// Register heatmap functions and constants.
pub fn register_routes(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(render_heatmap, m)?)?;
    m.add_function(wrap_pyfunction!(slot_from_click, m)?)?;
    m.add("RENDER_HEATMAP", RENDER_HEATMAP)?;
    m.add("SLOT_FROM_CLICK", SLOT_FROM_CLICK)?;
    Ok(())
}
