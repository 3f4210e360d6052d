pub mod heatmap;

use pyo3::prelude::*;

/// Register all route-specific functions and constants with the Python module.
/// The host imports the module and wires `render_heatmap` into its own
/// callback; nothing is registered as a side effect of loading.
pub fn register_route_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
	heatmap::register_routes(m)
}
