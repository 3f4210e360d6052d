//! Heatmap render service.
//!
//! This module turns a validated [`Grid`] and a [`ViewSelector`] into a
//! [`Figure`]. It orchestrates the pieces in [`crate::algorithms`]:
//! 1. Resolves the visible rows from the view mode
//! 2. Builds the stepped colour scale for the grid's capacity
//! 3. Derives labels for the visible rows when text is on
//! 4. Derives the hour ticks and the date axis
//!
//! ## Properties
//! - No I/O and no shared mutable state; a renderer can be shared across threads
//! - Identical inputs give identical figures
//! - The heatmap series always carries the full grid; the window only scopes
//!   the y range and the labels

use once_cell::sync::Lazy;

use crate::algorithms::annotations::{generate_labels, layout_annotations, overlay_trace};
use crate::algorithms::colorscale::ColorScale;
use crate::algorithms::ticks::{x_axis, y_axis};
use crate::algorithms::window::resolve_window;
use crate::config::{OverlayStyle, RendererConfig};
use crate::core::domain::{Grid, ViewSelector, DOMAIN_FLOOR};
use crate::models::figure::{Figure, HeatmapTrace, Layout, Trace};

const HOVER_TEMPLATE: &str = "%{y}: %{text}";

static DEFAULT_RENDERER: Lazy<HeatmapRenderer> = Lazy::new(HeatmapRenderer::default);

/// Something that can draw an occupancy grid.
///
/// Hosts take a renderer as a value (or a boxed trait object) instead of
/// looking one up from global state.
pub trait FigureRenderer: Send + Sync {
    fn render(&self, grid: &Grid, view: &ViewSelector) -> Figure;
}

/// Renders occupancy grids under one configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeatmapRenderer {
    config: RendererConfig,
}

impl HeatmapRenderer {
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    /// Process-wide renderer with the built-in defaults.
    pub fn shared() -> &'static HeatmapRenderer {
        &DEFAULT_RENDERER
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Render one figure.
    pub fn render(&self, grid: &Grid, view: &ViewSelector) -> Figure {
        let window = resolve_window(
            view.show,
            grid.rows(),
            grid.slots_per_day(),
            self.config.view.peak,
        );
        let scale = ColorScale::for_grid(grid, &self.config.scale);
        let labels = generate_labels(
            grid,
            window,
            view.show_text,
            self.config.labels.policy,
            &scale,
        );

        let layout_settings = &self.config.layout;
        let heatmap = HeatmapTrace {
            name: String::new(),
            z: grid.z_values(),
            x: grid.x().to_vec(),
            y: grid.y().to_vec(),
            text: grid.hover().to_vec(),
            hovertemplate: HOVER_TEMPLATE.to_string(),
            showscale: false,
            hoverongaps: false,
            zmin: DOMAIN_FLOOR,
            zmax: grid.max(),
            xgap: layout_settings.xgap,
            ygap: layout_settings.ygap,
            colorscale: scale.stops(),
        };

        let mut data = vec![Trace::Heatmap(heatmap)];
        let mut annotations = Vec::new();
        if view.show_text {
            match self.config.labels.overlay {
                OverlayStyle::Series => data.push(Trace::Scatter(overlay_trace(&labels))),
                OverlayStyle::Annotations => annotations = layout_annotations(&labels),
            }
        }

        log::debug!(
            "Rendered {}x{} grid, view {} (text {}), {} labels",
            grid.rows(),
            grid.cols(),
            view.show,
            view.show_text,
            labels.len()
        );

        Figure {
            data,
            layout: Layout {
                margin: layout_settings.margin.clone(),
                xaxis: x_axis(grid, layout_settings),
                yaxis: y_axis(grid, window, layout_settings),
                annotations,
            },
        }
    }
}

impl FigureRenderer for HeatmapRenderer {
    fn render(&self, grid: &Grid, view: &ViewSelector) -> Figure {
        HeatmapRenderer::render(self, grid, view)
    }
}

/// Render with the default configuration.
pub fn render_heatmap(grid: &Grid, view: &ViewSelector) -> Figure {
    HeatmapRenderer::shared().render(grid, view)
}
