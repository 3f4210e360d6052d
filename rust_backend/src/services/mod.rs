//! Service layer for rendering.
//!
//! This module contains the service that sits between the host bindings and
//! the algorithms. It assembles a complete figure from a grid and a view.

pub mod heatmap;

pub use heatmap::{render_heatmap, FigureRenderer, HeatmapRenderer};
