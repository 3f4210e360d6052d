//! Core domain models for occupancy heatmaps.
//!
//! This module defines the data every render consumes: the validated occupancy
//! grid with its typed cells, and the view selection chosen by the UI.

pub mod domain;

pub use domain::{Cell, Grid, HoverValue, RowWindow, ViewMode, ViewSelector};
