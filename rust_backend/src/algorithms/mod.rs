//! Heatmap algorithms.
//!
//! The pure pieces a render is assembled from. None of them allocate more than
//! their output or touch anything outside their arguments.
//!
//! # Components
//!
//! - [`window`]: View-window resolution (which rows are visible)
//! - [`colorscale`]: Stepped colour scale and cell classification
//! - [`annotations`]: Remaining-capacity / occupancy labels for the visible rows
//! - [`ticks`]: Hour ticks on the row axis, date ticks on the column axis
//!
//! # Example
//!
//! ```
//! use occupancy_heatmap::algorithms::{resolve_window, ColorScale, ColorBand};
//! use occupancy_heatmap::config::PeakWindow;
//! use occupancy_heatmap::core::domain::{Cell, ViewMode};
//!
//! let window = resolve_window(ViewMode::Peak, 96, 96, PeakWindow::Scaled);
//! assert_eq!((window.lo, window.hi), (4, 36));
//!
//! let scale = ColorScale::fixed(10.0);
//! assert_eq!(scale.classify(Cell::Occupied(9.0)), ColorBand::NearlyFull);
//! ```

pub mod annotations;
pub mod colorscale;
pub mod ticks;
pub mod window;

pub use annotations::{generate_labels, label_text, labels_iter, CellLabel};
pub use colorscale::{BandSpan, ColorBand, ColorScale};
pub use ticks::{column_ticks, hour_ticks, ColumnTicks, RowTicks};
pub use window::resolve_window;
