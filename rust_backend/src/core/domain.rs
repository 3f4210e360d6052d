//! Domain models for the occupancy grid and the view selection.
//!
//! A [`Grid`] is a fully materialized week (or any run of days) of time slots:
//! rows are times of day, columns are dates. Every cell is a [`Cell`], which
//! replaces the numeric sentinels the dashboard host puts on the wire with
//! explicit variants.
//!
//! # Example
//!
//! ```
//! use occupancy_heatmap::core::domain::{Cell, Grid, HoverValue};
//!
//! let grid = Grid::new(
//!     vec![vec![Cell::Occupied(3.0), Cell::Empty]],
//!     vec![0.0, 86_400_000.0],
//!     vec!["07:00".to_string()],
//!     vec![vec![HoverValue::Count(3.0), HoverValue::Count(0.0)]],
//!     10.0,
//! )
//! .unwrap();
//!
//! assert_eq!(grid.rows(), 1);
//! assert_eq!(grid.cols(), 2);
//! assert_eq!(grid.x_step(), Some(86_400_000.0));
//! ```

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{HeatmapError, HeatmapResult};

/// Wire value for a slot that does not exist (past, or outside opening hours).
pub const EMPTY_SENTINEL: f64 = -4.5;
/// Wire value for a slot inside the range the user is currently picking.
pub const SELECTED_SENTINEL: f64 = -3.5;
/// Wire value for a slot holding one of the viewing user's own bookings.
pub const OWN_SENTINEL: f64 = -3.0;
/// Lower bound of the colour-mapped count domain.
pub const DOMAIN_FLOOR: f64 = -5.0;

/// Relative tolerance when checking that `x` is evenly spaced.
const X_SPACING_TOLERANCE: f64 = 1e-6;

/// One slot of the occupancy grid.
///
/// `Own` and `Selected` get their own colour bands; see
/// [`crate::algorithms::colorscale`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    /// Slot exists and holds this many bookings.
    Occupied(f64),
    /// Slot holds one of the viewing user's bookings.
    Own,
    /// Slot is part of the pending selection.
    Selected,
    /// Slot does not exist.
    Empty,
}

impl Cell {
    /// Decode a wire value; `None` (JSON `null`) and non-finite values are empty slots.
    pub fn from_wire(value: Option<f64>) -> Self {
        match value {
            None => Cell::Empty,
            Some(v) if !v.is_finite() => Cell::Empty,
            Some(v) if v == EMPTY_SENTINEL => Cell::Empty,
            Some(v) if v == SELECTED_SENTINEL => Cell::Selected,
            Some(v) if v == OWN_SENTINEL => Cell::Own,
            Some(v) => Cell::Occupied(v),
        }
    }

    /// The value the colour-mapped series carries for this cell.
    pub fn wire_value(&self) -> f64 {
        match self {
            Cell::Occupied(n) => *n,
            Cell::Own => OWN_SENTINEL,
            Cell::Selected => SELECTED_SENTINEL,
            Cell::Empty => EMPTY_SENTINEL,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// True for an occupied slot at or above the saturation threshold.
    pub fn is_saturated(&self, max: f64) -> bool {
        matches!(self, Cell::Occupied(n) if *n >= max)
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.wire_value())
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Cell::from_wire(Option::<f64>::deserialize(deserializer)?))
    }
}

/// Display value for one cell, shown on hover and used for text labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HoverValue {
    Count(f64),
    Text(String),
}

impl HoverValue {
    /// Numeric reading of the value, if it has one.
    pub fn as_count(&self) -> Option<f64> {
        match self {
            HoverValue::Count(n) => Some(*n),
            HoverValue::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

impl fmt::Display for HoverValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoverValue::Count(n) => f.write_str(&format_count(*n)),
            HoverValue::Text(s) => f.write_str(s),
        }
    }
}

/// Format a count without a trailing `.0` when it is whole.
pub fn format_count(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// A validated occupancy grid.
///
/// All rows have `x.len()` columns, `y` and `hover` are index-aligned with the
/// rows, and `x` is strictly increasing with equal spacing.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    x: Vec<f64>,
    y: Vec<String>,
    hover: Vec<Vec<HoverValue>>,
    max: f64,
    close: Option<f64>,
    nr_slots: Option<usize>,
}

impl Grid {
    /// Build a grid, checking every shape and ordering precondition.
    ///
    /// # Errors
    /// Returns [`HeatmapError::InvalidGrid`] when the grid is empty or ragged,
    /// when `y`/`hover` do not line up with the rows, when `x` is not strictly
    /// increasing with equal spacing, or when `max` is not a finite value `>= 1`.
    pub fn new(
        cells: Vec<Vec<Cell>>,
        x: Vec<f64>,
        y: Vec<String>,
        hover: Vec<Vec<HoverValue>>,
        max: f64,
    ) -> HeatmapResult<Self> {
        if cells.is_empty() {
            return Err(HeatmapError::invalid_grid("grid has no rows"));
        }
        if x.is_empty() {
            return Err(HeatmapError::invalid_grid("grid has no columns"));
        }
        if y.len() != cells.len() {
            return Err(HeatmapError::invalid_grid(format!(
                "{} row labels for {} rows",
                y.len(),
                cells.len()
            )));
        }
        if hover.len() != cells.len() {
            return Err(HeatmapError::invalid_grid(format!(
                "{} hover rows for {} rows",
                hover.len(),
                cells.len()
            )));
        }
        for (row, (cell_row, hover_row)) in cells.iter().zip(&hover).enumerate() {
            if cell_row.len() != x.len() {
                return Err(HeatmapError::invalid_grid(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    cell_row.len(),
                    x.len()
                )));
            }
            if hover_row.len() != x.len() {
                return Err(HeatmapError::invalid_grid(format!(
                    "hover row {} has {} values, expected {}",
                    row,
                    hover_row.len(),
                    x.len()
                )));
            }
        }
        validate_x_axis(&x)?;
        if !max.is_finite() || max < 1.0 {
            return Err(HeatmapError::invalid_grid(format!(
                "max must be a finite value >= 1, got {}",
                max
            )));
        }

        Ok(Self {
            cells,
            x,
            y,
            hover,
            max,
            close: None,
            nr_slots: None,
        })
    }

    /// Attach the legacy near-capacity threshold.
    pub fn with_close(mut self, close: f64) -> HeatmapResult<Self> {
        if !close.is_finite() || close <= 0.0 {
            return Err(HeatmapError::invalid_grid(format!(
                "close must be a positive finite value, got {}",
                close
            )));
        }
        self.close = Some(close);
        Ok(self)
    }

    /// Attach the number of slots per day used to scale the peak window.
    pub fn with_nr_slots(mut self, nr_slots: usize) -> HeatmapResult<Self> {
        if nr_slots == 0 {
            return Err(HeatmapError::invalid_grid("nr_slots must be positive"));
        }
        self.nr_slots = Some(nr_slots);
        Ok(self)
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.x.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn hover_value(&self, row: usize, col: usize) -> &HoverValue {
        &self.hover[row][col]
    }

    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    pub fn hover(&self) -> &[Vec<HoverValue>] {
        &self.hover
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[String] {
        &self.y
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn close(&self) -> Option<f64> {
        self.close
    }

    /// Slots per day, falling back to the row count.
    pub fn slots_per_day(&self) -> usize {
        self.nr_slots.unwrap_or(self.cells.len())
    }

    /// Spacing between consecutive dates; `None` for a single column.
    pub fn x_step(&self) -> Option<f64> {
        match self.x.as_slice() {
            [first, second, ..] => Some(second - first),
            _ => None,
        }
    }

    /// Wire values of every cell, row by row.
    pub fn z_values(&self) -> Vec<Vec<f64>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(Cell::wire_value).collect())
            .collect()
    }
}

fn validate_x_axis(x: &[f64]) -> HeatmapResult<()> {
    if let Some(bad) = x.iter().position(|v| !v.is_finite()) {
        return Err(HeatmapError::invalid_grid(format!(
            "x[{}] is not a finite timestamp",
            bad
        )));
    }
    if x.len() < 2 {
        return Ok(());
    }

    let step = x[1] - x[0];
    for (i, pair) in x.windows(2).enumerate() {
        let delta = pair[1] - pair[0];
        if delta <= 0.0 {
            return Err(HeatmapError::invalid_grid(format!(
                "x is not strictly increasing at index {}",
                i + 1
            )));
        }
        if ((delta - step) / step).abs() > X_SPACING_TOLERANCE {
            return Err(HeatmapError::invalid_grid(format!(
                "x is not evenly spaced at index {} (step {} vs {})",
                i + 1,
                delta,
                step
            )));
        }
    }
    Ok(())
}

/// Which part of the day the viewer has chosen to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Am,
    Pm,
    Peak,
    #[default]
    #[serde(other)]
    All,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Am => "am",
            ViewMode::Pm => "pm",
            ViewMode::Peak => "peak",
            ViewMode::All => "all",
        }
    }
}

impl FromStr for ViewMode {
    type Err = std::convert::Infallible;

    /// Unrecognized selectors mean the whole day.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "am" => ViewMode::Am,
            "pm" => ViewMode::Pm,
            "peak" => ViewMode::Peak,
            _ => ViewMode::All,
        })
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The view state chosen by the UI for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewSelector {
    #[serde(default, deserialize_with = "deserialize_view_mode")]
    pub show: ViewMode,
    #[serde(default)]
    pub show_text: bool,
}

impl ViewSelector {
    pub fn new(show: ViewMode, show_text: bool) -> Self {
        Self { show, show_text }
    }
}

fn deserialize_view_mode<'de, D>(deserializer: D) -> Result<ViewMode, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .map(|s| s.parse().unwrap_or_default())
        .unwrap_or_default())
}

/// Half-open range of visible rows, `lo < hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowWindow {
    pub lo: usize,
    pub hi: usize,
}

impl RowWindow {
    pub fn new(lo: usize, hi: usize) -> Self {
        debug_assert!(lo < hi, "empty row window {}..{}", lo, hi);
        Self { lo, hi }
    }

    pub fn len(&self) -> usize {
        self.hi - self.lo
    }

    pub fn is_empty(&self) -> bool {
        self.hi <= self.lo
    }

    pub fn contains(&self, row: usize) -> bool {
        (self.lo..self.hi).contains(&row)
    }

    pub fn rows(&self) -> Range<usize> {
        self.lo..self.hi
    }

    /// Axis range centred on the row boundaries.
    pub fn axis_range(&self) -> [f64; 2] {
        [self.lo as f64 - 0.5, self.hi as f64 - 0.5]
    }
}
