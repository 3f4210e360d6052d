//! Axis tick derivation.

use crate::config::LayoutSettings;
use crate::core::domain::{Grid, RowWindow};
use crate::models::figure::{XAxis, YAxis};

/// Hour ticks on the row axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowTicks {
    pub positions: Vec<f64>,
    pub labels: Vec<String>,
}

/// Date ticks on the column axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnTicks {
    /// `x[1] - x[0]`; `None` with a single column.
    pub dtick: Option<f64>,
    pub tick0: f64,
}

/// Collect `(index + offset, label)` for every label ending in `hour_marker`.
pub fn hour_ticks(labels: &[String], hour_marker: &str, offset: f64) -> RowTicks {
    let (positions, labels) = labels
        .iter()
        .enumerate()
        .filter(|(_, label)| label.ends_with(hour_marker))
        .map(|(i, label)| (i as f64 + offset, label.clone()))
        .unzip();
    RowTicks { positions, labels }
}

/// Step and anchor of the date axis.
pub fn column_ticks(x: &[f64]) -> ColumnTicks {
    ColumnTicks {
        dtick: match x {
            [first, second, ..] => Some(second - first),
            _ => None,
        },
        tick0: x.first().copied().unwrap_or(0.0),
    }
}

pub fn y_axis(grid: &Grid, window: RowWindow, layout: &LayoutSettings) -> YAxis {
    let ticks = hour_ticks(grid.y(), &layout.hour_marker, layout.tick_offset);
    YAxis {
        fixedrange: true,
        range: window.axis_range(),
        tickmode: "array".to_string(),
        tickvals: ticks.positions,
        ticktext: ticks.labels,
        ticklen: 0,
    }
}

pub fn x_axis(grid: &Grid, layout: &LayoutSettings) -> XAxis {
    let ticks = column_ticks(grid.x());
    XAxis {
        mirror: "allticks".to_string(),
        side: "top".to_string(),
        fixedrange: true,
        axis_type: "date".to_string(),
        tickformat: layout.x_tick_format.clone(),
        dtick: ticks.dtick,
        tick0: ticks.tick0,
        ticklen: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_hour_ticks_quarter_slots() {
        let y = labels(&["06:00", "06:15", "06:30", "06:45", "07:00"]);
        let ticks = hour_ticks(&y, ":00", 0.0);
        assert_eq!(ticks.positions, vec![0.0, 4.0]);
        assert_eq!(ticks.labels, labels(&["06:00", "07:00"]));
    }

    #[test]
    fn test_hour_ticks_with_offset() {
        let y = labels(&["07:45", "07:30", "07:15", "07:00"]);
        let ticks = hour_ticks(&y, ":00", 0.5);
        assert_eq!(ticks.positions, vec![3.5]);
    }

    #[test]
    fn test_hour_ticks_none_on_hour() {
        let y = labels(&["06:15", "06:30"]);
        assert_eq!(hour_ticks(&y, ":00", 0.0), RowTicks::default());
    }

    #[test]
    fn test_column_ticks() {
        let ticks = column_ticks(&[1000.0, 1864.0, 2728.0]);
        assert_eq!(ticks.dtick, Some(864.0));
        assert_eq!(ticks.tick0, 1000.0);
    }

    #[test]
    fn test_column_ticks_single_column() {
        let ticks = column_ticks(&[5000.0]);
        assert_eq!(ticks.dtick, None);
        assert_eq!(ticks.tick0, 5000.0);
    }
}
