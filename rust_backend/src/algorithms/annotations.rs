//! Text labels for the visible window.
//!
//! Labels are produced only when the viewer asked for text, only for rows in
//! the resolved window, and never for empty or saturated slots (colour alone
//! already says "full").

use crate::algorithms::colorscale::{ColorBand, ColorScale};
use crate::config::LabelPolicy;
use crate::core::domain::{format_count, Grid, HoverValue, RowWindow};
use crate::models::figure::{Annotation, Font, PointFonts, TextOverlayTrace};

/// Font colour of legacy in-cell annotations.
const ANNOTATION_FONT_COLOR: &str = "rgb(255,255,255)";

/// One label placement.
#[derive(Debug, Clone, PartialEq)]
pub struct CellLabel {
    pub row: usize,
    pub col: usize,
    pub x: f64,
    pub y: String,
    pub text: String,
    /// Band of the cell underneath, used to pick the text colour.
    pub band: ColorBand,
}

/// Lazily walk the labelled cells of `window`, row by row.
///
/// Rows of `window` past the end of the grid are ignored.
pub fn labels_iter<'a>(
    grid: &'a Grid,
    window: RowWindow,
    policy: LabelPolicy,
    scale: &'a ColorScale,
) -> impl Iterator<Item = CellLabel> + 'a {
    let max = grid.max();
    let hi = window.hi.min(grid.rows());
    (window.lo.min(hi)..hi)
        .flat_map(move |row| (0..grid.cols()).map(move |col| (row, col)))
        .filter(move |&(row, col)| {
            let cell = grid.cell(row, col);
            !cell.is_empty() && !cell.is_saturated(max)
        })
        .map(move |(row, col)| CellLabel {
            row,
            col,
            x: grid.x()[col],
            y: grid.y()[row].clone(),
            text: label_text(grid.hover_value(row, col), max, policy),
            band: scale.classify(grid.cell(row, col)),
        })
}

/// All labels for one render; empty when `show_text` is off.
pub fn generate_labels(
    grid: &Grid,
    window: RowWindow,
    show_text: bool,
    policy: LabelPolicy,
    scale: &ColorScale,
) -> Vec<CellLabel> {
    if !show_text {
        return Vec::new();
    }
    let labels: Vec<CellLabel> = labels_iter(grid, window, policy, scale).collect();
    log::debug!(
        "Generated {} labels for rows {}..{}",
        labels.len(),
        window.lo,
        window.hi
    );
    labels
}

/// Label text for one hover value.
///
/// Under [`LabelPolicy::Remaining`] numeric values become `max - value`;
/// text that is not a number is shown as-is under either policy.
pub fn label_text(hover: &HoverValue, max: f64, policy: LabelPolicy) -> String {
    match policy {
        LabelPolicy::Occupancy => hover.to_string(),
        LabelPolicy::Remaining => match hover.as_count() {
            Some(count) => format_count(max - count),
            None => hover.to_string(),
        },
    }
}

/// Labels as a text-only scatter series.
pub fn overlay_trace(labels: &[CellLabel]) -> TextOverlayTrace {
    TextOverlayTrace {
        name: String::new(),
        mode: "text".to_string(),
        x: labels.iter().map(|l| l.x).collect(),
        y: labels.iter().map(|l| l.y.clone()).collect(),
        text: labels.iter().map(|l| l.text.clone()).collect(),
        textfont: PointFonts {
            color: labels
                .iter()
                .map(|l| l.band.text_color().to_string())
                .collect(),
        },
        hoverinfo: "skip".to_string(),
        showlegend: false,
    }
}

/// Labels as legacy layout annotations.
pub fn layout_annotations(labels: &[CellLabel]) -> Vec<Annotation> {
    labels
        .iter()
        .map(|l| Annotation {
            x: l.x,
            y: l.y.clone(),
            text: l.text.clone(),
            font: Font {
                color: ANNOTATION_FONT_COLOR.to_string(),
            },
            showarrow: false,
        })
        .collect()
}
