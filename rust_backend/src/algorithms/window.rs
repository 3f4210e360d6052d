//! View-window resolution.
//!
//! Maps the view selector onto a half-open range of grid rows. The range only
//! scopes the y-axis and the labels; the heatmap series always carries the
//! whole grid.
//!
//! Rows are ordered latest slot first, so the first half of the rows is the
//! afternoon ("pm") and the second half the morning ("am").

use crate::config::PeakWindow;
use crate::core::domain::{RowWindow, ViewMode};

/// Slots in the reference day the peak window is defined on (15-minute slots).
pub const REFERENCE_SLOTS_PER_DAY: usize = 96;
/// First row of the peak window in the reference day.
pub const PEAK_START_SLOT: usize = 4;
/// Rows covered by the peak window in the reference day.
pub const PEAK_SPAN_SLOTS: usize = 32;
/// Legacy peak window, absolute rows of a 96-slot day.
pub const LEGACY_PEAK_ROWS: (usize, usize) = (16, 36);

/// Resolve the visible rows for `mode` over a grid of `rows` rows.
///
/// `slots_per_day` scales the peak window; pass the row count when the grid
/// holds exactly one day of slots.
///
/// The result always lies within `[0, rows)` and is never empty (`rows` must
/// be at least one).
pub fn resolve_window(
    mode: ViewMode,
    rows: usize,
    slots_per_day: usize,
    peak: PeakWindow,
) -> RowWindow {
    debug_assert!(rows > 0, "cannot resolve a window over an empty grid");
    if rows < 2 {
        return RowWindow::new(0, rows.max(1));
    }

    let half = rows / 2;
    let (lo, hi) = match mode {
        ViewMode::Am => (half, rows),
        ViewMode::Pm => (0, half),
        ViewMode::Peak => peak_rows(slots_per_day, peak),
        ViewMode::All => (0, rows),
    };

    let window = clamp(lo, hi, rows);
    if (window.lo, window.hi) != (lo, hi) {
        log::warn!(
            "{} window {}..{} clamped to {}..{} for a {}-row grid",
            mode,
            lo,
            hi,
            window.lo,
            window.hi,
            rows
        );
    } else {
        log::debug!("{} window resolved to rows {}..{}", mode, lo, hi);
    }
    window
}

/// Peak rows before clamping to the grid.
fn peak_rows(slots_per_day: usize, peak: PeakWindow) -> (usize, usize) {
    match peak {
        PeakWindow::Fixed => LEGACY_PEAK_ROWS,
        PeakWindow::Scaled => {
            let n = slots_per_day.max(1);
            let lo = PEAK_START_SLOT * n / REFERENCE_SLOTS_PER_DAY;
            let end = (PEAK_START_SLOT + PEAK_SPAN_SLOTS) * n;
            let hi = end.div_ceil(REFERENCE_SLOTS_PER_DAY);
            (lo, hi)
        }
    }
}

/// Keep the window inside the grid and at least one row tall.
fn clamp(lo: usize, hi: usize, rows: usize) -> RowWindow {
    let hi = hi.min(rows);
    let lo = lo.min(hi.saturating_sub(1));
    if lo < hi {
        RowWindow::new(lo, hi)
    } else {
        RowWindow::new(lo, lo + 1)
    }
}
