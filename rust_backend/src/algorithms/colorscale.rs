//! Stepped colour scale for occupancy counts.
//!
//! The count domain `[-5, max]` is split into seven semantic bands. Each band
//! contributes two stops at the same colour, so the plotting surface paints a
//! hard step at every boundary instead of a gradient.
//!
//! ## Bands (canonical sizing)
//! | Band | Counts |
//! | --- | --- |
//! | Unavailable | `-5 .. -4` (empty-slot sentinel) |
//! | Selected | `-4 .. -3.25` (selection sentinel) |
//! | Own | `-3.25 .. -0.5` (own-booking sentinel) |
//! | Available | `-0.5 .. max-2.5` |
//! | Busy | `max-2.5 .. max-1.5` |
//! | NearlyFull | `max-1.5 .. max-0.5` |
//! | Full | `max-0.5 .. max` |
//!
//! Count boundaries sit between whole numbers, so every whole count and every
//! sentinel lands strictly inside one band. The sentinel bands keep the
//! colours of the legacy `close` scale: the selection is light blue, an own
//! booking green and a slot with no bookings blue.

use serde::Serialize;

use crate::config::{NearCapacityBands, ScaleSettings};
use crate::core::domain::{Cell, Grid, DOMAIN_FLOOR};
use crate::models::figure::ScaleStop;

pub const BOOTSTRAP_GREY: &str = "rgb(192,192,192)";
pub const BOOTSTRAP_LIGHT_BLUE: &str = "rgb(91, 192, 222)";
pub const BOOTSTRAP_GREEN: &str = "rgb(92, 184, 92)";
pub const BOOTSTRAP_BLUE: &str = "rgb(2, 117, 216)";
pub const BOOTSTRAP_YELLOW: &str = "rgb(240, 226, 78)";
pub const BOOTSTRAP_ORANGE: &str = "rgb(240, 173, 78)";
pub const BOOTSTRAP_RED: &str = "rgb(217, 83, 79)";

const TEXT_BLACK: &str = "rgb(0,0,0)";
const TEXT_WHITE: &str = "rgb(255,255,255)";

/// Normalized start of the red band in legacy `close` mode.
const LEGACY_FULL_START: f64 = 0.99;

/// Semantic severity of a cell, in increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ColorBand {
    Unavailable,
    Selected,
    Own,
    Available,
    Busy,
    NearlyFull,
    Full,
}

impl ColorBand {
    pub const ALL: [ColorBand; 7] = [
        ColorBand::Unavailable,
        ColorBand::Selected,
        ColorBand::Own,
        ColorBand::Available,
        ColorBand::Busy,
        ColorBand::NearlyFull,
        ColorBand::Full,
    ];

    pub fn color(&self) -> &'static str {
        match self {
            ColorBand::Unavailable => BOOTSTRAP_GREY,
            ColorBand::Selected => BOOTSTRAP_LIGHT_BLUE,
            ColorBand::Own => BOOTSTRAP_GREEN,
            ColorBand::Available => BOOTSTRAP_BLUE,
            ColorBand::Busy => BOOTSTRAP_YELLOW,
            ColorBand::NearlyFull => BOOTSTRAP_ORANGE,
            ColorBand::Full => BOOTSTRAP_RED,
        }
    }

    /// Readable label colour on top of this band.
    pub fn text_color(&self) -> &'static str {
        match self {
            ColorBand::Own | ColorBand::Available | ColorBand::Full => TEXT_WHITE,
            ColorBand::Unavailable
            | ColorBand::Selected
            | ColorBand::Busy
            | ColorBand::NearlyFull => TEXT_BLACK,
        }
    }
}

/// The normalized interval one band occupies, `[lo, hi)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandSpan {
    pub band: ColorBand,
    pub lo: f64,
    pub hi: f64,
}

impl BandSpan {
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }
}

/// A stepped colour scale over `[-5, max]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    max: f64,
    spans: Vec<BandSpan>,
}

impl ColorScale {
    /// Canonical scale with one-unit near-capacity bands.
    pub fn fixed(max: f64) -> Self {
        let boundaries = [-4.0, -3.25, -0.5, max - 2.5, max - 1.5, max - 0.5]
            .map(|count| normalize_count(count, max));
        Self::from_boundaries(max, boundaries)
    }

    /// Legacy scale whose near-capacity bands are `close` units wide.
    pub fn with_close(max: f64, close: f64) -> Self {
        let l = domain_width(max);
        let boundaries = [
            1.0 / l,
            2.0 / l,
            5.0 / l,
            (l - 2.0 * close) / l,
            (l - close) / l,
            LEGACY_FULL_START,
        ];
        Self::from_boundaries(max, boundaries)
    }

    /// Scale for a grid under the configured sizing policy.
    ///
    /// With `use_payload_close` set, a grid that carries `close` is drawn
    /// with the legacy bands even when `near_capacity` is `fixed`.
    pub fn for_grid(grid: &Grid, settings: &ScaleSettings) -> Self {
        let payload_close = grid.close().filter(|_| settings.use_payload_close);
        let close = match (settings.near_capacity, payload_close) {
            (_, Some(close)) => close,
            (NearCapacityBands::Close, None) => settings.close,
            (NearCapacityBands::Fixed, None) => return Self::fixed(grid.max()),
        };
        log::warn!("Using legacy close-sized colour bands (close = {})", close);
        Self::with_close(grid.max(), close)
    }

    /// Build spans from the six interior boundaries, clamped to a running
    /// maximum inside `[0, 1]`.
    fn from_boundaries(max: f64, boundaries: [f64; 6]) -> Self {
        let mut edges = Vec::with_capacity(8);
        edges.push(0.0);
        let mut floor = 0.0_f64;
        for edge in boundaries {
            if !edge.is_nan() {
                floor = edge.clamp(floor, 1.0);
            }
            edges.push(floor);
        }
        edges.push(1.0);

        let spans: Vec<BandSpan> = ColorBand::ALL
            .iter()
            .zip(edges.windows(2))
            .map(|(band, pair)| BandSpan {
                band: *band,
                lo: pair[0],
                hi: pair[1],
            })
            .collect();

        log::debug!(
            "Colour scale for max {}: {:?}",
            max,
            spans.iter().map(|s| (s.band, s.lo, s.hi)).collect::<Vec<_>>()
        );

        Self { max, spans }
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn spans(&self) -> &[BandSpan] {
        &self.spans
    }

    /// Position of a count on the normalized axis, clamped to `[0, 1]`.
    pub fn normalize(&self, value: f64) -> f64 {
        normalize_count(value, self.max).clamp(0.0, 1.0)
    }

    /// Band a raw (wire) value falls in.
    pub fn classify_value(&self, value: f64) -> ColorBand {
        let position = self.normalize(value);
        self.spans
            .iter()
            .filter(|span| span.width() > 0.0)
            .find(|span| position < span.hi)
            .map(|span| span.band)
            .unwrap_or(ColorBand::Full)
    }

    /// Band a cell is painted in.
    pub fn classify(&self, cell: Cell) -> ColorBand {
        self.classify_value(cell.wire_value())
    }

    /// Stop list for the plotting surface. Zero-width bands are left out.
    pub fn stops(&self) -> Vec<ScaleStop> {
        self.spans
            .iter()
            .filter(|span| span.width() > 0.0)
            .flat_map(|span| {
                [
                    ScaleStop(span.lo, span.band.color().to_string()),
                    ScaleStop(span.hi, span.band.color().to_string()),
                ]
            })
            .collect()
    }
}

/// Width of the count domain `[-5, max]`.
fn domain_width(max: f64) -> f64 {
    max - DOMAIN_FLOOR
}

fn normalize_count(count: f64, max: f64) -> f64 {
    (count - DOMAIN_FLOOR) / domain_width(max)
}
