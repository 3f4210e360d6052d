//! Declarative chart specification produced by a render.
//!
//! The structures serialize to the figure JSON a Plotly-style plotting surface
//! accepts directly (`{"data": [...], "layout": {...}}`), so the host can hand
//! the output to its graph component untouched.

use serde::{Deserialize, Serialize};

use crate::core::domain::HoverValue;

/// A complete figure: one heatmap series, an optional text overlay, and the layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    /// The colour-mapped grid series.
    pub fn heatmap(&self) -> Option<&HeatmapTrace> {
        self.data.iter().find_map(|trace| match trace {
            Trace::Heatmap(heatmap) => Some(heatmap),
            _ => None,
        })
    }

    /// The text overlay series, when labels are rendered as a series.
    pub fn text_overlay(&self) -> Option<&TextOverlayTrace> {
        self.data.iter().find_map(|trace| match trace {
            Trace::Scatter(overlay) => Some(overlay),
            _ => None,
        })
    }

    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Heatmap(HeatmapTrace),
    Scatter(TextOverlayTrace),
}

/// One colour-scale stop: normalized position and colour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleStop(pub f64, pub String);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapTrace {
    pub name: String,
    pub z: Vec<Vec<f64>>,
    pub x: Vec<f64>,
    pub y: Vec<String>,
    pub text: Vec<Vec<HoverValue>>,
    pub hovertemplate: String,
    pub showscale: bool,
    pub hoverongaps: bool,
    pub zmin: f64,
    pub zmax: f64,
    pub xgap: f64,
    pub ygap: f64,
    pub colorscale: Vec<ScaleStop>,
}

/// Remaining-capacity (or occupancy) labels drawn as their own series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextOverlayTrace {
    pub name: String,
    pub mode: String,
    pub x: Vec<f64>,
    pub y: Vec<String>,
    pub text: Vec<String>,
    pub textfont: PointFonts,
    pub hoverinfo: String,
    pub showlegend: bool,
}

impl TextOverlayTrace {
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Per-point text colours.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointFonts {
    pub color: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub t: u32,
    pub r: u32,
    pub l: u32,
    pub b: u32,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            t: 40,
            r: 0,
            l: 40,
            b: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub margin: Margin,
    pub xaxis: XAxis,
    pub yaxis: YAxis,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XAxis {
    pub mirror: String,
    pub side: String,
    pub fixedrange: bool,
    #[serde(rename = "type")]
    pub axis_type: String,
    pub tickformat: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dtick: Option<f64>,
    pub tick0: f64,
    pub ticklen: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YAxis {
    pub fixedrange: bool,
    pub range: [f64; 2],
    pub tickmode: String,
    pub tickvals: Vec<f64>,
    pub ticktext: Vec<String>,
    pub ticklen: u32,
}

/// Legacy in-cell label placed through the layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub x: f64,
    pub y: String,
    pub text: String,
    pub font: Font,
    pub showarrow: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub color: String,
}
