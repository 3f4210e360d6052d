//! Integration tests for the render pipeline, from host JSON to figure JSON.
//!
//! These tests ensure that:
//! 1. A full week of quarter-hour slots renders with the expected layout
//! 2. View modes scope the y range and the labels but never the series data
//! 3. Empty and saturated cells are never labelled
//! 4. The figure JSON has the shape the plotting surface expects

use chrono::NaiveDate;
use proptest::prelude::*;
use serde_json::{json, Value};

use occupancy_heatmap::config::{LabelPolicy, OverlayStyle, RendererConfig};
use occupancy_heatmap::core::domain::{Cell, Grid, HoverValue, ViewMode, ViewSelector};
use occupancy_heatmap::parsing::{parse_grid_json_str, parse_view_json_str};
use occupancy_heatmap::services::{render_heatmap, HeatmapRenderer};
use occupancy_heatmap::time::{descending_slot_labels, week_axis};

// ==================== Helper Functions ====================

const MAX: f64 = 10.0;

/// A week of 15-minute slots where the count is a function of the slot.
fn week_payload() -> Value {
    let y = descending_slot_labels(96).unwrap();
    let x = week_axis(NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(), 7);
    let z: Vec<Vec<f64>> = (0..96)
        .map(|row| {
            (0..7)
                .map(|col| {
                    if col == 0 && row >= 80 {
                        -4.5
                    } else {
                        ((row + col) % 12) as f64
                    }
                })
                .collect()
        })
        .collect();
    let hover: Vec<Vec<f64>> = z
        .iter()
        .map(|row| row.iter().map(|v| v.max(0.0)).collect())
        .collect();
    json!({ "z": z, "x": x, "y": y, "hover": hover, "max": MAX, "nr_slots": 96 })
}

fn week_grid() -> Grid {
    parse_grid_json_str(&week_payload().to_string()).unwrap()
}

fn render_json(grid: &Grid, show: &str, show_text: bool) -> Value {
    let view = parse_view_json_str(&json!({ "show": show, "show_text": show_text }).to_string())
        .unwrap();
    render_heatmap(grid, &view).to_json().unwrap()
}

// ==================== Tests ====================

#[test]
fn test_week_figure_shape() {
    let figure = render_json(&week_grid(), "all", false);

    let data = figure["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["type"], "heatmap");
    assert_eq!(data[0]["z"].as_array().unwrap().len(), 96);
    assert_eq!(data[0]["hovertemplate"], "%{y}: %{text}");
    assert_eq!(data[0]["zmin"], -5.0);
    assert_eq!(data[0]["zmax"], MAX);
    assert_eq!(data[0]["showscale"], false);

    let layout = &figure["layout"];
    assert_eq!(layout["xaxis"]["dtick"], 86_400_000.0);
    assert_eq!(layout["xaxis"]["tick0"], 1_614_556_800_000.0);
    assert_eq!(layout["xaxis"]["tickformat"], "%a\n%d/%m");
    assert_eq!(layout["xaxis"]["mirror"], "allticks");
    assert_eq!(layout["yaxis"]["range"], json!([-0.5, 95.5]));
    assert_eq!(layout["yaxis"]["tickvals"].as_array().unwrap().len(), 24);
    assert_eq!(layout["margin"], json!({"t": 40, "r": 0, "l": 40, "b": 0}));
    assert!(layout.get("annotations").is_none());
}

#[test]
fn test_colorscale_json_is_stepped() {
    let figure = render_json(&week_grid(), "all", false);
    let stops = figure["data"][0]["colorscale"].as_array().unwrap();
    assert_eq!(stops[0], json!([0.0, "rgb(192,192,192)"]));
    assert_eq!(stops.last().unwrap()[0], 1.0);
    assert_eq!(stops.last().unwrap()[1], "rgb(217, 83, 79)");
}

#[test]
fn test_peak_view_scopes_labels_only() {
    let grid = week_grid();
    let renderer = HeatmapRenderer::default();
    let figure = renderer.render(&grid, &ViewSelector::new(ViewMode::Peak, true));

    assert_eq!(figure.layout.yaxis.range, [3.5, 35.5]);
    assert_eq!(figure.heatmap().unwrap().z.len(), 96);

    let overlay = figure.text_overlay().unwrap();
    let peak_labels: Vec<&String> = grid.y()[4..36].iter().collect();
    assert!(!overlay.is_empty());
    assert!(overlay.y.iter().all(|label| peak_labels.contains(&label)));
}

#[test]
fn test_labels_show_remaining_capacity() {
    let grid = week_grid();
    let figure = render_heatmap(&grid, &ViewSelector::new(ViewMode::All, true));
    let overlay = figure.text_overlay().unwrap();

    // row 0 holds counts 0, 1, 2, ...: 10, 9, 8 places left
    assert_eq!(overlay.y[0], grid.y()[0]);
    assert_eq!(overlay.x[0], grid.x()[0]);
    assert_eq!(overlay.text[..3], ["10", "9", "8"]);
}

#[test]
fn test_occupancy_policy_through_config() {
    let config = RendererConfig::from_toml_str(
        r#"
        [labels]
        policy = "occupancy"
        overlay = "annotations"
        "#,
    )
    .unwrap();
    assert_eq!(config.labels.policy, LabelPolicy::Occupancy);
    assert_eq!(config.labels.overlay, OverlayStyle::Annotations);

    let figure = HeatmapRenderer::new(config)
        .render(&week_grid(), &ViewSelector::new(ViewMode::Pm, true))
        .to_json()
        .unwrap();

    assert_eq!(figure["data"].as_array().unwrap().len(), 1);
    let annotations = figure["layout"]["annotations"].as_array().unwrap();
    assert_eq!(annotations[0]["text"], "0");
    assert_eq!(annotations[1]["text"], "1");
    assert_eq!(annotations[0]["showarrow"], false);
    assert_eq!(annotations[0]["font"]["color"], "rgb(255,255,255)");
}

#[test]
fn test_am_and_pm_cover_the_day() {
    let grid = week_grid();
    let am = render_heatmap(&grid, &ViewSelector::new(ViewMode::Am, false));
    let pm = render_heatmap(&grid, &ViewSelector::new(ViewMode::Pm, false));
    assert_eq!(pm.layout.yaxis.range, [-0.5, 47.5]);
    assert_eq!(am.layout.yaxis.range, [47.5, 95.5]);
}

// ==================== Property Tests ====================

fn cell_strategy() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Empty),
        Just(Cell::Own),
        Just(Cell::Selected),
        (0u32..15).prop_map(|n| Cell::Occupied(n as f64)),
    ]
}

fn grid_strategy() -> impl Strategy<Value = Grid> {
    (1usize..12, 1usize..6, 1u32..12).prop_flat_map(|(rows, cols, max)| {
        prop::collection::vec(prop::collection::vec(cell_strategy(), cols), rows).prop_map(
            move |cells| {
                let hover = cells
                    .iter()
                    .map(|row| {
                        row.iter()
                            .map(|c| HoverValue::Count(c.wire_value().max(0.0)))
                            .collect()
                    })
                    .collect();
                let x = (0..cols).map(|c| c as f64 * 1000.0).collect();
                let y = (0..rows).map(|r| format!("{:02}:00", r)).collect();
                Grid::new(cells, x, y, hover, max as f64).unwrap()
            },
        )
    })
}

fn mode_strategy() -> impl Strategy<Value = ViewMode> {
    prop_oneof![
        Just(ViewMode::Am),
        Just(ViewMode::Pm),
        Just(ViewMode::Peak),
        Just(ViewMode::All),
    ]
}

proptest! {
    #[test]
    fn prop_empty_and_saturated_cells_never_labelled(grid in grid_strategy(), mode in mode_strategy()) {
        let figure = render_heatmap(&grid, &ViewSelector::new(mode, true));
        let overlay = figure.text_overlay().unwrap();
        for (x, y) in overlay.x.iter().zip(&overlay.y) {
            let col = grid.x().iter().position(|v| v == x).unwrap();
            let row = grid.y().iter().position(|v| v == y).unwrap();
            let cell = grid.cell(row, col);
            prop_assert!(!cell.is_empty());
            prop_assert!(!cell.is_saturated(grid.max()));
        }
    }

    #[test]
    fn prop_no_overlay_without_text(grid in grid_strategy(), mode in mode_strategy()) {
        let figure = render_heatmap(&grid, &ViewSelector::new(mode, false));
        prop_assert!(figure.text_overlay().is_none());
        prop_assert!(figure.layout.annotations.is_empty());
    }

    #[test]
    fn prop_y_range_inside_grid(grid in grid_strategy(), mode in mode_strategy()) {
        let figure = render_heatmap(&grid, &ViewSelector::new(mode, false));
        let [lo, hi] = figure.layout.yaxis.range;
        prop_assert!(lo >= -0.5);
        prop_assert!(lo < hi);
        prop_assert!(hi <= grid.rows() as f64 - 0.5);
    }
}
