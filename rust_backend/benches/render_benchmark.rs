use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use chrono::NaiveDate;
use occupancy_heatmap::algorithms::colorscale::ColorScale;
use occupancy_heatmap::core::domain::{Cell, Grid, HoverValue, ViewMode, ViewSelector};
use occupancy_heatmap::parsing::parse_grid_json_str;
use occupancy_heatmap::services::render_heatmap;
use occupancy_heatmap::time::{descending_slot_labels, week_axis};

fn week_grid(nr_slots: usize, max: f64) -> Grid {
    let cells: Vec<Vec<Cell>> = (0..nr_slots)
        .map(|row| {
            (0..7)
                .map(|col| match (row * 7 + col) % 17 {
                    0 => Cell::Empty,
                    1 => Cell::Own,
                    n => Cell::Occupied((n % (max as usize + 1)) as f64),
                })
                .collect()
        })
        .collect();
    let hover = cells
        .iter()
        .map(|row| {
            row.iter()
                .map(|c| HoverValue::Count(c.wire_value().max(0.0)))
                .collect()
        })
        .collect();
    Grid::new(
        cells,
        week_axis(NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(), 7),
        descending_slot_labels(nr_slots).unwrap(),
        hover,
        max,
    )
    .unwrap()
    .with_nr_slots(nr_slots)
    .unwrap()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let grid = week_grid(96, 10.0);

    for mode in [ViewMode::All, ViewMode::Peak] {
        for show_text in [false, true] {
            let view = ViewSelector::new(mode, show_text);
            let id = format!("{}_text_{}", mode, show_text);
            group.bench_with_input(BenchmarkId::new("week_96", id), &view, |b, view| {
                b.iter(|| render_heatmap(black_box(&grid), black_box(view)));
            });
        }
    }

    group.finish();
}

fn bench_slot_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("slot_resolution");

    for nr_slots in [24, 48, 96, 288] {
        let grid = week_grid(nr_slots, 10.0);
        group.bench_with_input(BenchmarkId::new("all_text", nr_slots), &grid, |b, grid| {
            b.iter(|| render_heatmap(black_box(grid), &ViewSelector::new(ViewMode::All, true)));
        });
    }

    group.finish();
}

fn bench_colorscale(c: &mut Criterion) {
    let mut group = c.benchmark_group("colorscale");

    group.bench_function("build_and_classify", |b| {
        b.iter(|| {
            let scale = ColorScale::fixed(black_box(10.0));
            for i in -5..=10 {
                black_box(scale.classify_value(i as f64));
            }
        });
    });

    group.finish();
}

fn bench_parse_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end");

    let grid = week_grid(96, 10.0);
    let payload = serde_json::json!({
        "z": grid.z_values(),
        "x": grid.x(),
        "y": grid.y(),
        "hover": grid.hover(),
        "max": grid.max(),
        "nr_slots": 96,
    })
    .to_string();

    group.bench_function("parse_render_serialize", |b| {
        b.iter(|| {
            let grid = parse_grid_json_str(black_box(&payload)).unwrap();
            let figure = render_heatmap(&grid, &ViewSelector::new(ViewMode::Peak, true));
            black_box(figure.to_json_string().unwrap())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_render,
    bench_slot_resolution,
    bench_colorscale,
    bench_parse_and_render
);
criterion_main!(benches);
