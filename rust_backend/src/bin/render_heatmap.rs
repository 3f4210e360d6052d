//! Heatmap render tool
//!
//! Reads a grid payload from a JSON file and prints the figure JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin render-heatmap --features cli -- grid.json '{"show": "peak", "show_text": true}'
//! ```
//!
//! # Environment Variables
//!
//! - `HEATMAP_CONFIG`: Path to a renderer TOML file (default: search for `heatmap.toml`)
//! - `RUST_LOG`: Log level (default: warn)

use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use occupancy_heatmap::config::RendererConfig;
use occupancy_heatmap::parsing::{parse_grid_json, parse_view_json_str};
use occupancy_heatmap::services::HeatmapRenderer;

const DEFAULT_VIEW: &str = r#"{"show": "all", "show_text": false}"#;

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::WARN),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let grid_path = args
        .get(1)
        .context("Usage: render-heatmap <grid.json> [view-json]")?;
    let view_json = args.get(2).map(|s| s.as_str()).unwrap_or(DEFAULT_VIEW);

    let config = match env::var("HEATMAP_CONFIG") {
        Ok(path) => RendererConfig::from_file(&path)
            .with_context(|| format!("Failed to load renderer config: {}", path))?,
        Err(_) => RendererConfig::from_default_location_or_default(),
    };

    let grid = parse_grid_json(Path::new(grid_path))
        .with_context(|| format!("Failed to read grid payload: {}", grid_path))?;
    let view = parse_view_json_str(view_json).context("Failed to parse view selection")?;
    info!(
        "Rendering {}x{} grid, view {}",
        grid.rows(),
        grid.cols(),
        view.show
    );

    let figure = HeatmapRenderer::new(config).render(&grid, &view);
    println!(
        "{}",
        serde_json::to_string_pretty(&figure).context("Failed to serialize figure")?
    );
    Ok(())
}
