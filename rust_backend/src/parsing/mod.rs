//! Parsers for the payloads the dashboard host sends.
//!
//! # Parsers
//!
//! - [`payload`]: Parse the occupancy grid and the view selector from JSON
//!
//! # Example
//!
//! ```
//! use occupancy_heatmap::parsing::payload::{parse_grid_json_str, parse_view_json_str};
//!
//! let grid = parse_grid_json_str(
//!     r#"{"z": [[-4.5, 3]], "x": [0, 86400000], "y": ["07:00"], "hover": [[0, 3]], "max": 10}"#,
//! )
//! .expect("Failed to parse grid");
//! let view = parse_view_json_str(r#"{"show": "peak", "show_text": true}"#)
//!     .expect("Failed to parse view");
//!
//! assert_eq!(grid.cols(), 2);
//! assert!(view.show_text);
//! ```

pub mod payload;


pub use payload::{parse_grid_json, parse_grid_json_str, parse_view_json_str};
