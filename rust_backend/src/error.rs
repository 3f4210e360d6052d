//! Error types for grid validation, payload decoding and configuration.

/// Result type for heatmap operations
pub type HeatmapResult<T> = Result<T, HeatmapError>;

/// Error type for heatmap operations
#[derive(Debug, thiserror::Error)]
pub enum HeatmapError {
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("Invalid view selection: {0}")]
    InvalidView(String),

    #[error("Parse error at `{path}`: {message}")]
    Parse { path: String, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HeatmapError {
    pub(crate) fn invalid_grid(msg: impl Into<String>) -> Self {
        HeatmapError::InvalidGrid(msg.into())
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for HeatmapError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        HeatmapError::Parse {
            path: err.path().to_string(),
            message: err.inner().to_string(),
        }
    }
}
