//! Model load errors
//!
//! Only produced on the load path. Scoring itself never fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model not found: {0}")]
    NotFound(String),

    #[error("failed to read model {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid model file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid feature layout: {0}")]
    Features(String),

    #[error("invalid weights: {0}")]
    Weights(String),

    #[error("cutoff {0} outside [0, 1]")]
    Cutoff(f64),
}
