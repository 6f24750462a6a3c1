//! Error types for reading, writing and checking analytics.
//!
//! The DTOs themselves never fail. Everything that can go wrong happens
//! around them: I/O, malformed JSON, or values that break an invariant.

use std::path::PathBuf;

use crate::consistency::ConsistencyReport;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid analytics JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid field values: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Inconsistent analytics: {0}")]
    Inconsistent(ConsistencyReport),
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
