//! Error types for camviz.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for camviz operations.
#[derive(Error, Debug)]
pub enum CamvizError {
    /// Caller supplied inconsistent input (e.g. per-camera lists of different lengths).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A geometric precondition was violated (non-orthonormal rotation, bad fov or zoom).
    #[error("geometry precondition violated: {0}")]
    GeometryPrecondition(String),

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A geometry file exists but could not be loaded.
    #[error("failed to load '{path}': {reason}")]
    Load { path: PathBuf, reason: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CamvizError {
    /// Builds a [`CamvizError::Load`] for `path`.
    pub fn load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Load {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// A specialized Result type for camviz operations.
pub type Result<T> = std::result::Result<T, CamvizError>;
