//! Error types shared across Squatcheck crates.
//!
//! The depth engine itself never fails; these errors belong to the layers
//! around it (reading pose tracks, driving a pose source, loading config).

use std::path::PathBuf;

/// Top-level error type for Squatcheck operations.
#[derive(Debug, thiserror::Error)]
pub enum SquatcheckError {
    #[error("Sampling error: {message}")]
    Sampling { message: String },

    #[error("Pose estimation error: {message}")]
    Estimation { message: String },

    #[error("Invalid pose data at line {line}: {message}")]
    PoseData { line: usize, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using SquatcheckError.
pub type SquatcheckResult<T> = Result<T, SquatcheckError>;

impl SquatcheckError {
    pub fn sampling(msg: impl Into<String>) -> Self {
        Self::Sampling {
            message: msg.into(),
        }
    }

    pub fn estimation(msg: impl Into<String>) -> Self {
        Self::Estimation {
            message: msg.into(),
        }
    }

    pub fn pose_data(line: usize, msg: impl Into<String>) -> Self {
        Self::PoseData {
            line,
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
