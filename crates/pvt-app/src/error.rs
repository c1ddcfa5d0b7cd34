//! Error types for the pvt-app service layer.

use crate::reference::ReferenceError;
use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and gives
/// front ends one error to report.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Case error: {0}")]
    Case(String),

    #[error("Case file already exists: {path}")]
    CaseExists { path: PathBuf },

    #[error("Curve computation failed: {0}")]
    Curve(String),

    #[error("Failed to read reference file: {path}")]
    ReferenceFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid reference data in {path}: {source}")]
    Reference {
        path: PathBuf,
        source: ReferenceError,
    },

    #[error("Failed to write output file: {path}")]
    OutputFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pvt-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<pvt_project::ProjectError> for AppError {
    fn from(err: pvt_project::ProjectError) -> Self {
        AppError::Case(err.to_string())
    }
}

impl From<pvt_project::ValidationError> for AppError {
    fn from(err: pvt_project::ValidationError) -> Self {
        AppError::Case(err.to_string())
    }
}

impl From<pvt_curve::CurveError> for AppError {
    fn from(err: pvt_curve::CurveError) -> Self {
        AppError::Curve(err.to_string())
    }
}

impl From<pvt_correlations::CorrelationError> for AppError {
    fn from(err: pvt_correlations::CorrelationError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}
