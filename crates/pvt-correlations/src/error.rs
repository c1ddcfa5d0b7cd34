//! Correlation errors.

use pvt_core::PvtError;
use thiserror::Error;

/// Result type for correlation operations.
pub type CorrelationResult<T> = Result<T, CorrelationError>;

/// Errors that can occur when evaluating or selecting a correlation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CorrelationError {
    /// A correlation produced a non-finite value (log of a non-positive number,
    /// negative radicand, negative base under a fractional power).
    #[error("Non-physical result for {what}: {value}")]
    Domain { what: &'static str, value: f64 },

    /// Correlation name not present in the lookup table.
    #[error("Unknown {kind} correlation '{name}' (expected one of: {expected})")]
    UnknownMethod {
        kind: &'static str,
        name: String,
        expected: String,
    },

    /// Reservoir input rejected by validation.
    #[error("Invalid reservoir input: {0}")]
    InvalidInput(#[from] PvtError),
}
