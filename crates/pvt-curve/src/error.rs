//! Curve building errors.

use pvt_correlations::CorrelationError;
use thiserror::Error;

/// Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Fewer than two samples requested.
    #[error("Sweep must have at least 2 points, got {0}")]
    TooFewSamples(usize),

    /// Sweep bounds are non-finite or identical.
    #[error("Invalid sweep bounds: {what}")]
    InvalidSweep { what: &'static str },

    /// Reservoir inputs rejected before the sweep started.
    #[error(transparent)]
    Input(#[from] CorrelationError),

    /// A correlation produced a non-finite value at one sweep pressure.
    #[error("Correlation failed at {pressure} psia: {source}")]
    Domain {
        pressure: f64,
        source: CorrelationError,
    },

    #[error("Curve has no samples")]
    EmptyCurve,
}
