//! pvt-curve: pressure sweeps of the black-oil correlations.
//!
//! Provides:
//! - `PressureSweep` linear pressure grids
//! - `build_curve`, which assembles a Bo(p)/Rs(p) curve across the bubble point
//! - `build_curve_matrix`, which evaluates every Rs/Bo method pair in parallel
//!
//! # Example
//!
//! ```
//! use pvt_correlations::{BoMethod, ReservoirInputs, RsMethod};
//! use pvt_curve::{DEFAULT_SAMPLE_COUNT, build_curve};
//!
//! let inputs = ReservoirInputs::new(5868.0, 6899.0, 42.002, 0.709, 292.1).unwrap();
//! let (curve, bubble_point) =
//!     build_curve(&inputs, RsMethod::Glaso, BoMethod::Glaso, DEFAULT_SAMPLE_COUNT).unwrap();
//! assert_eq!(curve.len(), DEFAULT_SAMPLE_COUNT);
//! println!("Bo at Pb: {:.4} bbl/STB", bubble_point.bo_at_pb);
//! ```

pub mod builder;
pub mod curve;
pub mod error;
pub mod matrix;
pub mod sweeps;

pub use builder::{DEFAULT_SAMPLE_COUNT, OIL_COMPRESSIBILITY_PER_PSI, build_curve};
pub use curve::{BubblePointResult, CurveSample, PressureBranch, PressureCurve};
pub use error::{CurveError, CurveResult};
pub use matrix::{MethodCurve, build_curve_matrix, method_pairs};
pub use sweeps::PressureSweep;
