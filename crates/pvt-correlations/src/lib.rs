//! pvt-correlations: black-oil PVT correlations.
//!
//! Provides:
//! - Glaso and Standing solution gas-oil ratio (Rs) correlations
//! - Glaso and Standing oil formation volume factor (Bo) correlations
//! - `RsMethod` / `BoMethod` selections resolved through a name lookup table
//! - `ReservoirInputs` with validation of the field-unit inputs
//!
//! All inputs are in field units: pressure in psia, temperature in °F, oil gravity
//! in °API, gas gravity relative to air. Rs is in scf/STB and Bo in bbl/STB.
//!
//! The raw correlation functions are total over `f64` and never trap; an
//! out-of-domain input shows up as a non-finite result. Use the checked entry
//! points (`RsMethod::evaluate`, `BoMethod::evaluate`) to turn that into a
//! `CorrelationError::Domain`.
//!
//! # Example
//!
//! ```
//! use pvt_correlations::{BoMethod, ReservoirInputs, RsMethod};
//!
//! let inputs = ReservoirInputs::new(5868.0, 6899.0, 42.002, 0.709, 292.1).unwrap();
//! let rs = RsMethod::Glaso
//!     .evaluate(inputs.pb, inputs.temp, inputs.api, inputs.gas_sg)
//!     .unwrap();
//! let bo = BoMethod::Glaso
//!     .evaluate(inputs.temp, rs, inputs.oil_specific_gravity(), inputs.gas_sg)
//!     .unwrap();
//! assert!(bo > 1.0);
//! ```

pub mod error;
pub mod glaso;
pub mod inputs;
pub mod method;
pub mod standing;

// Re-exports for ergonomics
pub use error::{CorrelationError, CorrelationResult};
pub use glaso::{oil_fvf_glaso, solution_gas_oil_ratio_glaso};
pub use inputs::{ReservoirInputs, oil_specific_gravity};
pub use method::{BoCorrelation, BoMethod, RsCorrelation, RsMethod, oil_fvf, solution_gas_oil_ratio};
pub use standing::{oil_fvf_standing, solution_gas_oil_ratio_standing};
