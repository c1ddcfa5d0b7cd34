//! pvt-core: shared foundation for the PVT curve crates.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;

pub use error::{PvtError, PvtResult};
pub use numeric::*;
