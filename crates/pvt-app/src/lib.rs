//! Shared application service layer for the PVT curve tools.
//!
//! Front ends go through this crate to load and validate cases, compute curves,
//! read measured reference tables and shape the results for plotting or export.

pub mod case_service;
pub mod curve_service;
pub mod error;
pub mod export;
pub mod plot;
pub mod reference;

// Re-export key types for convenience
pub use case_service::{init_case, load_case, resolve_case, save_case};
pub use curve_service::{
    CurveReport, CurveRequest, MethodSummary, compare_methods, run_case, run_curve,
    run_resolved_case,
};
pub use error::{AppError, AppResult};
pub use export::{curve_to_csv, write_curve_csv};
pub use plot::{AxisLabel, CurveData, PlotSeries, plot_series, plot_series_json};
pub use reference::{
    ReferenceError, ReferencePoint, ReferenceTable, load_reference_table, parse_reference_table,
};
