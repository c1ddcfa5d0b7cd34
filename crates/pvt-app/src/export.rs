//! CSV export of computed curves.

use pvt_curve::PressureCurve;
use std::path::Path;
use tracing::info;

use crate::error::{AppError, AppResult};

pub const CURVE_CSV_HEADER: &str = "pressure_psia,rs_scf_per_stb,bo_rb_per_stb";

/// Render a curve as CSV, one row per sample in sweep order.
pub fn curve_to_csv(curve: &PressureCurve) -> String {
    let mut csv = String::from(CURVE_CSV_HEADER);
    csv.push('\n');
    for sample in curve {
        csv.push_str(&format!("{},{},{}\n", sample.pressure, sample.rs, sample.bo));
    }
    csv
}

pub fn write_curve_csv(path: &Path, curve: &PressureCurve) -> AppResult<()> {
    std::fs::write(path, curve_to_csv(curve)).map_err(|source| AppError::OutputFileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), rows = curve.len(), "exported curve");
    Ok(())
}
