//! Case loading, saving, validation and scaffolding.

use pvt_project::{Case, ResolvedCase};
use std::path::Path;
use tracing::info;

use crate::error::{AppError, AppResult};

/// Load and validate a case file (YAML, or JSON for `.json`).
pub fn load_case(path: &Path) -> AppResult<Case> {
    let case = pvt_project::load_case(path)?;
    info!(path = %path.display(), name = %case.name, "loaded case");
    Ok(case)
}

/// Validate and save a case file.
pub fn save_case(path: &Path, case: &Case) -> AppResult<()> {
    pvt_project::save_case(path, case)?;
    info!(path = %path.display(), "saved case");
    Ok(())
}

/// Check a case and convert it to library types.
pub fn resolve_case(case: &Case) -> AppResult<ResolvedCase> {
    Ok(pvt_project::resolve_case(case)?)
}

/// Write the starter case to `path`.
///
/// Refuses to replace an existing file unless `overwrite` is set.
pub fn init_case(path: &Path, overwrite: bool) -> AppResult<Case> {
    if path.exists() && !overwrite {
        return Err(AppError::CaseExists {
            path: path.to_path_buf(),
        });
    }
    let case = pvt_project::default_case();
    save_case(path, &case)?;
    Ok(case)
}
