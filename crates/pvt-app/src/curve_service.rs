//! Curve runs for ad-hoc requests and case files.

use pvt_correlations::{BoMethod, ReservoirInputs, RsMethod};
use pvt_curve::{
    BubblePointResult, DEFAULT_SAMPLE_COUNT, PressureCurve, build_curve, build_curve_matrix,
};
use pvt_project::ResolvedCase;
use std::path::Path;
use tracing::info;

use crate::case_service;
use crate::error::AppResult;
use crate::reference::{ReferenceTable, load_reference_table};

/// Everything needed to compute one curve.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveRequest {
    pub inputs: ReservoirInputs,
    pub rs_method: RsMethod,
    pub bo_method: BoMethod,
    pub sample_count: usize,
}

impl CurveRequest {
    pub fn new(inputs: ReservoirInputs, rs_method: RsMethod, bo_method: BoMethod) -> Self {
        Self {
            inputs,
            rs_method,
            bo_method,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }

    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }
}

impl From<&ResolvedCase> for CurveRequest {
    fn from(case: &ResolvedCase) -> Self {
        Self {
            inputs: case.inputs,
            rs_method: case.rs_method,
            bo_method: case.bo_method,
            sample_count: case.sample_count,
        }
    }
}

/// Computed curve plus whatever measured data should be shown next to it.
#[derive(Debug, Clone)]
pub struct CurveReport {
    pub name: Option<String>,
    pub request: CurveRequest,
    pub curve: PressureCurve,
    pub bubble_point: BubblePointResult,
    pub reference: Option<ReferenceTable>,
}

impl CurveReport {
    pub fn with_reference(mut self, reference: ReferenceTable) -> Self {
        self.reference = Some(reference);
        self
    }
}

/// Bubble-point values for one method pairing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodSummary {
    pub rs_method: RsMethod,
    pub bo_method: BoMethod,
    pub rs_at_pb: f64,
    pub bo_at_pb: f64,
    /// Bo at the top of the sweep [bbl/STB]
    pub bo_at_pmax: f64,
}

/// Compute one curve.
pub fn run_curve(request: &CurveRequest) -> AppResult<CurveReport> {
    let (curve, bubble_point) = build_curve(
        &request.inputs,
        request.rs_method,
        request.bo_method,
        request.sample_count,
    )?;

    info!(
        rs = %request.rs_method,
        bo = %request.bo_method,
        samples = curve.len(),
        bo_at_pb = bubble_point.bo_at_pb,
        "computed curve"
    );

    Ok(CurveReport {
        name: None,
        request: request.clone(),
        curve,
        bubble_point,
        reference: None,
    })
}

/// Compute the curve for a resolved case and load its reference table.
///
/// A relative reference path is taken relative to `base_dir`.
pub fn run_resolved_case(case: &ResolvedCase, base_dir: &Path) -> AppResult<CurveReport> {
    let mut report = run_curve(&CurveRequest::from(case))?;
    report.name = Some(case.name.clone());

    if let Some(reference) = &case.reference {
        let path = base_dir.join(&reference.path);
        let table =
            load_reference_table(&path, &reference.pressure_column, &reference.fvf_column)?;
        report = report.with_reference(table);
    }

    Ok(report)
}

/// Load a case file and run it.
pub fn run_case(case_path: &Path) -> AppResult<CurveReport> {
    let case = case_service::load_case(case_path)?;
    let resolved = case_service::resolve_case(&case)?;
    let base_dir = case_path.parent().unwrap_or_else(|| Path::new("."));
    run_resolved_case(&resolved, base_dir)
}

/// Bubble-point values of every Rs/Bo pairing for the same reservoir.
pub fn compare_methods(
    inputs: &ReservoirInputs,
    sample_count: usize,
) -> AppResult<Vec<MethodSummary>> {
    let matrix = build_curve_matrix(inputs, sample_count)?;

    Ok(matrix
        .iter()
        .map(|entry| MethodSummary {
            rs_method: entry.rs_method,
            bo_method: entry.bo_method,
            rs_at_pb: entry.bubble_point.rs_at_pb,
            bo_at_pb: entry.bubble_point.bo_at_pb,
            bo_at_pmax: entry.curve.samples().first().map_or(f64::NAN, |s| s.bo),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppError;

    fn inputs() -> ReservoirInputs {
        ReservoirInputs::new(2500.0, 4000.0, 35.0, 0.8, 200.0).unwrap()
    }

    #[test]
    fn run_curve_uses_request_resolution() {
        let request =
            CurveRequest::new(inputs(), RsMethod::Glaso, BoMethod::Standing).with_sample_count(64);
        let report = run_curve(&request).unwrap();
        assert_eq!(report.curve.len(), 64);
        assert_eq!(report.curve.rs_method, RsMethod::Glaso);
        assert_eq!(report.curve.bo_method, BoMethod::Standing);
        assert!(report.reference.is_none());
    }

    #[test]
    fn run_curve_rejects_single_sample() {
        let request =
            CurveRequest::new(inputs(), RsMethod::Glaso, BoMethod::Glaso).with_sample_count(1);
        assert!(matches!(run_curve(&request), Err(AppError::Curve(_))));
    }

    #[test]
    fn compare_methods_covers_every_pairing() {
        let summaries = compare_methods(&inputs(), 100).unwrap();
        assert_eq!(summaries.len(), 4);
        for summary in &summaries {
            assert!(summary.bo_at_pb > summary.bo_at_pmax);
        }
    }
}
