//! Side-by-side evaluation of every Rs/Bo correlation pairing.

use crate::builder::build_curve;
use crate::curve::{BubblePointResult, PressureCurve};
use crate::error::CurveResult;
use pvt_correlations::{BoMethod, ReservoirInputs, RsMethod};
use rayon::prelude::*;

/// Curve computed for one method pairing.
#[derive(Debug, Clone)]
pub struct MethodCurve {
    pub rs_method: RsMethod,
    pub bo_method: BoMethod,
    pub curve: PressureCurve,
    pub bubble_point: BubblePointResult,
}

/// Every (Rs, Bo) pairing, Rs-major in lookup-table order.
pub fn method_pairs() -> Vec<(RsMethod, BoMethod)> {
    RsMethod::ALL
        .iter()
        .flat_map(|&rs| BoMethod::ALL.iter().map(move |&bo| (rs, bo)))
        .collect()
}

/// Build the curve for every method pairing.
///
/// Curves share nothing, so they are computed in parallel. Results come back in
/// `method_pairs()` order; the first failing pairing aborts the batch.
pub fn build_curve_matrix(
    inputs: &ReservoirInputs,
    sample_count: usize,
) -> CurveResult<Vec<MethodCurve>> {
    method_pairs()
        .into_par_iter()
        .map(|(rs_method, bo_method)| -> CurveResult<MethodCurve> {
            let (curve, bubble_point) = build_curve(inputs, rs_method, bo_method, sample_count)?;
            Ok(MethodCurve {
                rs_method,
                bo_method,
                curve,
                bubble_point,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_cover_all_combinations() {
        let pairs = method_pairs();
        assert_eq!(pairs.len(), RsMethod::ALL.len() * BoMethod::ALL.len());
        assert_eq!(pairs[0], (RsMethod::Glaso, BoMethod::Glaso));
        assert_eq!(pairs[1], (RsMethod::Glaso, BoMethod::Standing));
        assert_eq!(pairs[3], (RsMethod::Standing, BoMethod::Standing));
    }

    #[test]
    fn matrix_matches_individual_builds() {
        let inputs = ReservoirInputs::new(2500.0, 4000.0, 30.0, 0.75, 180.0).unwrap();
        let matrix = build_curve_matrix(&inputs, 50).unwrap();
        assert_eq!(matrix.len(), 4);

        for entry in &matrix {
            let (curve, bubble_point) =
                build_curve(&inputs, entry.rs_method, entry.bo_method, 50).unwrap();
            assert_eq!(entry.curve, curve);
            assert_eq!(entry.bubble_point, bubble_point);
        }
    }

    #[test]
    fn matrix_propagates_failure() {
        let inputs = ReservoirInputs {
            pb: 3000.0,
            pmax: 1000.0,
            api: 30.0,
            gas_sg: 0.75,
            temp: 180.0,
        };
        assert!(build_curve_matrix(&inputs, 50).is_err());
    }
}
