//! Bo(p) curve assembly across the bubble point.

use crate::curve::{BubblePointResult, CurveSample, PressureBranch, PressureCurve};
use crate::error::{CurveError, CurveResult};
use crate::sweeps::PressureSweep;
use pvt_correlations::{BoMethod, ReservoirInputs, RsMethod};
use tracing::{debug, warn};

/// Sweep resolution used when the caller has no preference.
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

/// Isothermal oil compressibility applied above the bubble point [1/psi].
pub const OIL_COMPRESSIBILITY_PER_PSI: f64 = 1.5e-5;

/// Build the Rs/Bo curve from `pmax` down to 0 psia.
///
/// At and above `pb` no more gas can dissolve, so Rs stays at its bubble-point
/// value and Bo shrinks from `Bo(pb)` with constant oil compressibility:
/// `Bo(p) = Bo(pb)·exp(-co·(p - pb))`. Below `pb` both Rs and Bo are evaluated
/// from the selected correlations at the sweep pressure.
///
/// Any non-finite intermediate fails the whole build; no partial curve is
/// returned.
///
/// # Arguments
///
/// - `inputs`: Reservoir description; validated before sweeping
/// - `rs_method`: Correlation for the solution gas-oil ratio
/// - `bo_method`: Correlation for the formation volume factor
/// - `sample_count`: Number of sweep points (at least 2)
pub fn build_curve(
    inputs: &ReservoirInputs,
    rs_method: RsMethod,
    bo_method: BoMethod,
    sample_count: usize,
) -> CurveResult<(PressureCurve, BubblePointResult)> {
    inputs.validate()?;
    let sweep = PressureSweep::depletion(inputs.pmax, sample_count)?;
    let oil_sg = inputs.oil_specific_gravity();

    let rs_at = |pressure: f64| {
        rs_method
            .evaluate(pressure, inputs.temp, inputs.api, inputs.gas_sg)
            .map_err(|source| CurveError::Domain { pressure, source })
    };
    let bo_at = |pressure: f64, rs: f64| {
        bo_method
            .evaluate(inputs.temp, rs, oil_sg, inputs.gas_sg)
            .map_err(|source| CurveError::Domain { pressure, source })
    };

    // Constant over the whole upper branch
    let rs_pb = rs_at(inputs.pb)?;
    let bo_pb = bo_at(inputs.pb, rs_pb)?;

    debug!(
        rs = %rs_method,
        bo = %bo_method,
        pb = inputs.pb,
        rs_pb,
        bo_pb,
        "{sweep}"
    );

    let samples = sweep
        .generate_points()
        .into_iter()
        .map(|pressure| -> CurveResult<CurveSample> {
            let branch = PressureBranch::for_pressure(pressure, inputs.pb);
            let (rs, bo) = match branch {
                PressureBranch::AtOrAboveBubblePoint => {
                    let shrink = (-OIL_COMPRESSIBILITY_PER_PSI * (pressure - inputs.pb)).exp();
                    (rs_pb, bo_pb * shrink)
                }
                PressureBranch::BelowBubblePoint => {
                    let rs = rs_at(pressure)?;
                    (rs, bo_at(pressure, rs)?)
                }
            };
            Ok(CurveSample {
                pressure,
                rs,
                bo,
                branch,
            })
        })
        .collect::<CurveResult<Vec<_>>>()
        .inspect_err(|err| warn!(rs = %rs_method, bo = %bo_method, "curve build failed: {err}"))?;

    let curve = PressureCurve::new(rs_method, bo_method, samples);
    let sample_index = curve.nearest_index(inputs.pb).ok_or(CurveError::EmptyCurve)?;
    let nearest = curve.samples()[sample_index];

    let bubble_point = BubblePointResult {
        pb: inputs.pb,
        rs_at_pb: rs_pb,
        bo_at_pb: bo_pb,
        sample_index,
        sample_pressure: nearest.pressure,
        sample_bo: nearest.bo,
    };

    Ok((curve, bubble_point))
}
