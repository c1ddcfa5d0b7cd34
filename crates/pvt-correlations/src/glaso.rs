//! Glaso (1980) correlations for North Sea crudes.

const QUAD_A: f64 = -0.30218;
const QUAD_B: f64 = 1.7447;
const QUAD_C0: f64 = 1.7669;

const BO_Y_GAS_EXPONENT: f64 = 0.526;
const BO_Y_TEMP_FACTOR: f64 = 0.968;

/// Glaso correlating number `chi` (often written p_b*) for a given pressure.
///
/// Solves `a·x² + b·x + c = 0` with `c = 1.7669 - log10(p)` in closed form and
/// returns `10^x`. The radicand goes negative above roughly 19 300 psia, where the
/// result is NaN.
fn correlating_number(pressure: f64) -> f64 {
    let c = QUAD_C0 - pressure.log10();
    let discriminant = QUAD_B.powi(2) - 4.0 * QUAD_A * c;
    10f64.powf((-QUAD_B + discriminant.sqrt()) / (2.0 * QUAD_A))
}

/// Solution gas-oil ratio [scf/STB] by Glaso.
///
/// # Arguments
/// * pressure: pressure in psia (> 0)
/// * temp: temperature in °F
/// * api: stock-tank oil gravity in °API
/// * gas_sg: gas specific gravity (air = 1)
pub fn solution_gas_oil_ratio_glaso(pressure: f64, temp: f64, api: f64, gas_sg: f64) -> f64 {
    let chi = correlating_number(pressure);
    (chi * api.powf(0.989) / temp.powf(0.172)).powf(1.0 / 0.816) * gas_sg
}

/// Oil formation volume factor [bbl/STB] by Glaso.
///
/// `Bo = 1 + 10^(-6.58511 + 2.91329·log10(y) - 0.27683·log10(y)²)` with
/// `y = Rs·(γg/γo)^0.526 + 0.968·T`. Requires `y > 0`.
pub fn oil_fvf_glaso(temp: f64, rs: f64, oil_sg: f64, gas_sg: f64) -> f64 {
    let y = rs * (gas_sg / oil_sg).powf(BO_Y_GAS_EXPONENT) + BO_Y_TEMP_FACTOR * temp;
    let log_y = y.log10();
    let log_bo_minus_one = -6.58511 + 2.91329 * log_y - 0.27683 * log_y.powi(2);
    10f64.powf(log_bo_minus_one) + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pvt_core::{Tolerances, nearly_equal};

    const TOL: Tolerances = Tolerances {
        abs: 1e-12,
        rel: 1e-6,
    };

    #[test]
    fn rs_reference_value() {
        let rs = solution_gas_oil_ratio_glaso(1000.0, 200.0, 35.0, 0.8);
        assert!(nearly_equal(rs, 199.493_081_6, TOL), "rs = {rs}");
    }

    #[test]
    fn bo_reference_value() {
        let bo = oil_fvf_glaso(200.0, 500.0, 0.85, 0.8);
        assert!(nearly_equal(bo, 1.277_953_564, TOL), "bo = {bo}");
    }

    #[test]
    fn correlating_number_grows_with_pressure() {
        let low = correlating_number(500.0);
        let high = correlating_number(5000.0);
        assert!(low > 0.0);
        assert!(high > low);
    }

    #[test]
    fn zero_pressure_gives_zero_rs() {
        // log10(0) = -inf drives chi to zero rather than NaN
        let rs = solution_gas_oil_ratio_glaso(0.0, 200.0, 35.0, 0.8);
        assert_eq!(rs, 0.0);
    }

    #[test]
    fn negative_radicand_is_nan() {
        let rs = solution_gas_oil_ratio_glaso(25_000.0, 200.0, 35.0, 0.8);
        assert!(rs.is_nan());
    }

    #[test]
    fn non_positive_y_is_not_finite() {
        let bo = oil_fvf_glaso(-100.0, 0.0, 0.85, 0.8);
        assert!(bo.is_nan());
    }
}
