//! Standing (1947) correlations for California crudes.

/// Solution gas-oil ratio [scf/STB] by Standing.
///
/// `Rs = γg·((p/18.2 + 1.4)·10^(0.0125·API) / 10^(0.00091·T))^(1/0.83)`.
/// Defined for `p ≥ -25.48`.
pub fn solution_gas_oil_ratio_standing(pressure: f64, temp: f64, api: f64, gas_sg: f64) -> f64 {
    let base = (pressure / 18.2 + 1.4) * 10f64.powf(0.0125 * api) / 10f64.powf(0.00091 * temp);
    base.powf(1.0 / 0.83) * gas_sg
}

/// Oil formation volume factor [bbl/STB] by Standing.
pub fn oil_fvf_standing(temp: f64, rs: f64, oil_sg: f64, gas_sg: f64) -> f64 {
    let term = rs * (gas_sg / oil_sg).powf(0.5) + 1.25 * temp;
    0.972 + 1.47e-4 * term.powf(1.175)
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
        let rs = solution_gas_oil_ratio_standing(1000.0, 200.0, 35.0, 0.8);
        assert!(nearly_equal(rs, 209.115_459_1, TOL), "rs = {rs}");
    }

    #[test]
    fn bo_reference_value() {
        let bo = oil_fvf_standing(200.0, 500.0, 0.85, 0.8);
        assert!(nearly_equal(bo, 1.314_968_649, TOL), "bo = {bo}");
    }

    #[test]
    fn rs_is_positive_at_zero_pressure() {
        let rs = solution_gas_oil_ratio_standing(0.0, 200.0, 35.0, 0.8);
        assert!(rs > 0.0);
    }

    #[test]
    fn rs_below_domain_is_nan() {
        let rs = solution_gas_oil_ratio_standing(-100.0, 200.0, 35.0, 0.8);
        assert!(rs.is_nan());
    }
}
