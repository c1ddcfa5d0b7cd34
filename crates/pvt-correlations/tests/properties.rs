//! Physical plausibility properties of the correlations.
//!
//! Ranges are kept to the envelope the correlations were fitted over; the Glaso
//! Rs radicand turns negative above roughly 19 300 psia.

use proptest::prelude::*;
use pvt_correlations::{BoMethod, RsMethod, oil_specific_gravity};

proptest! {
    #[test]
    fn rs_is_finite_and_positive(
        pressure in 1.0_f64..15_000.0,
        temp in 33.0_f64..400.0,
        api in 10.0_f64..70.0,
        gas_sg in 0.5_f64..1.5,
    ) {
        for method in RsMethod::ALL {
            let rs = method.evaluate(pressure, temp, api, gas_sg).unwrap();
            prop_assert!(rs.is_finite() && rs > 0.0, "{method}: rs = {rs}");
        }
    }

    #[test]
    fn rs_is_non_decreasing_in_pressure(
        pressure in 1.0_f64..14_000.0,
        step in 1.0_f64..1_000.0,
        temp in 33.0_f64..400.0,
        api in 10.0_f64..70.0,
        gas_sg in 0.5_f64..1.5,
    ) {
        for method in RsMethod::ALL {
            let low = method.evaluate(pressure, temp, api, gas_sg).unwrap();
            let high = method.evaluate(pressure + step, temp, api, gas_sg).unwrap();
            prop_assert!(high >= low, "{method}: rs({}) = {high} < rs({pressure}) = {low}", pressure + step);
        }
    }

    #[test]
    fn glaso_bo_never_below_one(
        rs in 0.0_f64..3_000.0,
        temp in 33.0_f64..400.0,
        api in 10.0_f64..70.0,
        gas_sg in 0.5_f64..1.5,
    ) {
        let bo = BoMethod::Glaso
            .evaluate(temp, rs, oil_specific_gravity(api), gas_sg)
            .unwrap();
        prop_assert!(bo >= 1.0, "bo = {bo}");
    }

    // Standing's 0.972 intercept only clears 1.0 once the inner term passes ~87.
    #[test]
    fn standing_bo_never_below_one_above_80f(
        rs in 0.0_f64..3_000.0,
        temp in 80.0_f64..400.0,
        api in 10.0_f64..70.0,
        gas_sg in 0.5_f64..1.5,
    ) {
        let bo = BoMethod::Standing
            .evaluate(temp, rs, oil_specific_gravity(api), gas_sg)
            .unwrap();
        prop_assert!(bo >= 1.0, "bo = {bo}");
    }

    #[test]
    fn bo_grows_with_dissolved_gas(
        rs in 0.0_f64..2_000.0,
        extra in 10.0_f64..1_000.0,
        temp in 80.0_f64..400.0,
        api in 10.0_f64..70.0,
        gas_sg in 0.5_f64..1.5,
    ) {
        let oil_sg = oil_specific_gravity(api);
        for method in BoMethod::ALL {
            let lean = method.evaluate(temp, rs, oil_sg, gas_sg).unwrap();
            let rich = method.evaluate(temp, rs + extra, oil_sg, gas_sg).unwrap();
            prop_assert!(rich > lean, "{method}: {rich} <= {lean}");
        }
    }
}
