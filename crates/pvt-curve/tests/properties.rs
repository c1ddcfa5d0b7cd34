use proptest::prelude::*;
use pvt_correlations::{BoMethod, ReservoirInputs, RsMethod};
use pvt_curve::{PressureBranch, build_curve};

fn inputs() -> impl Strategy<Value = ReservoirInputs> {
    (
        100.0_f64..8_000.0,
        0.0_f64..3_000.0,
        15.0_f64..60.0,
        0.6_f64..1.2,
        100.0_f64..300.0,
    )
        .prop_map(|(pb, extra, api, gas_sg, temp)| ReservoirInputs {
            pb,
            pmax: pb + extra,
            api,
            gas_sg,
            temp,
        })
}

proptest! {
    #[test]
    fn curve_shape_holds_for_valid_inputs(
        inputs in inputs(),
        sample_count in 2_usize..300,
        rs_standing in any::<bool>(),
        bo_standing in any::<bool>(),
    ) {
        let rs_method = if rs_standing { RsMethod::Standing } else { RsMethod::Glaso };
        let bo_method = if bo_standing { BoMethod::Standing } else { BoMethod::Glaso };
        let (curve, bp) = build_curve(&inputs, rs_method, bo_method, sample_count).unwrap();

        prop_assert_eq!(curve.len(), sample_count);
        let pressures = curve.pressures();
        prop_assert!(pressures.windows(2).all(|w| w[0] > w[1]));

        // Upper branch is one contiguous block at the start of the curve
        let first_below = curve
            .iter()
            .position(|s| s.branch == PressureBranch::BelowBubblePoint)
            .unwrap_or(curve.len());
        prop_assert!(curve.samples()[first_below..]
            .iter()
            .all(|s| s.branch == PressureBranch::BelowBubblePoint));

        // Rs never increases while pressure drops
        let rs = curve.rs_values();
        prop_assert!(rs.windows(2).all(|w| w[0] >= w[1]));

        let nearest = curve.samples()[bp.sample_index];
        prop_assert!(pressures
            .iter()
            .all(|p| (p - inputs.pb).abs() >= (nearest.pressure - inputs.pb).abs()));
        prop_assert_eq!(nearest.bo, bp.sample_bo);
    }
}
