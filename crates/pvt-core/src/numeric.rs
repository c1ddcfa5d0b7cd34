use crate::PvtError;

/// Floating point type used throughout the workspace
pub type Real = f64;

/// Absolute/relative tolerance pair
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PvtError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PvtError::NonFinite { what, value: v })
    }
}

/// Require `v` to be finite and strictly greater than `lower`.
pub fn ensure_above(
    v: Real,
    lower: Real,
    what: &'static str,
    reason: &'static str,
) -> Result<Real, PvtError> {
    let v = ensure_finite(v, what)?;
    if v > lower {
        Ok(v)
    } else {
        Err(PvtError::OutOfRange {
            what,
            value: v,
            reason,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn nearly_equal_is_symmetric(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }
    }
}
