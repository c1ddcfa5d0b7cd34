//! Reservoir inputs shared by every correlation call.

use crate::error::CorrelationResult;
use pvt_core::{PvtError, ensure_above, ensure_finite};

/// Stock-tank oil specific gravity (water = 1) from API gravity.
///
/// Only meaningful for `api > -131.5`.
pub fn oil_specific_gravity(api: f64) -> f64 {
    141.5 / (api + 131.5)
}

/// Scalar reservoir description in field units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReservoirInputs {
    /// Bubble-point pressure [psia]
    pub pb: f64,
    /// Upper end of the pressure sweep [psia]
    pub pmax: f64,
    /// Stock-tank oil gravity [°API]
    pub api: f64,
    /// Gas specific gravity (air = 1)
    pub gas_sg: f64,
    /// Reservoir temperature [°F]
    pub temp: f64,
}

impl ReservoirInputs {
    /// Create validated inputs.
    pub fn new(pb: f64, pmax: f64, api: f64, gas_sg: f64, temp: f64) -> CorrelationResult<Self> {
        let inputs = Self {
            pb,
            pmax,
            api,
            gas_sg,
            temp,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Check every field against the correlations' physical preconditions.
    pub fn validate(&self) -> CorrelationResult<()> {
        ensure_above(self.pb, 0.0, "bubble point pressure", "must be positive")?;
        let pmax = ensure_finite(self.pmax, "max pressure")?;
        if pmax < self.pb {
            return Err(PvtError::OutOfRange {
                what: "max pressure",
                value: pmax,
                reason: "must not be below the bubble point pressure",
            }
            .into());
        }
        ensure_above(self.api, -131.5, "API gravity", "must exceed -131.5")?;
        ensure_above(self.gas_sg, 0.0, "gas specific gravity", "must be positive")?;
        ensure_above(self.temp, 32.0, "temperature", "must exceed 32 °F")?;
        Ok(())
    }

    /// Stock-tank oil specific gravity derived from `api`.
    pub fn oil_specific_gravity(&self) -> f64 {
        oil_specific_gravity(self.api)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CorrelationError;

    #[test]
    fn oil_sg_of_water_like_oil() {
        assert!((oil_specific_gravity(10.0) - 1.0).abs() < 1e-12);
        assert!((oil_specific_gravity(42.002) - 0.815_552_558).abs() < 1e-9);
    }

    #[test]
    fn accepts_typical_inputs() {
        let inputs = ReservoirInputs::new(5868.0, 6899.0, 42.002, 0.709, 292.1).unwrap();
        assert_eq!(inputs.pb, 5868.0);
        assert!(inputs.oil_specific_gravity() < 1.0);
    }

    #[test]
    fn accepts_pmax_equal_to_pb() {
        assert!(ReservoirInputs::new(3000.0, 3000.0, 35.0, 0.8, 200.0).is_ok());
    }

    #[test]
    fn rejects_pmax_below_pb() {
        let err = ReservoirInputs::new(3000.0, 2500.0, 35.0, 0.8, 200.0).unwrap_err();
        assert!(matches!(
            err,
            CorrelationError::InvalidInput(PvtError::OutOfRange {
                what: "max pressure",
                ..
            })
        ));
    }

    #[test]
    fn rejects_out_of_domain_fields() {
        assert!(ReservoirInputs::new(0.0, 1000.0, 35.0, 0.8, 200.0).is_err());
        assert!(ReservoirInputs::new(1000.0, 2000.0, -131.5, 0.8, 200.0).is_err());
        assert!(ReservoirInputs::new(1000.0, 2000.0, 35.0, 0.0, 200.0).is_err());
        assert!(ReservoirInputs::new(1000.0, 2000.0, 35.0, 0.8, 32.0).is_err());
        assert!(ReservoirInputs::new(1000.0, f64::NAN, 35.0, 0.8, 200.0).is_err());
    }
}
