//! Curve and bubble-point result types.

use pvt_correlations::{BoMethod, RsMethod};

/// Which side of the bubble point a sample was evaluated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressureBranch {
    /// `p >= pb`: Rs frozen at its bubble-point value, Bo extrapolated with oil
    /// compressibility.
    AtOrAboveBubblePoint,
    /// `p < pb`: gas has come out of solution; Rs and Bo re-evaluated at `p`.
    BelowBubblePoint,
}

impl PressureBranch {
    pub fn for_pressure(pressure: f64, pb: f64) -> Self {
        if pressure >= pb {
            Self::AtOrAboveBubblePoint
        } else {
            Self::BelowBubblePoint
        }
    }
}

/// One point of a pressure curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSample {
    /// Pressure [psia]
    pub pressure: f64,
    /// Solution gas-oil ratio [scf/STB]
    pub rs: f64,
    /// Oil formation volume factor [bbl/STB]
    pub bo: f64,
    pub branch: PressureBranch,
}

/// Samples of one sweep, ordered by strictly decreasing pressure.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureCurve {
    pub rs_method: RsMethod,
    pub bo_method: BoMethod,
    samples: Vec<CurveSample>,
}

impl PressureCurve {
    pub(crate) fn new(rs_method: RsMethod, bo_method: BoMethod, samples: Vec<CurveSample>) -> Self {
        Self {
            rs_method,
            bo_method,
            samples,
        }
    }

    pub fn samples(&self) -> &[CurveSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CurveSample> {
        self.samples.iter()
    }

    /// Get pressure array [psia]
    pub fn pressures(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.pressure).collect()
    }

    /// Get Rs array [scf/STB]
    pub fn rs_values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.rs).collect()
    }

    /// Get Bo array [bbl/STB]
    pub fn bo_values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.bo).collect()
    }

    /// Index of the sample closest to `pressure` (first one wins on a tie).
    pub fn nearest_index(&self, pressure: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, sample) in self.samples.iter().enumerate() {
            let distance = (sample.pressure - pressure).abs();
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((i, distance)),
            }
        }
        best.map(|(i, _)| i)
    }
}

impl<'a> IntoIterator for &'a PressureCurve {
    type Item = &'a CurveSample;
    type IntoIter = std::slice::Iter<'a, CurveSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Bubble-point summary of one sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubblePointResult {
    /// Requested bubble-point pressure [psia]
    pub pb: f64,
    /// Rs evaluated exactly at `pb` [scf/STB]
    pub rs_at_pb: f64,
    /// Bo evaluated exactly at `pb` [bbl/STB]
    pub bo_at_pb: f64,
    /// Index of the curve sample nearest to `pb`
    pub sample_index: usize,
    /// Pressure of that sample [psia]
    pub sample_pressure: f64,
    /// Bo of that sample [bbl/STB]; this is the value a plot marker sits on
    pub sample_bo: f64,
}
