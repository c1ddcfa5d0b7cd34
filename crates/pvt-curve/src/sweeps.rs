//! Pressure sweep generation.

use crate::error::{CurveError, CurveResult};
use std::fmt;

/// Linearly spaced pressure grid, inclusive of both ends.
///
/// The start may be above or below the end; points are generated in the order
/// start → end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureSweep {
    /// First pressure [psia]
    pub start_psia: f64,
    /// Last pressure [psia]
    pub end_psia: f64,
    /// Number of points to generate
    pub num_points: usize,
}

impl PressureSweep {
    pub fn new(start_psia: f64, end_psia: f64, num_points: usize) -> CurveResult<Self> {
        if num_points < 2 {
            return Err(CurveError::TooFewSamples(num_points));
        }

        if !start_psia.is_finite() || !end_psia.is_finite() {
            return Err(CurveError::InvalidSweep {
                what: "bounds must be finite",
            });
        }

        if (start_psia - end_psia).abs() < 1e-12 {
            return Err(CurveError::InvalidSweep {
                what: "start and end values must be different",
            });
        }

        Ok(Self {
            start_psia,
            end_psia,
            num_points,
        })
    }

    /// Sweep from `pmax` down to 0 psia, in depletion order.
    pub fn depletion(pmax: f64, num_points: usize) -> CurveResult<Self> {
        Self::new(pmax, 0.0, num_points)
    }

    /// Spacing between consecutive points (negative for descending sweeps).
    pub fn step(&self) -> f64 {
        (self.end_psia - self.start_psia) / (self.num_points - 1) as f64
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        let mut points = Vec::with_capacity(self.num_points);
        let delta = self.step();

        for i in 0..self.num_points {
            points.push(self.start_psia + i as f64 * delta);
        }

        // Ensure exact endpoint
        if let Some(last) = points.last_mut() {
            *last = self.end_psia;
        }
        points
    }
}

impl fmt::Display for PressureSweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pressure sweep from {} to {} psia ({} points)",
            self.start_psia, self.end_psia, self.num_points
        )
    }
}
