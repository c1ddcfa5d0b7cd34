//! Correlation selection.
//!
//! Rs and Bo methods are chosen independently. Each enum resolves to a function
//! pointer through a static table, so adding a correlation means adding a variant
//! and one table row.

use crate::error::{CorrelationError, CorrelationResult};
use crate::{glaso, standing};
use std::fmt;
use std::str::FromStr;

/// Rs correlation signature: `(pressure, temp, api, gas_sg) -> Rs`.
pub type RsCorrelation = fn(f64, f64, f64, f64) -> f64;

/// Bo correlation signature: `(temp, rs, oil_sg, gas_sg) -> Bo`.
pub type BoCorrelation = fn(f64, f64, f64, f64) -> f64;

/// Solution gas-oil ratio correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RsMethod {
    Glaso = 0,
    Standing = 1,
}

/// Oil formation volume factor correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoMethod {
    Glaso = 0,
    Standing = 1,
}

struct Entry<M, F> {
    method: M,
    name: &'static str,
    function: F,
}

// Row order matches the enum discriminants.
static RS_TABLE: [Entry<RsMethod, RsCorrelation>; 2] = [
    Entry {
        method: RsMethod::Glaso,
        name: "Glaso",
        function: glaso::solution_gas_oil_ratio_glaso,
    },
    Entry {
        method: RsMethod::Standing,
        name: "Standing",
        function: standing::solution_gas_oil_ratio_standing,
    },
];

static BO_TABLE: [Entry<BoMethod, BoCorrelation>; 2] = [
    Entry {
        method: BoMethod::Glaso,
        name: "Glaso",
        function: glaso::oil_fvf_glaso,
    },
    Entry {
        method: BoMethod::Standing,
        name: "Standing",
        function: standing::oil_fvf_standing,
    },
];

fn lookup<M: Copy, F>(
    table: &[Entry<M, F>],
    kind: &'static str,
    name: &str,
) -> CorrelationResult<M> {
    let name = name.trim();
    table
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
        .map(|entry| entry.method)
        .ok_or_else(|| CorrelationError::UnknownMethod {
            kind,
            name: name.to_string(),
            expected: table
                .iter()
                .map(|entry| entry.name)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

fn checked(value: f64, what: &'static str) -> CorrelationResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CorrelationError::Domain { what, value })
    }
}

impl RsMethod {
    /// All Rs methods in table order.
    pub const ALL: [RsMethod; 2] = [RsMethod::Glaso, RsMethod::Standing];

    fn entry(self) -> &'static Entry<RsMethod, RsCorrelation> {
        &RS_TABLE[self as usize]
    }

    /// Display name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Raw (unchecked) correlation function.
    pub fn function(self) -> RsCorrelation {
        self.entry().function
    }

    /// Evaluate Rs [scf/STB], rejecting non-finite results.
    pub fn evaluate(self, pressure: f64, temp: f64, api: f64, gas_sg: f64) -> CorrelationResult<f64> {
        checked(
            (self.function())(pressure, temp, api, gas_sg),
            "solution gas-oil ratio",
        )
    }
}

impl BoMethod {
    /// All Bo methods in table order.
    pub const ALL: [BoMethod; 2] = [BoMethod::Glaso, BoMethod::Standing];

    fn entry(self) -> &'static Entry<BoMethod, BoCorrelation> {
        &BO_TABLE[self as usize]
    }

    /// Display name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Raw (unchecked) correlation function.
    pub fn function(self) -> BoCorrelation {
        self.entry().function
    }

    /// Evaluate Bo [bbl/STB], rejecting non-finite results.
    pub fn evaluate(self, temp: f64, rs: f64, oil_sg: f64, gas_sg: f64) -> CorrelationResult<f64> {
        checked(
            (self.function())(temp, rs, oil_sg, gas_sg),
            "oil formation volume factor",
        )
    }
}

/// Checked Rs evaluation for the selected method.
pub fn solution_gas_oil_ratio(
    method: RsMethod,
    pressure: f64,
    temp: f64,
    api: f64,
    gas_sg: f64,
) -> CorrelationResult<f64> {
    method.evaluate(pressure, temp, api, gas_sg)
}

/// Checked Bo evaluation for the selected method.
pub fn oil_fvf(
    method: BoMethod,
    temp: f64,
    rs: f64,
    oil_sg: f64,
    gas_sg: f64,
) -> CorrelationResult<f64> {
    method.evaluate(temp, rs, oil_sg, gas_sg)
}

impl FromStr for RsMethod {
    type Err = CorrelationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(&RS_TABLE, "Rs", s)
    }
}

impl FromStr for BoMethod {
    type Err = CorrelationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(&BO_TABLE, "Bo", s)
    }
}

impl fmt::Display for RsMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for BoMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
