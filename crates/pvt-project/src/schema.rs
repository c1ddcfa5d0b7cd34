//! Case schema definitions.

use pvt_correlations::{BoMethod, CorrelationResult, ReservoirInputs, RsMethod};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Case {
    #[serde(default = "default_version")]
    pub version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub reservoir: ReservoirDef,
    #[serde(default)]
    pub correlations: CorrelationsDef,
    #[serde(default)]
    pub sweep: SweepDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<ReferenceDef>,
}

/// Reservoir parameters in field units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservoirDef {
    pub bubble_point_psia: f64,
    pub max_pressure_psia: f64,
    pub api_gravity: f64,
    pub gas_specific_gravity: f64,
    pub temperature_f: f64,
}

impl ReservoirDef {
    pub fn to_inputs(&self) -> CorrelationResult<ReservoirInputs> {
        ReservoirInputs::new(
            self.bubble_point_psia,
            self.max_pressure_psia,
            self.api_gravity,
            self.gas_specific_gravity,
            self.temperature_f,
        )
    }
}

impl From<ReservoirInputs> for ReservoirDef {
    fn from(inputs: ReservoirInputs) -> Self {
        Self {
            bubble_point_psia: inputs.pb,
            max_pressure_psia: inputs.pmax,
            api_gravity: inputs.api,
            gas_specific_gravity: inputs.gas_sg,
            temperature_f: inputs.temp,
        }
    }
}

/// Correlation names, resolved against the method lookup tables on validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CorrelationsDef {
    #[serde(default = "default_method")]
    pub rs: String,
    #[serde(default = "default_method")]
    pub bo: String,
}

impl CorrelationsDef {
    pub fn rs_method(&self) -> CorrelationResult<RsMethod> {
        self.rs.parse()
    }

    pub fn bo_method(&self) -> CorrelationResult<BoMethod> {
        self.bo.parse()
    }
}

impl Default for CorrelationsDef {
    fn default() -> Self {
        Self {
            rs: default_method(),
            bo: default_method(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SweepDef {
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
}

impl Default for SweepDef {
    fn default() -> Self {
        Self {
            sample_count: default_sample_count(),
        }
    }
}

/// Measured data to overlay on the computed curve.
///
/// A relative `path` is resolved against the directory holding the case file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReferenceDef {
    pub path: PathBuf,
    #[serde(default = "default_pressure_column")]
    pub pressure_column: String,
    #[serde(default = "default_fvf_column")]
    pub fvf_column: String,
}

impl ReferenceDef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pressure_column: default_pressure_column(),
            fvf_column: default_fvf_column(),
        }
    }
}

fn default_version() -> u32 {
    LATEST_VERSION
}

fn default_method() -> String {
    RsMethod::Glaso.name().to_string()
}

fn default_sample_count() -> usize {
    1000
}

pub fn default_pressure_column() -> String {
    "Pressure".to_string()
}

pub fn default_fvf_column() -> String {
    "FVF".to_string()
}

/// Starter case: a 42 °API volatile oil with its bubble point at 5868 psia.
pub fn default_case() -> Case {
    Case {
        version: LATEST_VERSION,
        name: "Example well".to_string(),
        description: None,
        reservoir: ReservoirDef {
            bubble_point_psia: 5868.0,
            max_pressure_psia: 6899.0,
            api_gravity: 42.002,
            gas_specific_gravity: 0.709,
            temperature_f: 292.1,
        },
        correlations: CorrelationsDef::default(),
        sweep: SweepDef::default(),
        reference: None,
    }
}
