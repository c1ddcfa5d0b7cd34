//! Case validation logic.

use crate::schema::{Case, LATEST_VERSION, ReferenceDef};
use pvt_correlations::{BoMethod, CorrelationError, ReservoirInputs, RsMethod};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{context}: {source}")]
    Correlation {
        context: &'static str,
        source: CorrelationError,
    },
}

/// A case with every name and number checked and converted to library types.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCase {
    pub name: String,
    pub inputs: ReservoirInputs,
    pub rs_method: RsMethod,
    pub bo_method: BoMethod,
    pub sample_count: usize,
    pub reference: Option<ReferenceDef>,
}

pub fn resolve_case(case: &Case) -> Result<ResolvedCase, ValidationError> {
    if case.version == 0 || case.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: case.version,
        });
    }

    if case.name.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "name".to_string(),
            value: format!("{:?}", case.name),
            reason: "case name must not be empty".to_string(),
        });
    }

    let inputs = case
        .reservoir
        .to_inputs()
        .map_err(|source| ValidationError::Correlation {
            context: "reservoir",
            source,
        })?;

    let rs_method = case
        .correlations
        .rs_method()
        .map_err(|source| ValidationError::Correlation {
            context: "correlations.rs",
            source,
        })?;

    let bo_method = case
        .correlations
        .bo_method()
        .map_err(|source| ValidationError::Correlation {
            context: "correlations.bo",
            source,
        })?;

    if case.sweep.sample_count < 2 {
        return Err(ValidationError::InvalidValue {
            field: "sweep.sample_count".to_string(),
            value: case.sweep.sample_count.to_string(),
            reason: "sweep needs at least 2 samples".to_string(),
        });
    }

    if let Some(reference) = &case.reference {
        validate_reference(reference)?;
    }

    Ok(ResolvedCase {
        name: case.name.clone(),
        inputs,
        rs_method,
        bo_method,
        sample_count: case.sweep.sample_count,
        reference: case.reference.clone(),
    })
}

pub fn validate_case(case: &Case) -> Result<(), ValidationError> {
    resolve_case(case).map(|_| ())
}

fn validate_reference(reference: &ReferenceDef) -> Result<(), ValidationError> {
    if reference.path.as_os_str().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "reference.path".to_string(),
            value: String::new(),
            reason: "reference path must not be empty".to_string(),
        });
    }

    for (field, column) in [
        ("reference.pressure_column", &reference.pressure_column),
        ("reference.fvf_column", &reference.fvf_column),
    ] {
        if column.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: field.to_string(),
                value: column.clone(),
                reason: "column name must not be empty".to_string(),
            });
        }
    }

    if reference.pressure_column.trim() == reference.fvf_column.trim() {
        return Err(ValidationError::InvalidValue {
            field: "reference.fvf_column".to_string(),
            value: reference.fvf_column.clone(),
            reason: "pressure and FVF columns must differ".to_string(),
        });
    }

    Ok(())
}
