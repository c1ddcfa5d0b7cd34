use thiserror::Error;

pub type PvtResult<T> = Result<T, PvtError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PvtError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Value out of range for {what}: {value} ({reason})")]
    OutOfRange {
        what: &'static str,
        value: f64,
        reason: &'static str,
    },
}
