//! Error types for component operations.

use pl_core::error::PlError;
use thiserror::Error;

/// Errors raised when a component rejects a setpoint or a volume change.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComponentError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Value out of range for {what}: {value} (expected {min}..={max})")]
    OutOfRange {
        what: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

pub type ComponentResult<T> = Result<T, ComponentError>;

impl From<PlError> for ComponentError {
    fn from(e: PlError) -> Self {
        match e {
            PlError::InvalidArg { what } => ComponentError::InvalidArg { what },
            PlError::OutOfRange {
                what,
                value,
                min,
                max,
            } => ComponentError::OutOfRange {
                what,
                value,
                min,
                max,
            },
        }
    }
}
