use thiserror::Error;

pub type PlResult<T> = Result<T, PlError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlError {
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
