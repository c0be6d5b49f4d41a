//! Error type for the command-line front end.

use std::path::PathBuf;

/// Errors from loading inputs, running the plant, or writing output.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("Simulation error: {0}")]
    Simulation(#[from] pl_sim::SimError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;

impl From<serde_yaml::Error> for CliError {
    fn from(err: serde_yaml::Error) -> Self {
        CliError::Scenario(err.to_string())
    }
}
