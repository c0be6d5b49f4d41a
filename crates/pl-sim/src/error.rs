//! Error types for plant simulation.

use pl_core::NodeId;
use pl_graph::NodeRole;
use thiserror::Error;

use crate::events::FatalFailure;

/// Errors returned by the plant engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// A setpoint or volume change was rejected; nothing was applied.
    #[error("Invalid setpoint: {message}")]
    InvalidSetpoint { message: String },

    /// Misuse of the plant graph: unknown node, wrong node kind, or an edge
    /// that does not exist.
    #[error("Topology error: {message}")]
    Topology { message: String },

    /// Only movers and spinners can be failed or repaired.
    #[error("Node {node} is a {role:?} and cannot fail or be repaired")]
    NotRepairable { node: NodeId, role: NodeRole },

    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A pressurized vessel reached zero health during this step.
    #[error("Fatal plant failure: {0}")]
    PlantFailure(FatalFailure),

    /// The plant already failed; start a new game.
    #[error("Game over: the plant can no longer be advanced")]
    GameOver,
}

pub type SimResult<T> = Result<T, SimError>;

impl From<pl_components::ComponentError> for SimError {
    fn from(e: pl_components::ComponentError) -> Self {
        SimError::InvalidSetpoint {
            message: e.to_string(),
        }
    }
}

impl From<pl_graph::GraphError> for SimError {
    fn from(e: pl_graph::GraphError) -> Self {
        SimError::Topology {
            message: e.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for SimError {
    fn from(e: serde_yaml::Error) -> Self {
        SimError::Config {
            message: e.to_string(),
        }
    }
}

impl From<std::io::Error> for SimError {
    fn from(e: std::io::Error) -> Self {
        SimError::Config {
            message: e.to_string(),
        }
    }
}
