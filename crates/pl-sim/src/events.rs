//! Terminal events raised by the engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which pressurized vessel failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VesselKind {
    Core,
    Sink,
}

impl fmt::Display for VesselKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VesselKind::Core => write!(f, "reactor"),
            VesselKind::Sink => write!(f, "condenser"),
        }
    }
}

/// A vessel's health reached zero. Raised once, on the step it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FatalFailure {
    pub vessel: VesselKind,
    /// Step number (1-based) that caused the failure.
    pub step: u64,
}

impl fmt::Display for FatalFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed at step {}", self.vessel, self.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_vessel() {
        let failure = FatalFailure {
            vessel: VesselKind::Sink,
            step: 3,
        };
        assert_eq!(failure.to_string(), "condenser failed at step 3");
    }
}
