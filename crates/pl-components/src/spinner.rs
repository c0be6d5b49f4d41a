//! Spinner (turbine) component.

use pl_core::scale;
use serde::{Deserialize, Serialize};

use crate::error::{ComponentError, ComponentResult};
use crate::traits::Repairable;

/// Spinner parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinnerParams {
    pub max_rpm: i64,
    /// Inflow that drives the spinner at `max_rpm`.
    pub max_throughput: i64,
}

impl Default for SpinnerParams {
    fn default() -> Self {
        Self {
            max_rpm: 3500,
            max_throughput: 300,
        }
    }
}

/// Turbine whose rpm is derived from the steam flowing through it.
///
/// The spinner forwards its inflow unchanged; rpm is a side effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spinner {
    rpm: i64,
    pub max_rpm: i64,
    pub max_throughput: i64,
    operational: bool,
}

impl Spinner {
    pub fn new(params: SpinnerParams) -> ComponentResult<Self> {
        if params.max_throughput <= 0 {
            return Err(ComponentError::InvalidArg {
                what: "spinner max throughput must be positive",
            });
        }
        if params.max_rpm < 0 {
            return Err(ComponentError::InvalidArg {
                what: "spinner max rpm must be non-negative",
            });
        }
        Ok(Self {
            rpm: 0,
            max_rpm: params.max_rpm,
            max_throughput: params.max_throughput,
            operational: true,
        })
    }

    /// Recompute rpm from this step's inflow rate.
    pub fn update(&mut self, inflow_rate: i64) {
        self.rpm = if self.operational {
            scale(self.max_rpm, inflow_rate, self.max_throughput)
        } else {
            0
        };
    }

    /// Current rpm; zero while broken.
    pub fn rpm(&self) -> i64 {
        if self.operational {
            self.rpm
        } else {
            0
        }
    }
}

impl Repairable for Spinner {
    fn is_operational(&self) -> bool {
        self.operational
    }

    fn set_operational(&mut self, operational: bool) {
        self.operational = operational;
    }
}
