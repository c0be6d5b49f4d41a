//! Plant configuration loaded from YAML.
//!
//! Every key is optional; missing values fall back to the reference plant.
//!
//! ```yaml
//! reactor:
//!   max_heating_per_step: 120
//! flow:
//!   max_mover_rate: 350
//! repair_steps: 3
//! ```

use std::path::Path;

use pl_components::{
    CondenserParams, MoverParams, PowerTapParams, ReactorParams, SpinnerParams, ThrottleParams,
};
use serde::{Deserialize, Serialize};

use crate::error::SimResult;

/// Plant-wide flow limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowParams {
    /// Most steam the core can push out in one step.
    pub max_core_steam_rate: i64,
    /// Water a single mover adds at full rpm.
    pub max_mover_rate: i64,
}

impl Default for FlowParams {
    fn default() -> Self {
        Self {
            max_core_steam_rate: 500,
            max_mover_rate: 400,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantConfig {
    pub reactor: ReactorParams,
    pub condenser: CondenserParams,
    pub mover: MoverParams,
    pub spinner: SpinnerParams,
    pub throttle: ThrottleParams,
    pub power_tap: PowerTapParams,
    pub flow: FlowParams,
    /// Steps between a repair request and the node working again.
    pub repair_steps: u32,
}

impl Default for PlantConfig {
    fn default() -> Self {
        Self {
            reactor: ReactorParams::default(),
            condenser: CondenserParams::default(),
            mover: MoverParams::default(),
            spinner: SpinnerParams::default(),
            throttle: ThrottleParams::default(),
            power_tap: PowerTapParams::default(),
            flow: FlowParams::default(),
            repair_steps: 5,
        }
    }
}

impl PlantConfig {
    pub fn from_yaml_str(text: &str) -> SimResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_yaml_path(path: impl AsRef<Path>) -> SimResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }
}
