//! Timed operator actions loaded from YAML.
//!
//! ```yaml
//! actions:
//!   - at: 0
//!     action: rods
//!     percent: 40
//!   - at: 0
//!     action: pump_rpm
//!     pump: pump1
//!     rpm: 800
//!   - at: 25
//!     action: valve
//!     valve: valve1
//!     open: false
//!   - at: 60
//!     action: quench
//! ```

use std::path::Path;

use pl_sim::{Plant, SimOptions, SimRecord, SimResult, run_sim_scripted};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Rods { percent: i64 },
    PumpRpm { pump: String, rpm: i64 },
    Pump { pump: String, on: bool },
    Valve { valve: String, open: bool },
    Fail { node: String },
    Repair { node: String },
    Quench,
}

/// An action applied before the step numbered `at + 1` runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedAction {
    pub at: u64,
    #[serde(flatten)]
    pub action: Action,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub actions: Vec<TimedAction>,
}

impl Scenario {
    pub fn from_yaml_str(text: &str) -> CliResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_yaml_path(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    /// Actions due once `completed` steps have run, in file order.
    pub fn due(&self, completed: u64) -> impl Iterator<Item = &Action> {
        self.actions
            .iter()
            .filter(move |a| a.at == completed)
            .map(|a| &a.action)
    }
}

pub fn apply(plant: &mut Plant, action: &Action) -> SimResult<()> {
    match action {
        Action::Rods { percent } => plant.set_control_rods(*percent),
        Action::PumpRpm { pump, rpm } => {
            let id = plant.find(pump)?;
            plant.set_pump_rpm(id, *rpm)
        }
        Action::Pump { pump, on } => {
            let id = plant.find(pump)?;
            plant.set_pump_on(id, *on)
        }
        Action::Valve { valve, open } => {
            let id = plant.find(valve)?;
            plant.set_valve(id, *open)
        }
        Action::Fail { node } => {
            let id = plant.find(node)?;
            plant.fail(id)
        }
        Action::Repair { node } => {
            let id = plant.find(node)?;
            if !plant.request_repair(id)? {
                warn!(node = node.as_str(), "repair not started");
            }
            Ok(())
        }
        Action::Quench => {
            if !plant.quench() {
                warn!("quench already used");
            }
            Ok(())
        }
    }
}

/// Run `opts.steps` steps, applying scripted actions between them.
pub fn play(plant: &mut Plant, scenario: &Scenario, opts: &SimOptions) -> SimResult<SimRecord> {
    run_sim_scripted(
        plant,
        opts,
        |plant, completed| {
            for action in scenario.due(completed) {
                info!(step = completed, ?action, "applying action");
                apply(plant, action)?;
            }
            Ok(())
        },
        |_| {},
    )
}
