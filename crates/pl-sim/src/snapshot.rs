//! Serializable view of a plant between steps.

use pl_components::{Medium, PressureVessel, Repairable, VesselState};
use serde::{Deserialize, Serialize};

use crate::plant::{Plant, PlantNode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoverSnapshot {
    pub name: String,
    pub rpm: i64,
    pub on: bool,
    pub operational: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinnerSnapshot {
    pub name: String,
    pub rpm: i64,
    pub operational: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrottleSnapshot {
    pub name: String,
    pub open: bool,
}

/// Outgoing flow of one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowSnapshot {
    pub name: String,
    pub rate: i64,
    pub temperature: i64,
    pub medium: Medium,
}

/// Everything an operator display needs after a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantSnapshot {
    pub step: u64,
    pub score: i64,
    pub power: i64,
    pub reactor: VesselState,
    pub condenser: VesselState,
    pub control_rods: i64,
    pub quench_available: bool,
    pub movers: Vec<MoverSnapshot>,
    pub spinners: Vec<SpinnerSnapshot>,
    pub throttles: Vec<ThrottleSnapshot>,
    pub flows: Vec<FlowSnapshot>,
    /// Names of components that are currently broken.
    pub failed: Vec<String>,
}

impl Plant {
    pub fn snapshot(&self) -> PlantSnapshot {
        let topology = &self.topology;
        let mut movers = Vec::new();
        let mut spinners = Vec::new();
        let mut throttles = Vec::new();

        for (node, state) in topology.nodes().iter().zip(&self.nodes) {
            let name = node.name.clone();
            match state {
                PlantNode::Mover(m) => movers.push(MoverSnapshot {
                    name,
                    rpm: m.rpm(),
                    on: m.is_on(),
                    operational: m.is_operational(),
                }),
                PlantNode::Spinner(s) => spinners.push(SpinnerSnapshot {
                    name,
                    rpm: s.rpm(),
                    operational: s.is_operational(),
                }),
                PlantNode::Throttle(t) => throttles.push(ThrottleSnapshot {
                    name,
                    open: t.is_open(),
                }),
                PlantNode::Core | PlantNode::Sink | PlantNode::Branch => {}
            }
        }

        let flows = topology
            .nodes()
            .iter()
            .zip(&self.flows)
            .map(|(node, flow)| FlowSnapshot {
                name: node.name.clone(),
                rate: flow.rate(),
                temperature: flow.temperature(),
                medium: flow.medium(),
            })
            .collect();

        let failed = self
            .failed_components()
            .into_iter()
            .map(|id| topology.name(id).to_owned())
            .collect();

        PlantSnapshot {
            step: self.steps,
            score: self.score,
            power: self.power_output(),
            reactor: *self.reactor.vessel(),
            condenser: *self.condenser.vessel(),
            control_rods: self.reactor.control_rods(),
            quench_available: self.reactor.quench_available(),
            movers,
            spinners,
            throttles,
            flows,
            failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::PlantConfig;
    use crate::plant::Plant;

    #[test]
    fn fresh_snapshot_lists_every_component() {
        let plant = Plant::standard(&PlantConfig::default()).unwrap();
        let snap = plant.snapshot();
        assert_eq!(snap.step, 0);
        assert_eq!(snap.movers.len(), 3);
        assert_eq!(snap.spinners.len(), 1);
        assert_eq!(snap.throttles.len(), 2);
        assert_eq!(snap.flows.len(), 12);
        assert!(snap.failed.is_empty());
        assert_eq!(snap.reactor.water_volume, 8000);
        assert_eq!(snap.control_rods, 100);
        assert!(snap.quench_available);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let mut plant = Plant::standard(&PlantConfig::default()).unwrap();
        let pump = plant.find("pump1").unwrap();
        plant.fail(pump).unwrap();
        let json = serde_json::to_string(&plant.snapshot()).unwrap();
        assert!(json.contains("\"failed\":[\"pump1\"]"));
        assert!(json.contains("\"medium\":\"Steam\""));
    }
}
