//! Per-step physics for the vessels and spinners.

use pl_components::PressureVessel;
use pl_core::NodeId;

use crate::events::{FatalFailure, VesselKind};
use crate::plant::{Plant, PlantNode};

impl Plant {
    /// Advance vessel thermodynamics and spinner speeds from this step's flows.
    pub(crate) fn update_physics(&mut self) {
        self.reactor.update_state();

        let (coolant_rpm, coolant_max_rpm) = match self.nodes.get(self.coolant.slot()) {
            Some(PlantNode::Mover(m)) => (m.effective_rpm(), m.max_rpm),
            _ => (0, 1),
        };
        self.condenser.update_state(coolant_rpm, coolant_max_rpm);

        let spinners: Vec<(NodeId, i64)> = self
            .roles
            .spinners()
            .iter()
            .map(|&s| (s, self.inflow_rate(s)))
            .collect();
        for (s, inflow) in spinners {
            if let Some(PlantNode::Spinner(spinner)) = self.nodes.get_mut(s.slot()) {
                spinner.update(inflow);
            }
        }
    }

    fn inflow_rate(&self, id: NodeId) -> i64 {
        self.topology
            .upstream(id)
            .map_or(0, |u| self.flows[u.slot()].rate())
    }

    /// The core is checked before the sink; only one failure is reported.
    pub(crate) fn check_failure(&self) -> Option<FatalFailure> {
        let vessel = if self.reactor.has_failed() {
            VesselKind::Core
        } else if self.condenser.has_failed() {
            VesselKind::Sink
        } else {
            return None;
        };
        Some(FatalFailure {
            vessel,
            step: self.steps,
        })
    }
}
