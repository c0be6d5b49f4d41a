//! Role index over a topology.
//!
//! Lists node ids per role so simulation passes can iterate branches, valves,
//! pumps and turbines without rescanning the whole node set every step.

use pl_core::NodeId;

use crate::graph::{NodeRole, Topology};

/// Node ids grouped by role, each list in node order.
#[derive(Debug, Clone, Default)]
pub struct RoleIndex {
    branches: Vec<NodeId>,
    throttles: Vec<NodeId>,
    movers: Vec<NodeId>,
    spinners: Vec<NodeId>,
}

impl RoleIndex {
    /// Build a role index from a topology.
    pub fn from_topology(topology: &Topology) -> Self {
        let mut index = Self::default();
        for node in topology.nodes() {
            match node.role {
                NodeRole::Branch => index.branches.push(node.id),
                NodeRole::Throttle => index.throttles.push(node.id),
                NodeRole::Mover => index.movers.push(node.id),
                NodeRole::Spinner => index.spinners.push(node.id),
                NodeRole::Core | NodeRole::Sink => {}
            }
        }
        index
    }

    pub fn branches(&self) -> &[NodeId] {
        &self.branches
    }

    pub fn throttles(&self) -> &[NodeId] {
        &self.throttles
    }

    pub fn movers(&self) -> &[NodeId] {
        &self.movers
    }

    pub fn spinners(&self) -> &[NodeId] {
        &self.spinners
    }

    /// Movers that feed the flow graph (have a downstream link).
    pub fn linked_movers<'a>(&'a self, topology: &'a Topology) -> impl Iterator<Item = NodeId> + 'a {
        self.movers
            .iter()
            .copied()
            .filter(move |&m| topology.downstream(m).is_some())
    }
}
