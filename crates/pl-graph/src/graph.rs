//! Core topology data structures.

use pl_core::NodeId;

use crate::error::{GraphError, GraphResult};

/// Which end of a node a link attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkEnd {
    /// Where flow comes from.
    Upstream,
    /// Where flow goes to.
    Downstream,
}

/// What a node does in the flow graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    /// The reactor; pressurized source of steam.
    Core,
    /// The condenser; pressurized source of water.
    Sink,
    /// Junction with any number of inputs and independently blockable outputs.
    Branch,
    /// Valve.
    Throttle,
    /// Pump.
    Mover,
    /// Turbine.
    Spinner,
}

impl NodeRole {
    /// Pressurized nodes are where propagation starts and stops.
    pub fn is_pressurized(self) -> bool {
        matches!(self, NodeRole::Core | NodeRole::Sink)
    }

    pub fn is_branch(self) -> bool {
        self == NodeRole::Branch
    }
}

/// Links of a node, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Links {
    /// At most one upstream and one downstream neighbour.
    Single {
        upstream: Option<NodeId>,
        downstream: Option<NodeId>,
    },
    /// Ordered inputs and outputs; an output's position is its edge slot.
    Branch {
        upstream: Vec<NodeId>,
        downstream: Vec<NodeId>,
    },
}

impl Links {
    pub(crate) fn for_role(role: NodeRole) -> Self {
        if role.is_branch() {
            Links::Branch {
                upstream: Vec::new(),
                downstream: Vec::new(),
            }
        } else {
            Links::Single {
                upstream: None,
                downstream: None,
            }
        }
    }
}

/// A node of the plant graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub role: NodeRole,
    pub links: Links,
}

/// The topology: a validated, immutable collection of linked nodes.
///
/// Node `i` lives at slot `i`, so any node-indexed table built alongside the
/// topology can be addressed with `NodeId::slot`.
#[derive(Debug, Clone)]
pub struct Topology {
    pub(crate) nodes: Vec<Node>,
    pub(crate) core: NodeId,
    pub(crate) sink: NodeId,
}

impl Topology {
    /// Return all nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node by ID (returns None if ID out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.slot())
    }

    /// Role of a node, if it exists.
    pub fn role(&self, id: NodeId) -> Option<NodeRole> {
        self.node(id).map(|n| n.role)
    }

    /// The single Core node.
    pub fn core(&self) -> NodeId {
        self.core
    }

    /// The single Sink node.
    pub fn sink(&self) -> NodeId {
        self.sink
    }

    /// Upstream neighbour of a non-branch node.
    pub fn upstream(&self, id: NodeId) -> Option<NodeId> {
        match self.node(id).map(|n| &n.links) {
            Some(Links::Single { upstream, .. }) => *upstream,
            _ => None,
        }
    }

    /// Downstream neighbour of a non-branch node.
    pub fn downstream(&self, id: NodeId) -> Option<NodeId> {
        match self.node(id).map(|n| &n.links) {
            Some(Links::Single { downstream, .. }) => *downstream,
            _ => None,
        }
    }

    /// Inputs of a branch node (empty for anything else).
    pub fn branch_inputs(&self, id: NodeId) -> &[NodeId] {
        match self.node(id).map(|n| &n.links) {
            Some(Links::Branch { upstream, .. }) => upstream,
            _ => &[],
        }
    }

    /// Outputs of a branch node (empty for anything else).
    pub fn branch_outputs(&self, id: NodeId) -> &[NodeId] {
        match self.node(id).map(|n| &n.links) {
            Some(Links::Branch { downstream, .. }) => downstream,
            _ => &[],
        }
    }

    /// Edge slot of `target` among the outputs of `branch`.
    pub fn output_slot(&self, branch: NodeId, target: NodeId) -> GraphResult<usize> {
        self.branch_outputs(branch)
            .iter()
            .position(|&o| o == target)
            .ok_or(GraphError::NotAnOutput { branch, target })
    }

    /// Look up a node by name.
    pub fn find(&self, name: &str) -> GraphResult<NodeId> {
        self.nodes
            .iter()
            .find(|n| n.name == name)
            .map(|n| n.id)
            .ok_or_else(|| GraphError::NameNotFound { name: name.into() })
    }

    /// Name of a node, or an empty string for unknown ids.
    pub fn name(&self, id: NodeId) -> &str {
        self.node(id).map_or("", |n| n.name.as_str())
    }

    /// Check that `id` exists and has the expected role.
    pub fn expect_role(&self, id: NodeId, expected: NodeRole) -> GraphResult<()> {
        let node = self
            .node(id)
            .ok_or(GraphError::InvalidNodeRef { node: id })?;
        if node.role != expected {
            return Err(GraphError::WrongRole {
                node: id,
                expected,
                actual: node.role,
            });
        }
        Ok(())
    }
}
