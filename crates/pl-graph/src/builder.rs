//! Incremental topology builder.

use pl_core::NodeId;

use crate::error::{GraphError, GraphResult};
use crate::graph::{LinkEnd, Links, Node, NodeRole, Topology};
use crate::validate;

/// Builder for constructing a topology incrementally.
///
/// Use `add_node` and `connect` to build up the plant, then call `build()` to
/// validate and freeze it into an immutable `Topology`.
#[derive(Debug, Default)]
pub struct TopologyBuilder {
    nodes: Vec<Node>,
    links: Vec<(NodeId, NodeId)>,
    next_node_id: u32,
}

impl TopologyBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its ID.
    pub fn add_node(&mut self, name: impl Into<String>, role: NodeRole) -> NodeId {
        let id = NodeId::from_index(self.next_node_id);
        self.next_node_id += 1;
        self.nodes.push(Node {
            id,
            name: name.into(),
            role,
            links: Links::for_role(role),
        });
        id
    }

    /// Link `from` (upstream) to `to` (downstream).
    ///
    /// A branch on either end gains another input/output; any other node
    /// takes the link as its single upstream or downstream neighbour.
    /// Conflicts are reported by `build()`.
    pub fn connect(&mut self, from: NodeId, to: NodeId) {
        self.links.push((from, to));
    }

    /// Build and validate the topology.
    pub fn build(mut self) -> GraphResult<Topology> {
        for (from, to) in std::mem::take(&mut self.links) {
            self.apply_link(from, to)?;
        }

        let (core, sink) = validate::validate_structure(&self.nodes)?;
        validate::validate_chains(&self.nodes)?;

        Ok(Topology {
            nodes: self.nodes,
            core,
            sink,
        })
    }

    fn apply_link(&mut self, from: NodeId, to: NodeId) -> GraphResult<()> {
        if from == to {
            return Err(GraphError::SelfLink { node: from });
        }
        for id in [from, to] {
            if id.slot() >= self.nodes.len() {
                return Err(GraphError::InvalidNodeRef { node: id });
            }
        }

        match &mut self.nodes[from.slot()].links {
            Links::Branch { downstream, .. } => {
                if downstream.contains(&to) {
                    return Err(GraphError::DuplicateLink {
                        node: from,
                        end: LinkEnd::Downstream,
                    });
                }
                downstream.push(to);
            }
            Links::Single { downstream, .. } => {
                if downstream.is_some() {
                    return Err(GraphError::DuplicateLink {
                        node: from,
                        end: LinkEnd::Downstream,
                    });
                }
                *downstream = Some(to);
            }
        }

        match &mut self.nodes[to.slot()].links {
            Links::Branch { upstream, .. } => {
                if upstream.contains(&from) {
                    return Err(GraphError::DuplicateLink {
                        node: to,
                        end: LinkEnd::Upstream,
                    });
                }
                upstream.push(from);
            }
            Links::Single { upstream, .. } => {
                if upstream.is_some() {
                    return Err(GraphError::DuplicateLink {
                        node: to,
                        end: LinkEnd::Upstream,
                    });
                }
                *upstream = Some(from);
            }
        }

        Ok(())
    }
}
