//! Graph-specific error types.

use pl_core::NodeId;

use crate::graph::{LinkEnd, NodeRole};

pub type GraphResult<T> = Result<T, GraphError>;

/// Topology construction, validation and lookup errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A link refers to a node that doesn't exist.
    InvalidNodeRef { node: NodeId },

    /// A node was linked to itself.
    SelfLink { node: NodeId },

    /// A non-branch node already has a link at this end, or a branch
    /// already has this exact link.
    DuplicateLink { node: NodeId, end: LinkEnd },

    /// The plant needs exactly one node with this role.
    BoundaryCount { role: NodeRole, count: usize },

    /// A linked non-branch node is missing one of its two links.
    DanglingNode { node: NodeId, end: LinkEnd },

    /// Only movers may stand outside the flow graph.
    DetachedNode { node: NodeId },

    /// A branch node needs at least one link on each side.
    EmptyBranch { node: NodeId, end: LinkEnd },

    /// Following single links from this node never reaches a branch or boundary.
    UnterminatedChain { start: NodeId },

    /// The target is not a downstream edge of the given branch.
    NotAnOutput { branch: NodeId, target: NodeId },

    /// The node exists but has the wrong role for the request.
    WrongRole {
        node: NodeId,
        expected: NodeRole,
        actual: NodeRole,
    },

    /// No node carries this name.
    NameNotFound { name: String },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::InvalidNodeRef { node } => {
                write!(f, "Link refers to non-existent node {}", node)
            }
            GraphError::SelfLink { node } => write!(f, "Node {} is linked to itself", node),
            GraphError::DuplicateLink { node, end } => {
                write!(f, "Node {} already has an {:?} link", node, end)
            }
            GraphError::BoundaryCount { role, count } => {
                write!(f, "Plant has {} {:?} nodes (expected 1)", count, role)
            }
            GraphError::DanglingNode { node, end } => {
                write!(f, "Node {} is missing its {:?} link", node, end)
            }
            GraphError::DetachedNode { node } => {
                write!(f, "Node {} is not connected to the flow graph", node)
            }
            GraphError::EmptyBranch { node, end } => {
                write!(f, "Branch {} has no {:?} links", node, end)
            }
            GraphError::UnterminatedChain { start } => {
                write!(
                    f,
                    "Chain starting at node {} never reaches a branch or boundary",
                    start
                )
            }
            GraphError::NotAnOutput { branch, target } => {
                write!(
                    f,
                    "Node {} is not a downstream edge of branch {}",
                    target, branch
                )
            }
            GraphError::WrongRole {
                node,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Node {} is a {:?} but a {:?} was expected",
                    node, actual, expected
                )
            }
            GraphError::NameNotFound { name } => write!(f, "No node named '{}'", name),
        }
    }
}

impl std::error::Error for GraphError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_an_output_display() {
        let err = GraphError::NotAnOutput {
            branch: NodeId::from_index(1),
            target: NodeId::from_index(4),
        };
        assert_eq!(err.to_string(), "Node 4 is not a downstream edge of branch 1");
    }
}
