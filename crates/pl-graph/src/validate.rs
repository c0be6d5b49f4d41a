//! Topology validation logic.

use pl_core::NodeId;

use crate::error::{GraphError, GraphResult};
use crate::graph::{LinkEnd, Links, Node, NodeRole};

/// Validate the node set: one Core, one Sink, complete links on every node
/// that takes part in the flow graph.
///
/// Returns the Core and Sink ids.
pub(crate) fn validate_structure(nodes: &[Node]) -> GraphResult<(NodeId, NodeId)> {
    let core = single_of(nodes, NodeRole::Core)?;
    let sink = single_of(nodes, NodeRole::Sink)?;

    for node in nodes {
        match &node.links {
            Links::Branch {
                upstream,
                downstream,
            } => {
                if upstream.is_empty() {
                    return Err(GraphError::EmptyBranch {
                        node: node.id,
                        end: LinkEnd::Upstream,
                    });
                }
                if downstream.is_empty() {
                    return Err(GraphError::EmptyBranch {
                        node: node.id,
                        end: LinkEnd::Downstream,
                    });
                }
            }
            Links::Single {
                upstream: None,
                downstream: None,
            } => {
                // A detached pump can still drive something outside the
                // graph, such as the condenser coolant.
                if node.role != NodeRole::Mover {
                    return Err(GraphError::DetachedNode { node: node.id });
                }
            }
            Links::Single { upstream: None, .. } => {
                return Err(GraphError::DanglingNode {
                    node: node.id,
                    end: LinkEnd::Upstream,
                });
            }
            Links::Single {
                downstream: None, ..
            } => {
                return Err(GraphError::DanglingNode {
                    node: node.id,
                    end: LinkEnd::Downstream,
                });
            }
            Links::Single { .. } => {}
        }
    }

    Ok((core, sink))
}

/// Every run of single nodes must end at a branch or a pressurized node.
///
/// Walks downstream from each linked single node and fails if the walk does
/// not stop within `nodes.len()` hops, which catches loops made only of
/// throttles, movers and spinners.
pub(crate) fn validate_chains(nodes: &[Node]) -> GraphResult<()> {
    for node in nodes {
        if node.role.is_branch() || node.role.is_pressurized() {
            continue;
        }
        let Links::Single {
            downstream: Some(mut current),
            ..
        } = node.links
        else {
            continue;
        };

        let mut hops = 0;
        loop {
            let next = &nodes[current.slot()];
            if next.role.is_branch() || next.role.is_pressurized() {
                break;
            }
            hops += 1;
            if hops > nodes.len() {
                return Err(GraphError::UnterminatedChain { start: node.id });
            }
            match next.links {
                Links::Single {
                    downstream: Some(d),
                    ..
                } => current = d,
                _ => return Err(GraphError::UnterminatedChain { start: node.id }),
            }
        }
    }
    Ok(())
}

fn single_of(nodes: &[Node], role: NodeRole) -> GraphResult<NodeId> {
    let mut found = nodes.iter().filter(|n| n.role == role).map(|n| n.id);
    match (found.next(), found.count()) {
        (Some(id), 0) => Ok(id),
        (None, _) => Err(GraphError::BoundaryCount { role, count: 0 }),
        (Some(_), rest) => Err(GraphError::BoundaryCount {
            role,
            count: rest + 1,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TopologyBuilder;

    #[test]
    fn validate_missing_sink() {
        let mut builder = TopologyBuilder::new();
        let core = builder.add_node("core", NodeRole::Core);
        let valve = builder.add_node("valve", NodeRole::Throttle);
        builder.connect(core, valve);
        builder.connect(valve, core);

        assert_eq!(
            builder.build().unwrap_err(),
            GraphError::BoundaryCount {
                role: NodeRole::Sink,
                count: 0
            }
        );
    }

    #[test]
    fn validate_two_cores() {
        let mut builder = TopologyBuilder::new();
        builder.add_node("a", NodeRole::Core);
        builder.add_node("b", NodeRole::Core);
        builder.add_node("sink", NodeRole::Sink);

        assert_eq!(
            builder.build().unwrap_err(),
            GraphError::BoundaryCount {
                role: NodeRole::Core,
                count: 2
            }
        );
    }

    #[test]
    fn validate_dangling_node() {
        let mut builder = TopologyBuilder::new();
        let core = builder.add_node("core", NodeRole::Core);
        let sink = builder.add_node("sink", NodeRole::Sink);
        let valve = builder.add_node("valve", NodeRole::Throttle);
        builder.connect(core, valve);
        builder.connect(sink, core);
        assert_eq!(
            builder.build().unwrap_err(),
            GraphError::DanglingNode {
                node: sink,
                end: LinkEnd::Upstream
            }
        );
    }

    #[test]
    fn validate_detached_mover_allowed() {
        let mut builder = TopologyBuilder::new();
        let core = builder.add_node("core", NodeRole::Core);
        let sink = builder.add_node("sink", NodeRole::Sink);
        builder.add_node("coolant", NodeRole::Mover);
        builder.connect(core, sink);
        builder.connect(sink, core);
        assert!(builder.build().is_ok());
    }

    #[test]
    fn validate_detached_throttle_rejected() {
        let mut builder = TopologyBuilder::new();
        let core = builder.add_node("core", NodeRole::Core);
        let sink = builder.add_node("sink", NodeRole::Sink);
        let valve = builder.add_node("valve", NodeRole::Throttle);
        builder.connect(core, sink);
        builder.connect(sink, core);
        assert_eq!(
            builder.build().unwrap_err(),
            GraphError::DetachedNode { node: valve }
        );
    }

    #[test]
    fn validate_empty_branch() {
        let mut builder = TopologyBuilder::new();
        let branch = builder.add_node("branch", NodeRole::Branch);
        let core = builder.add_node("core", NodeRole::Core);
        let sink = builder.add_node("sink", NodeRole::Sink);
        builder.connect(core, branch);
        builder.connect(sink, core);

        assert_eq!(
            builder.build().unwrap_err(),
            GraphError::EmptyBranch {
                node: branch,
                end: LinkEnd::Downstream
            }
        );
    }

    #[test]
    fn validate_loop_without_boundary() {
        let mut builder = TopologyBuilder::new();
        let core = builder.add_node("core", NodeRole::Core);
        let sink = builder.add_node("sink", NodeRole::Sink);
        let a = builder.add_node("a", NodeRole::Throttle);
        let b = builder.add_node("b", NodeRole::Spinner);
        builder.connect(core, sink);
        builder.connect(sink, core);
        builder.connect(a, b);
        builder.connect(b, a);

        assert!(matches!(
            builder.build().unwrap_err(),
            GraphError::UnterminatedChain { .. }
        ));
    }
}
