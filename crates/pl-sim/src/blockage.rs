//! Blockage resolver.
//!
//! A closed throttle blocks the branch edge that leads towards it. A branch
//! whose outputs are all blocked is itself a dead end, so the edge leading
//! into it is blocked too, and so on until nothing changes. The map is
//! rebuilt from scratch every step.

use pl_core::NodeId;
use pl_graph::{GraphResult, NodeRole, RoleIndex, Topology};
use tracing::trace;

/// Blocked flags for every branch output, indexed by node slot and then by
/// output slot. Non-branch nodes have no entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockageMap {
    blocked: Vec<Vec<bool>>,
}

impl BlockageMap {
    /// All edges unblocked.
    pub fn new(topology: &Topology) -> Self {
        Self {
            blocked: topology
                .nodes()
                .iter()
                .map(|n| vec![false; topology.branch_outputs(n.id).len()])
                .collect(),
        }
    }

    pub fn clear(&mut self) {
        for flags in &mut self.blocked {
            flags.fill(false);
        }
    }

    /// Mark the edge `branch -> target` blocked.
    ///
    /// Returns whether the flag was newly set. Fails if `target` is not a
    /// downstream edge of `branch`.
    pub fn set_blocked(
        &mut self,
        topology: &Topology,
        branch: NodeId,
        target: NodeId,
    ) -> GraphResult<bool> {
        let slot = topology.output_slot(branch, target)?;
        let flag = &mut self.blocked[branch.slot()][slot];
        let newly = !*flag;
        *flag = true;
        Ok(newly)
    }

    /// Whether the output at `slot` of `branch` is blocked.
    pub fn is_blocked(&self, branch: NodeId, slot: usize) -> bool {
        self.blocked
            .get(branch.slot())
            .and_then(|flags| flags.get(slot))
            .copied()
            .unwrap_or(false)
    }

    /// Whether flow can cross the edge `from -> to`.
    ///
    /// Only branch outputs can be blocked; every other link is always open.
    pub fn edge_open(&self, topology: &Topology, from: NodeId, to: NodeId) -> bool {
        match topology.output_slot(from, to) {
            Ok(slot) => !self.is_blocked(from, slot),
            Err(_) => true,
        }
    }

    /// Number of outputs of `branch` that can carry flow.
    pub fn unblocked_outputs(&self, branch: NodeId) -> usize {
        self.blocked
            .get(branch.slot())
            .map_or(0, |flags| flags.iter().filter(|&&b| !b).count())
    }

    /// True for a branch whose every output is blocked.
    pub fn fully_blocked(&self, branch: NodeId) -> bool {
        self.blocked
            .get(branch.slot())
            .is_some_and(|flags| !flags.is_empty() && flags.iter().all(|&b| b))
    }

    /// Total number of blocked edges.
    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().flatten().filter(|&&b| b).count()
    }
}

/// Rebuild `map` from the set of closed throttles.
///
/// Returns the number of passes the branch fixpoint took.
pub fn resolve(
    topology: &Topology,
    roles: &RoleIndex,
    closed: impl IntoIterator<Item = NodeId>,
    map: &mut BlockageMap,
) -> GraphResult<usize> {
    map.clear();

    for throttle in closed {
        if let Some(up) = topology.upstream(throttle) {
            block_towards(topology, map, up, throttle)?;
        }
    }

    let mut propagated = vec![false; topology.len()];
    let mut passes = 0;
    loop {
        passes += 1;
        let mut changed = false;
        for &branch in roles.branches() {
            if propagated[branch.slot()] || !map.fully_blocked(branch) {
                continue;
            }
            propagated[branch.slot()] = true;
            changed = true;
            for &input in topology.branch_inputs(branch) {
                block_towards(topology, map, input, branch)?;
            }
        }
        if !changed {
            break;
        }
    }

    trace!(passes, blocked = map.blocked_count(), "blockage resolved");
    Ok(passes)
}

/// Walk upstream from `from` (which feeds `child`) to the first branch and
/// block its edge towards `child`. Stops without effect at the core; the sink
/// is walked through like any other single-link node.
fn block_towards(
    topology: &Topology,
    map: &mut BlockageMap,
    mut from: NodeId,
    mut child: NodeId,
) -> GraphResult<()> {
    // A chain is never longer than the node count.
    for _ in 0..=topology.len() {
        match topology.role(from) {
            Some(NodeRole::Branch) => {
                map.set_blocked(topology, from, child)?;
                return Ok(());
            }
            Some(NodeRole::Core) | None => return Ok(()),
            Some(_) => match topology.upstream(from) {
                Some(up) => {
                    child = from;
                    from = up;
                }
                None => return Ok(()),
            },
        }
    }
    Ok(())
}
