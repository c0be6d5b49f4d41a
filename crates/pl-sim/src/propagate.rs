//! Flow propagator.
//!
//! Flows live in a slice indexed by node slot. The steam pass is seeded at
//! the core and the water pass at the sink; both copy rate and temperature
//! verbatim down non-branching chains. Branch outputs are then settled by a
//! fixpoint over all branches.
//!
//! All graph walks use explicit stacks and visited sets.

use pl_components::Flow;
use pl_core::NodeId;
use pl_graph::{NodeRole, RoleIndex, Topology};
use tracing::{trace, warn};

use crate::blockage::BlockageMap;

/// Steam the core wants to send this step, before capacity limits.
///
/// `min(|core - sink|, core, max_rate)` over steam volumes.
pub fn steam_candidate(core_steam: i64, sink_steam: i64, max_rate: i64) -> i64 {
    (core_steam - sink_steam)
        .abs()
        .min(core_steam)
        .min(max_rate)
        .max(0)
}

fn is_pressurized(topology: &Topology, id: NodeId) -> bool {
    topology.role(id).is_some_and(NodeRole::is_pressurized)
}

/// Is there an unblocked downstream path from `start` to `goal`?
///
/// The walk does not pass through pressurized nodes other than `goal`.
pub fn path_exists(topology: &Topology, blockage: &BlockageMap, start: NodeId, goal: NodeId) -> bool {
    if start == goal {
        return true;
    }
    let mut visited = vec![false; topology.len()];
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        let next: Vec<NodeId> = if topology.role(node) == Some(NodeRole::Branch) {
            topology
                .branch_outputs(node)
                .iter()
                .enumerate()
                .filter(|&(slot, _)| !blockage.is_blocked(node, slot))
                .map(|(_, &o)| o)
                .collect()
        } else {
            topology.downstream(node).into_iter().collect()
        };

        for n in next {
            if n == goal {
                return true;
            }
            if is_pressurized(topology, n) || visited[n.slot()] {
                continue;
            }
            visited[n.slot()] = true;
            stack.push(n);
        }
    }
    false
}

/// Is there an unblocked upstream path from `start` back to `goal`?
///
/// Crossing a branch edge requires that edge to be open. The walk does not
/// pass through pressurized nodes other than `goal`.
pub fn reaches_backward(
    topology: &Topology,
    blockage: &BlockageMap,
    start: NodeId,
    goal: NodeId,
) -> bool {
    if start == goal {
        return true;
    }
    let mut visited = vec![false; topology.len()];
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        let preds: Vec<NodeId> = if topology.role(node) == Some(NodeRole::Branch) {
            topology.branch_inputs(node).to_vec()
        } else {
            topology.upstream(node).into_iter().collect()
        };

        for p in preds {
            if !blockage.edge_open(topology, p, node) {
                continue;
            }
            if p == goal {
                return true;
            }
            if is_pressurized(topology, p) || visited[p.slot()] {
                continue;
            }
            visited[p.slot()] = true;
            stack.push(p);
        }
    }
    false
}

/// Total throughput of the throttles that can still be reached backwards from `core`.
pub fn throttle_capacity(
    topology: &Topology,
    blockage: &BlockageMap,
    core: NodeId,
    throttles: impl IntoIterator<Item = (NodeId, i64)>,
) -> i64 {
    throttles
        .into_iter()
        .filter(|&(id, _)| reaches_backward(topology, blockage, id, core))
        .map(|(_, max)| max)
        .sum()
}

/// Copy flow down the chain starting at `start`.
///
/// A pressurized `start` already carries its seeded flow, so copying begins
/// with its downstream neighbour. Any other `start` copies from its upstream
/// neighbour. Stops at a branch or a pressurized node.
pub fn propagate_chain(topology: &Topology, flows: &mut [Flow], start: NodeId) {
    let (mut prev, mut current) = if is_pressurized(topology, start) {
        match topology.downstream(start) {
            Some(d) => (start, d),
            None => return,
        }
    } else {
        match topology.upstream(start) {
            Some(u) => (u, start),
            None => return,
        }
    };

    for _ in 0..topology.len() {
        match topology.role(current) {
            Some(NodeRole::Throttle | NodeRole::Mover | NodeRole::Spinner) => {}
            _ => return,
        }
        let (rate, temperature) = (flows[prev.slot()].rate(), flows[prev.slot()].temperature());
        flows[current.slot()].set(rate, temperature);
        trace!(node = %current, rate, temperature, "chain flow");

        match topology.downstream(current) {
            Some(next) => {
                prev = current;
                current = next;
            }
            None => return,
        }
    }
}

/// Rate and temperature a branch emits given its inputs.
///
/// Rate is the summed input rate divided by the number of open outputs,
/// truncating; temperature is the truncated mean over all inputs.
pub fn branch_output(
    topology: &Topology,
    blockage: &BlockageMap,
    flows: &[Flow],
    branch: NodeId,
) -> (i64, i64) {
    let inputs = topology.branch_inputs(branch);
    let total: i64 = inputs.iter().map(|i| flows[i.slot()].rate()).sum();
    let temperature_sum: i64 = inputs.iter().map(|i| flows[i.slot()].temperature()).sum();

    let open = blockage.unblocked_outputs(branch) as i64;
    let rate = if open > 0 { total / open } else { 0 };
    let temperature = if inputs.is_empty() {
        0
    } else {
        temperature_sum / inputs.len() as i64
    };
    (rate, temperature)
}

/// Push a branch's current flow through its open outputs, recursing into
/// downstream branches. Pressurized outputs are left alone.
pub fn propagate_from_branch(
    topology: &Topology,
    blockage: &BlockageMap,
    flows: &mut [Flow],
    branch: NodeId,
) {
    let mut visited = vec![false; topology.len()];
    visited[branch.slot()] = true;
    let mut stack = vec![branch];

    while let Some(b) = stack.pop() {
        for (slot, &out) in topology.branch_outputs(b).iter().enumerate() {
            if blockage.is_blocked(b, slot) {
                continue;
            }
            match topology.role(out) {
                Some(NodeRole::Branch) => {
                    if !visited[out.slot()] {
                        visited[out.slot()] = true;
                        stack.push(out);
                    }
                }
                Some(NodeRole::Core | NodeRole::Sink) | None => {}
                Some(_) => propagate_chain(topology, flows, out),
            }
        }
    }
}

/// Recompute every branch until a full pass changes no branch rate.
///
/// Returns the number of passes. The pass budget is one more than the
/// branch count plus a confirming pass; running out of it is logged.
pub fn resolve_branches(
    topology: &Topology,
    roles: &RoleIndex,
    blockage: &BlockageMap,
    flows: &mut [Flow],
) -> usize {
    let budget = roles.branches().len() + 2;
    for pass in 1..=budget {
        let mut changed = false;
        for &branch in roles.branches() {
            let old = flows[branch.slot()].rate();
            let (rate, temperature) = branch_output(topology, blockage, flows, branch);
            flows[branch.slot()].set(rate, temperature);
            if rate != old {
                propagate_from_branch(topology, blockage, flows, branch);
                changed = true;
            }
        }
        if !changed {
            return pass;
        }
    }
    warn!(budget, "branch flow fixpoint did not settle");
    budget
}
