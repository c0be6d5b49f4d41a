//! Repair countdowns for failed movers and spinners.

use pl_core::NodeId;

/// Nodes being repaired and the steps left for each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepairQueue {
    pending: Vec<(NodeId, u32)>,
}

impl RepairQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.pending.iter().any(|&(n, _)| n == id)
    }

    /// Steps left before `id` works again.
    pub fn remaining(&self, id: NodeId) -> Option<u32> {
        self.pending
            .iter()
            .find(|&&(n, _)| n == id)
            .map(|&(_, left)| left)
    }

    /// Start a countdown. Returns `false` if one is already running for `id`.
    pub fn start(&mut self, id: NodeId, steps: u32) -> bool {
        if self.contains(id) {
            return false;
        }
        self.pending.push((id, steps));
        true
    }

    pub fn cancel(&mut self, id: NodeId) {
        self.pending.retain(|&(n, _)| n != id);
    }

    /// Advance every countdown by one step and return the nodes that finished.
    pub fn tick(&mut self) -> Vec<NodeId> {
        let mut done = Vec::new();
        self.pending.retain_mut(|(id, left)| {
            *left = left.saturating_sub(1);
            if *left == 0 {
                done.push(*id);
                false
            } else {
                true
            }
        });
        done
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
