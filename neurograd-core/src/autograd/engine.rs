//! The backward sweep.

use super::backward_op::local_gradients;
use super::graph::{reachable, topological_order};
use crate::node_id::NodeId;
use crate::registry::Registry;
use std::fmt;

/// Where a backward pass is. A call always runs Idle → Ordering → Propagating → Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackwardPhase {
    Idle,
    Ordering,
    Propagating,
}

impl fmt::Display for BackwardPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BackwardPhase::Idle => "idle",
            BackwardPhase::Ordering => "ordering",
            BackwardPhase::Propagating => "propagating",
        };
        f.write_str(s)
    }
}

fn enter(phase: BackwardPhase, root: NodeId) {
    log::trace!("backward({:?}): {}", root, phase);
}

/// Propagates gradients from `root` to every reachable ancestor.
///
/// The root is seeded with 1.0. Interior nodes (non-leaf, non-root) only carry transient
/// sums and start each pass at zero; leaf gradients accumulate across calls.
pub fn backward(registry: &mut Registry, root: NodeId) {
    if !registry.contains(root) {
        log::debug!("backward: root {:?} is not in the graph, nothing to do", root);
        return;
    }

    enter(BackwardPhase::Ordering, root);
    let order = topological_order(registry, root);

    enter(BackwardPhase::Propagating, root);
    let interior: Vec<NodeId> = order
        .iter()
        .copied()
        .filter(|&id| id != root && registry.get(id).is_some_and(|n| !n.is_leaf()))
        .collect();
    for id in interior {
        registry.set_gradient(id, 0.0);
    }
    registry.set_gradient(root, 1.0);

    for &id in order.iter().rev() {
        let Some(node) = registry.get(id) else {
            continue;
        };
        if node.is_leaf() {
            continue;
        }
        let contributions = local_gradients(registry, node);
        for (parent, delta) in contributions.into_iter().flatten() {
            log::trace!("  {:?} -> {:?}: {:+}", id, parent, delta);
            registry.add_to_gradient(parent, delta);
        }
    }

    enter(BackwardPhase::Idle, root);
}

/// Zeroes the gradient of every node reachable from `root`.
pub fn zero_grad(registry: &mut Registry, root: NodeId) {
    let nodes = reachable(registry, root);
    log::debug!("zero_grad: clearing {} gradients", nodes.len());
    for id in nodes {
        registry.set_gradient(id, 0.0);
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
