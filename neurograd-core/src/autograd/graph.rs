use crate::node_id::NodeId;
use crate::registry::Registry;
use std::collections::HashSet;

/// Collects every node reachable from `root` through parent links.
///
/// Iterative, stack-based walk; each node is visited at most once. The result is in
/// discovery order with `root` first. Identifiers missing from the registry (dangling parent
/// links, or a stale root) are skipped, so that branch is simply not visited.
pub fn reachable(registry: &Registry, root: NodeId) -> Vec<NodeId> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut found = Vec::new();
    let mut stack = vec![root];

    while let Some(id) = stack.pop() {
        if !visited.insert(id) {
            continue;
        }
        let Some(node) = registry.get(id) else {
            log::trace!("reachable: skipping unknown node {:?}", id);
            continue;
        };
        found.push(id);
        // Push parent2 first so parent1 is explored first.
        stack.extend(node.parent2);
        stack.extend(node.parent1);
    }

    log::debug!("reachable: {} nodes from {:?}", found.len(), root);
    found
}

/// Orders the nodes reachable from `root` so that every node comes after its parents.
///
/// Repeated sweeps over the reachable set: a node is appended once all of its parents that
/// exist in the registry are already placed. Stops when a sweep places nothing. Quadratic in
/// the worst case, which is fine for graphs of a few hundred nodes per step.
pub fn topological_order(registry: &Registry, root: NodeId) -> Vec<NodeId> {
    let pending = reachable(registry, root);
    let mut placed: HashSet<NodeId> = HashSet::with_capacity(pending.len());
    let mut order = Vec::with_capacity(pending.len());

    loop {
        let mut progressed = false;
        for &id in &pending {
            if placed.contains(&id) {
                continue;
            }
            let Some(node) = registry.get(id) else {
                continue;
            };
            let ready = node
                .parents()
                .all(|p| placed.contains(&p) || !registry.contains(p));
            if ready {
                placed.insert(id);
                order.push(id);
                progressed = true;
            }
        }
        if !progressed {
            break;
        }
    }

    if order.len() != pending.len() {
        log::warn!(
            "topological_order: {} of {} reachable nodes could not be placed",
            pending.len() - order.len(),
            pending.len()
        );
    }
    order
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
