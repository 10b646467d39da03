//! The caller-owned computation graph.
//!
//! A `Graph` owns the node registry and the identifier service. Handles (`Value<'g>`)
//! borrow the graph they were created on, so every node's lifetime is bounded by its
//! graph and tests get isolation simply by creating a fresh `Graph`.

use crate::autograd;
use crate::autograd::Operation;
use crate::error::NeuroGradError;
use crate::node_id::{IdGenerator, NodeId};
use crate::registry::{NodeRecord, Registry};
use crate::value::Value;
use std::cell::{Ref, RefCell};

/// A registry length mark. Nodes created after it are dropped by [`Graph::rewind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Checkpoint(usize);

#[derive(Debug, Default)]
pub struct Graph {
    registry: RefCell<Registry>,
    ids: RefCell<IdGenerator>,
}

impl Graph {
    /// Creates an empty graph whose identifiers come from OS entropy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with a deterministic identifier sequence.
    pub fn with_seed(seed: u64) -> Self {
        Graph {
            registry: RefCell::new(Registry::new()),
            ids: RefCell::new(IdGenerator::from_seed(seed)),
        }
    }

    /// Creates a leaf node holding `value`.
    pub fn leaf(&self, value: f64) -> Value<'_> {
        let idx = self.len();
        self.named_leaf(format!("v{idx}"), value)
    }

    /// Creates a named leaf node holding `value`.
    pub fn named_leaf(&self, name: impl Into<String>, value: f64) -> Value<'_> {
        self.push(name.into(), value, Operation::None, None, None, None)
    }

    /// Creates one leaf per element of `values`.
    pub fn leaves(&self, values: &[f64]) -> Vec<Value<'_>> {
        values.iter().map(|&v| self.leaf(v)).collect()
    }

    /// Sums `values` into a single node by chaining additions.
    ///
    /// An empty input yields a fresh zero leaf.
    pub fn sum<'g>(&'g self, values: impl IntoIterator<Item = Value<'g>>) -> Value<'g> {
        let mut iter = values.into_iter();
        match iter.next() {
            Some(first) => iter.fold(first, |acc, v| acc + v),
            None => self.leaf(0.0),
        }
    }

    pub(crate) fn push(
        &self,
        name: String,
        value: f64,
        op: Operation,
        parent1: Option<NodeId>,
        parent2: Option<NodeId>,
        exponent: Option<f64>,
    ) -> Value<'_> {
        let id = self.ids.borrow_mut().next_id();
        self.registry.borrow_mut().register(NodeRecord {
            id,
            name,
            value,
            grad: 0.0,
            op,
            parent1,
            parent2,
            exponent,
        });
        Value::from_id(self, id)
    }

    /// Registers a node under a caller-chosen identifier.
    ///
    /// `exponent` is required for `Operation::Pow` and ignored otherwise. Returns `false`
    /// (and changes nothing) if the identifier is already present or a `Pow` node comes
    /// without an exponent.
    pub fn register(
        &self,
        id: NodeId,
        value: f64,
        op: Operation,
        parent1: Option<NodeId>,
        parent2: Option<NodeId>,
        exponent: Option<f64>,
    ) -> bool {
        let exponent = match (op, exponent) {
            (Operation::Pow, None) => {
                log::warn!("Graph: refusing Pow node {} without an exponent", id);
                return false;
            }
            (Operation::Pow, n) => n,
            _ => None,
        };
        let name = format!("n{}", self.len());
        self.registry.borrow_mut().register(NodeRecord {
            id,
            name,
            value,
            grad: 0.0,
            op,
            parent1,
            parent2,
            exponent,
        })
    }

    /// Returns a handle for `id` if the node exists.
    pub fn handle(&self, id: NodeId) -> Option<Value<'_>> {
        self.contains(id).then(|| Value::from_id(self, id))
    }

    /// Returns a copy of the node record, or `None` if unknown.
    pub fn get(&self, id: NodeId) -> Option<NodeRecord> {
        self.registry.borrow().get(id).cloned()
    }

    /// Strict variant of [`Graph::get`].
    pub fn try_get(&self, id: NodeId) -> Result<NodeRecord, NeuroGradError> {
        self.get(id).ok_or(NeuroGradError::UnknownNode(id))
    }

    /// Reads from a node without cloning the whole record.
    pub(crate) fn with_node<R>(&self, id: NodeId, f: impl FnOnce(&NodeRecord) -> R) -> Option<R> {
        self.registry.borrow().get(id).map(f)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.registry.borrow().contains(id)
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.borrow().is_empty()
    }

    pub fn set_gradient(&self, id: NodeId, grad: f64) -> bool {
        self.registry.borrow_mut().set_gradient(id, grad)
    }

    pub fn add_to_gradient(&self, id: NodeId, delta: f64) -> bool {
        self.registry.borrow_mut().add_to_gradient(id, delta)
    }

    pub fn set_value(&self, id: NodeId, value: f64) -> bool {
        self.registry.borrow_mut().set_value(id, value)
    }

    /// Removes every node. Existing handles become stale.
    pub fn clear(&self) {
        log::debug!("Graph: clearing {} nodes", self.len());
        self.registry.borrow_mut().clear();
    }

    /// Marks the current end of the registry.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.len())
    }

    /// Drops every node created after `checkpoint`; nodes created before it are untouched.
    pub fn rewind(&self, checkpoint: Checkpoint) {
        let before = self.len();
        self.registry.borrow_mut().truncate(checkpoint.0);
        log::debug!(
            "Graph: rewound from {} to {} nodes",
            before,
            self.len()
        );
    }

    /// Every node reachable from `root` through parent links, `root` first.
    pub fn reachable(&self, root: NodeId) -> Vec<NodeId> {
        autograd::graph::reachable(&self.registry.borrow(), root)
    }

    /// Topological order (parents before children) of the nodes reachable from `root`.
    pub fn topological_order(&self, root: NodeId) -> Vec<NodeId> {
        autograd::graph::topological_order(&self.registry.borrow(), root)
    }

    /// Runs the backward pass from `root`. See [`Value::backward`].
    pub fn backward(&self, root: NodeId) {
        autograd::engine::backward(&mut self.registry.borrow_mut(), root);
    }

    /// Sets the gradient of every node reachable from `root` to zero.
    pub fn zero_grad(&self, root: NodeId) {
        autograd::engine::zero_grad(&mut self.registry.borrow_mut(), root);
    }

    /// Records of every node reachable from `root`, in topological order.
    ///
    /// This is the read surface a graph renderer needs; it never mutates.
    pub fn trace(&self, root: NodeId) -> Vec<NodeRecord> {
        let registry = self.registry.borrow();
        autograd::graph::topological_order(&registry, root)
            .into_iter()
            .filter_map(|id| registry.get(id).cloned())
            .collect()
    }

    /// Borrows the registry for read-only inspection.
    pub fn registry(&self) -> Ref<'_, Registry> {
        self.registry.borrow()
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
