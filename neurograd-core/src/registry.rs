//! Node storage: the single source of truth for every node's state.
//!
//! Records are kept densely in creation order with a hash index from identifier to slot.
//! Creation order is always a valid topological order, which is what makes `truncate`
//! safe: dropping a suffix never leaves a surviving node pointing at a removed parent.

use crate::autograd::Operation;
use crate::node_id::NodeId;
use std::collections::HashMap;

/// Everything the engine knows about one node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    pub id: NodeId,
    pub name: String,
    pub value: f64,
    pub grad: f64,
    pub op: Operation,
    pub parent1: Option<NodeId>,
    pub parent2: Option<NodeId>,
    /// Exponent of a `Pow` node.
    pub exponent: Option<f64>,
}

impl NodeRecord {
    /// Iterates over the parent links that are set.
    pub fn parents(&self) -> impl Iterator<Item = NodeId> {
        self.parent1.into_iter().chain(self.parent2)
    }

    pub fn is_leaf(&self) -> bool {
        self.op.is_leaf()
    }
}

#[derive(Debug, Default)]
pub struct Registry {
    nodes: Vec<NodeRecord>,
    index: HashMap<NodeId, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new entry with a zero gradient.
    ///
    /// Returns `false` and leaves the registry unchanged if `record.id` is already present.
    /// The incoming gradient is ignored.
    pub fn register(&mut self, mut record: NodeRecord) -> bool {
        if self.index.contains_key(&record.id) {
            log::warn!(
                "Registry: identifier {} already registered, ignoring new node '{}'",
                record.id,
                record.name
            );
            return false;
        }
        record.grad = 0.0;
        self.index.insert(record.id, self.nodes.len());
        self.nodes.push(record);
        true
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeRecord> {
        self.index.get(&id).map(|&slot| &self.nodes[slot])
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeRecord> {
        match self.index.get(&id) {
            Some(&slot) => Some(&mut self.nodes[slot]),
            None => None,
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Overwrites the gradient. Returns whether the node was found.
    pub fn set_gradient(&mut self, id: NodeId, grad: f64) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.grad = grad;
                true
            }
            None => false,
        }
    }

    /// Adds `delta` to the gradient. Returns whether the node was found.
    pub fn add_to_gradient(&mut self, id: NodeId, delta: f64) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.grad += delta;
                true
            }
            None => false,
        }
    }

    /// Overwrites the stored value. Used by optimisers on parameter leaves;
    /// nodes already derived from this one keep the value they were created with.
    pub fn set_value(&mut self, id: NodeId, value: f64) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.value = value;
                true
            }
            None => false,
        }
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
    }

    /// Removes every entry registered after the first `len`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.nodes.len() {
            return;
        }
        for removed in self.nodes.drain(len..) {
            self.index.remove(&removed.id);
        }
    }

    /// Iterates over all records in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &NodeRecord> {
        self.nodes.iter()
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
