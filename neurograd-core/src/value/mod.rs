//! Node handles.
//!
//! A `Value<'g>` is a copyable reference to one node of a [`Graph`]: an identifier plus the
//! graph it lives in. All real state stays in the graph's registry, so copying a handle
//! never copies the node and two handles are equal exactly when their identifiers are.
//!
//! Both operands of a binary operator must come from the same graph. The result is recorded
//! on the left operand's graph, so a right operand from another graph becomes a dangling
//! parent: its value is used in the forward pass but it never receives a gradient.

use crate::graph::Graph;
use crate::node_id::NodeId;
use std::fmt;
use std::hash::{Hash, Hasher};

pub mod accessors;
pub mod arithmetic;
pub mod autograd_methods;

#[derive(Clone, Copy)]
pub struct Value<'g> {
    graph: &'g Graph,
    id: NodeId,
}

impl<'g> Value<'g> {
    pub(crate) fn from_id(graph: &'g Graph, id: NodeId) -> Self {
        Value { graph, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The graph this handle belongs to.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }
}

impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Value<'_> {}

impl Hash for Value<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("id", &self.id)
            .field("name", &self.name())
            .field("data", &self.value())
            .field("grad", &self.grad())
            .field("op", &self.op())
            .finish()
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={}, grad={})", self.value(), self.grad())
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
