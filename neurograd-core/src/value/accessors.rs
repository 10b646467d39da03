use super::Value;
use crate::autograd::Operation;
use crate::error::NeuroGradError;
use crate::node_id::NodeId;

impl<'g> Value<'g> {
    /// The node's value, or NaN if the handle is stale (its node was cleared or rewound).
    pub fn value(&self) -> f64 {
        self.graph.with_node(self.id, |n| n.value).unwrap_or(f64::NAN)
    }

    /// The node's accumulated gradient, or NaN if the handle is stale.
    pub fn grad(&self) -> f64 {
        self.graph.with_node(self.id, |n| n.grad).unwrap_or(f64::NAN)
    }

    pub fn try_value(&self) -> Result<f64, NeuroGradError> {
        self.graph
            .with_node(self.id, |n| n.value)
            .ok_or(NeuroGradError::UnknownNode(self.id))
    }

    pub fn try_grad(&self) -> Result<f64, NeuroGradError> {
        self.graph
            .with_node(self.id, |n| n.grad)
            .ok_or(NeuroGradError::UnknownNode(self.id))
    }

    /// The producing operation. A stale handle reports `Operation::None`.
    pub fn op(&self) -> Operation {
        self.graph.with_node(self.id, |n| n.op).unwrap_or_default()
    }

    pub fn name(&self) -> String {
        self.graph
            .with_node(self.id, |n| n.name.clone())
            .unwrap_or_default()
    }

    /// Parent identifiers, `parent1` first.
    pub fn parents(&self) -> Vec<NodeId> {
        self.graph
            .with_node(self.id, |n| n.parents().collect())
            .unwrap_or_default()
    }

    pub fn is_leaf(&self) -> bool {
        self.op().is_leaf()
    }

    /// Whether the node still exists in its graph.
    pub fn is_live(&self) -> bool {
        self.graph.contains(self.id)
    }

    /// Overwrites the node's value in place. Returns `false` for a stale handle.
    ///
    /// Meant for parameter leaves between training steps: nodes already derived from this
    /// one keep the value they were created with.
    pub fn set_value(&self, value: f64) -> bool {
        self.graph.set_value(self.id, value)
    }

    /// Overwrites the node's gradient. Returns `false` for a stale handle.
    pub fn set_grad(&self, grad: f64) -> bool {
        self.graph.set_gradient(self.id, grad)
    }
}
