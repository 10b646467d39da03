use super::Value;

impl<'g> Value<'g> {
    /// Runs reverse-mode differentiation from this node.
    ///
    /// Seeds this node's gradient with 1.0 and propagates contributions to every ancestor in
    /// reverse topological order. Leaf gradients are **not** reset first: calling `backward`
    /// twice on the same root doubles every leaf gradient. Call [`Value::zero_grad`] between
    /// passes when accumulation is not wanted. A stale handle is a no-op.
    pub fn backward(&self) {
        self.graph.backward(self.id);
    }

    /// Sets the gradient of this node and every ancestor to zero.
    pub fn zero_grad(&self) {
        self.graph.zero_grad(self.id);
    }

    /// Handles for every node reachable from this one, this node first.
    pub fn ancestry(&self) -> Vec<Value<'g>> {
        self.graph
            .reachable(self.id)
            .into_iter()
            .map(|id| Value::from_id(self.graph, id))
            .collect()
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
