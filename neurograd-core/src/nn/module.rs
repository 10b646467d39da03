use crate::error::NeuroGradError;
use crate::value::Value;

/// The base trait for network components (neurons, layers, networks).
///
/// Parameters are ordinary leaf nodes of the graph `'g`; a module owns no state the autograd
/// engine does not already track.
pub trait Module<'g>: std::fmt::Debug {
    /// Performs a forward pass.
    ///
    /// The returned handles are live graph nodes whose ancestry includes every parameter and
    /// input used, so `backward()` on anything derived from them reaches the parameters.
    fn forward(&self, inputs: &[Value<'g>]) -> Result<Vec<Value<'g>>, NeuroGradError>;

    /// All learnable parameters, in a stable order.
    fn parameters(&self) -> Vec<Value<'g>>;

    /// Parameters with hierarchical names (e.g. `"layers.0.neurons.1.w2"`).
    fn named_parameters(&self) -> Vec<(String, Value<'g>)>;

    /// Sets every parameter gradient to zero.
    fn zero_grad(&self) {
        for p in self.parameters() {
            p.set_grad(0.0);
        }
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

/// Prefixes every name in `params` with `prefix.`.
pub(crate) fn prefixed<'g>(prefix: &str, params: Vec<(String, Value<'g>)>) -> Vec<(String, Value<'g>)> {
    params
        .into_iter()
        .map(|(name, p)| (format!("{prefix}.{name}"), p))
        .collect()
}
