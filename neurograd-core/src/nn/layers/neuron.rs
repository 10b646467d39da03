use crate::error::NeuroGradError;
use crate::graph::Graph;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// A single tanh unit: `tanh(bias + Σ w_i * x_i)`.
#[derive(Debug, Clone)]
pub struct Neuron<'g> {
    weights: Vec<Value<'g>>,
    bias: Value<'g>,
}

impl<'g> Neuron<'g> {
    /// Creates a neuron with `nin` weights, all parameters drawn from `Init::default()`.
    pub fn new<R: Rng + ?Sized>(graph: &'g Graph, nin: usize, rng: &mut R) -> Result<Self, NeuroGradError> {
        Self::with_init(graph, nin, Init::default(), rng)
    }

    pub fn with_init<R: Rng + ?Sized>(
        graph: &'g Graph,
        nin: usize,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, NeuroGradError> {
        Self::build(graph, nin, init, rng, "neuron")
    }

    /// Builds the parameter leaves, naming them `{prefix}.w{i}` and `{prefix}.b`.
    pub(crate) fn build<R: Rng + ?Sized>(
        graph: &'g Graph,
        nin: usize,
        init: Init,
        rng: &mut R,
        prefix: &str,
    ) -> Result<Self, NeuroGradError> {
        let mut values = init.sample(nin + 1, rng)?;
        let bias_value = values.pop().unwrap_or_default();
        let weights = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| graph.named_leaf(format!("{prefix}.w{i}"), v))
            .collect();
        let bias = graph.named_leaf(format!("{prefix}.b"), bias_value);
        Ok(Neuron { weights, bias })
    }

    /// Assembles a neuron from existing leaves.
    pub fn from_parameters(weights: Vec<Value<'g>>, bias: Value<'g>) -> Self {
        Neuron { weights, bias }
    }

    pub fn weights(&self) -> &[Value<'g>] {
        &self.weights
    }

    pub fn bias(&self) -> Value<'g> {
        self.bias
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    /// Forward pass for one neuron.
    ///
    /// # Errors
    /// `LengthMismatch` if `inputs.len()` differs from the number of weights.
    pub fn activate(&self, inputs: &[Value<'g>]) -> Result<Value<'g>, NeuroGradError> {
        if inputs.len() != self.weights.len() {
            return Err(NeuroGradError::LengthMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                context: "neuron inputs".to_string(),
            });
        }
        let act = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias, |acc, (&w, &x)| acc + w * x);
        Ok(act.tanh())
    }
}

impl<'g> Module<'g> for Neuron<'g> {
    fn forward(&self, inputs: &[Value<'g>]) -> Result<Vec<Value<'g>>, NeuroGradError> {
        Ok(vec![self.activate(inputs)?])
    }

    fn parameters(&self) -> Vec<Value<'g>> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value<'g>)> {
        let mut named: Vec<(String, Value<'g>)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, &w)| (format!("w{i}"), w))
            .collect();
        named.push(("b".to_string(), self.bias));
        named
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
