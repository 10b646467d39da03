use crate::error::NeuroGradError;
use crate::graph::Graph;
use crate::nn::init::Init;
use crate::nn::layers::layer::Layer;
use crate::nn::module::{prefixed, Module};
use crate::value::Value;
use rand::Rng;

/// Multi-layer perceptron: hidden layers followed by an output layer.
///
/// Each layer's output handles are fed unchanged to the next layer, so the whole network
/// is one connected graph and gradients from the output reach the first layer's weights.
#[derive(Debug, Clone)]
pub struct Mlp<'g> {
    graph: &'g Graph,
    layers: Vec<Layer<'g>>,
}

impl<'g> Mlp<'g> {
    /// Builds a network taking `nin` inputs with one layer per entry of `layer_sizes`;
    /// the last entry is the output width.
    ///
    /// # Errors
    /// `InvalidConfig` if `layer_sizes` is empty or contains a zero.
    pub fn new<R: Rng + ?Sized>(
        graph: &'g Graph,
        nin: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, NeuroGradError> {
        Self::with_init(graph, nin, layer_sizes, Init::default(), rng)
    }

    pub fn with_init<R: Rng + ?Sized>(
        graph: &'g Graph,
        nin: usize,
        layer_sizes: &[usize],
        init: Init,
        rng: &mut R,
    ) -> Result<Self, NeuroGradError> {
        if layer_sizes.is_empty() {
            return Err(NeuroGradError::InvalidConfig(
                "an MLP needs at least an output layer".to_string(),
            ));
        }
        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut width = nin;
        for (k, &nout) in layer_sizes.iter().enumerate() {
            layers.push(Layer::build(graph, width, nout, init, rng, &format!("layers.{k}"))?);
            width = nout;
        }
        log::debug!(
            "Mlp: built {} layers ({} -> {:?}), {} parameters",
            layers.len(),
            nin,
            layer_sizes,
            layers.iter().map(|l| l.num_parameters()).sum::<usize>()
        );
        Ok(Mlp { graph, layers })
    }

    pub fn layers(&self) -> &[Layer<'g>] {
        &self.layers
    }

    pub fn hidden_layers(&self) -> &[Layer<'g>] {
        &self.layers[..self.layers.len() - 1]
    }

    pub fn output_layer(&self) -> &Layer<'g> {
        &self.layers[self.layers.len() - 1]
    }

    /// Forward pass on plain numbers; each input becomes a fresh leaf.
    pub fn predict(&self, inputs: &[f64]) -> Result<Vec<Value<'g>>, NeuroGradError> {
        let leaves = self.graph.leaves(inputs);
        self.forward(&leaves)
    }
}

impl<'g> Module<'g> for Mlp<'g> {
    fn forward(&self, inputs: &[Value<'g>]) -> Result<Vec<Value<'g>>, NeuroGradError> {
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }

    fn parameters(&self) -> Vec<Value<'g>> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value<'g>)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(k, l)| prefixed(&format!("layers.{k}"), l.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
