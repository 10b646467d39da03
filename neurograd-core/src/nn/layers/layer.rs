use crate::error::NeuroGradError;
use crate::graph::Graph;
use crate::nn::init::Init;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::{prefixed, Module};
use crate::value::Value;
use rand::Rng;

/// `nout` neurons reading the same inputs.
#[derive(Debug, Clone)]
pub struct Layer<'g> {
    neurons: Vec<Neuron<'g>>,
}

impl<'g> Layer<'g> {
    pub fn new<R: Rng + ?Sized>(
        graph: &'g Graph,
        nin: usize,
        nout: usize,
        rng: &mut R,
    ) -> Result<Self, NeuroGradError> {
        Self::build(graph, nin, nout, Init::default(), rng, "layer")
    }

    pub(crate) fn build<R: Rng + ?Sized>(
        graph: &'g Graph,
        nin: usize,
        nout: usize,
        init: Init,
        rng: &mut R,
        prefix: &str,
    ) -> Result<Self, NeuroGradError> {
        if nout == 0 {
            return Err(NeuroGradError::InvalidConfig(
                "a layer needs at least one neuron".to_string(),
            ));
        }
        let neurons = (0..nout)
            .map(|j| Neuron::build(graph, nin, init, rng, &format!("{prefix}.neurons.{j}")))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons })
    }

    pub fn from_neurons(neurons: Vec<Neuron<'g>>) -> Self {
        Layer { neurons }
    }

    pub fn neurons(&self) -> &[Neuron<'g>] {
        &self.neurons
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }
}

impl<'g> Module<'g> for Layer<'g> {
    fn forward(&self, inputs: &[Value<'g>]) -> Result<Vec<Value<'g>>, NeuroGradError> {
        self.neurons.iter().map(|n| n.activate(inputs)).collect()
    }

    fn parameters(&self) -> Vec<Value<'g>> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value<'g>)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(j, n)| prefixed(&format!("neurons.{j}"), n.named_parameters()))
            .collect()
    }
}
