//! Full-batch training loop for any [`Module`].

use crate::error::NeuroGradError;
use crate::graph::Graph;
use crate::nn::losses::{MSELoss, Reduction};
use crate::nn::module::Module;
use crate::optim::{LinearLR, LrScheduler, Optimizer, Sgd};
use crate::value::Value;

/// Training hyper-parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    /// Number of full passes over the training set.
    pub steps: usize,
    /// Base learning rate.
    pub learning_rate: f64,
    /// Learning-rate multiplier at the first step.
    pub start_factor: f64,
    /// Learning-rate multiplier the schedule decays towards. Step `k` of `steps` uses
    /// `start_factor + (end_factor - start_factor) * k / steps`, so the last step stays one
    /// decrement above it.
    pub end_factor: f64,
    pub weight_decay: f64,
    /// Emit an `info!` line every this many steps (0 disables).
    pub log_every: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            steps: 100,
            learning_rate: 1.0,
            start_factor: 1.0,
            end_factor: 0.1,
            weight_decay: 0.0,
            log_every: 10,
        }
    }
}

impl TrainConfig {
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Linear decay from `learning_rate * start_factor` towards `learning_rate * end_factor`.
    pub fn with_decay(mut self, start_factor: f64, end_factor: f64) -> Self {
        self.start_factor = start_factor;
        self.end_factor = end_factor;
        self
    }

    pub fn with_weight_decay(mut self, weight_decay: f64) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    fn validate(&self) -> Result<(), NeuroGradError> {
        if self.steps == 0 {
            return Err(NeuroGradError::InvalidConfig(
                "training needs at least one step".to_string(),
            ));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(NeuroGradError::InvalidConfig(format!(
                "learning rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}

/// What a training run produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainReport {
    /// Total loss at each step, measured before that step's update.
    pub losses: Vec<f64>,
    /// Learning rate used at each step.
    pub learning_rates: Vec<f64>,
}

impl TrainReport {
    pub fn final_loss(&self) -> Option<f64> {
        self.losses.last().copied()
    }
}

#[derive(Debug, Clone)]
pub struct Trainer {
    config: TrainConfig,
    loss_fn: MSELoss,
}

impl Trainer {
    /// # Errors
    /// `InvalidConfig` for zero steps or a non-positive learning rate.
    pub fn new(config: TrainConfig) -> Result<Self, NeuroGradError> {
        config.validate()?;
        Ok(Trainer {
            config,
            loss_fn: MSELoss::new(Reduction::Sum),
        })
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Trains `model` on `inputs`/`targets` with full-batch gradient descent.
    ///
    /// Each step: forward every sample, build the summed squared-error loss as a graph node,
    /// zero the parameter gradients, `backward()` on the loss, update each parameter with
    /// `value -= lr * grad`, then rewind `graph` to drop the step's temporary nodes. The
    /// parameters must already exist on `graph` when this is called.
    ///
    /// # Errors
    /// `LengthMismatch` if `inputs` and `targets` differ in length or a sample's target width
    /// differs from the model's output width; `InvalidConfig` for an empty training set or
    /// a bad schedule. Errors from the model's forward pass are passed through.
    pub fn fit<'g, M: Module<'g>>(
        &self,
        graph: &'g Graph,
        model: &M,
        inputs: &[Vec<f64>],
        targets: &[Vec<f64>],
    ) -> Result<TrainReport, NeuroGradError> {
        if inputs.len() != targets.len() {
            return Err(NeuroGradError::LengthMismatch {
                expected: inputs.len(),
                actual: targets.len(),
                context: "training targets".to_string(),
            });
        }
        if inputs.is_empty() {
            return Err(NeuroGradError::InvalidConfig(
                "training set is empty".to_string(),
            ));
        }

        let optimizer = Sgd::new(model.parameters(), self.config.learning_rate)
            .with_weight_decay(self.config.weight_decay);
        let mut scheduler = LinearLR::new(
            optimizer,
            self.config.start_factor,
            self.config.end_factor,
            self.config.steps,
        )?;

        let mut report = TrainReport::default();
        for step in 0..self.config.steps {
            let mark = graph.checkpoint();
            let lr = scheduler.get_last_lr();

            let loss = match self.total_loss(model, graph, inputs, targets) {
                Ok(loss) => loss,
                Err(e) => {
                    graph.rewind(mark);
                    return Err(e);
                }
            };

            scheduler.optimizer_mut().zero_grad();
            loss.backward();
            let loss_value = loss.value();
            let updated = scheduler.optimizer_mut().step();
            graph.rewind(mark);
            updated?;

            if self.config.log_every > 0 && step % self.config.log_every == 0 {
                log::info!("step {} loss {:.6} lr {:.4}", step, loss_value, lr);
            }
            report.losses.push(loss_value);
            report.learning_rates.push(lr);
            scheduler.step();
        }
        Ok(report)
    }

    fn total_loss<'g, M: Module<'g>>(
        &self,
        model: &M,
        graph: &'g Graph,
        inputs: &[Vec<f64>],
        targets: &[Vec<f64>],
    ) -> Result<Value<'g>, NeuroGradError> {
        let mut predictions = Vec::new();
        let mut flat_targets = Vec::new();
        for (i, (x, y)) in inputs.iter().zip(targets).enumerate() {
            let outputs = model.forward(&graph.leaves(x))?;
            if outputs.len() != y.len() {
                return Err(NeuroGradError::LengthMismatch {
                    expected: outputs.len(),
                    actual: y.len(),
                    context: format!("targets of sample {i}"),
                });
            }
            predictions.extend(outputs);
            flat_targets.extend_from_slice(y);
        }
        self.loss_fn.calculate(&predictions, &flat_targets)
    }
}

#[cfg(test)]
#[path = "trainer_test.rs"]
mod tests;
