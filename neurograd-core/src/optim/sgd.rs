use crate::error::NeuroGradError;
use crate::optim::optimizer_trait::Optimizer;
use crate::value::Value;

/// Implements plain Stochastic Gradient Descent: `value -= lr * (grad + weight_decay * value)`.
#[derive(Debug, Clone)]
pub struct Sgd<'g> {
    params: Vec<Value<'g>>,
    lr: f64,
    weight_decay: f64,
}

impl<'g> Sgd<'g> {
    /// Creates a new `Sgd` over `params` with learning rate `lr` and no weight decay.
    pub fn new(params: impl IntoIterator<Item = Value<'g>>, lr: f64) -> Self {
        Sgd {
            params: params.into_iter().collect(),
            lr,
            weight_decay: 0.0,
        }
    }

    /// Sets the weight decay (L2 penalty) factor.
    pub fn with_weight_decay(mut self, weight_decay: f64) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    pub fn params(&self) -> &[Value<'g>] {
        &self.params
    }
}

impl Optimizer for Sgd<'_> {
    fn step(&mut self) -> Result<(), NeuroGradError> {
        log::debug!("Sgd: step over {} params, lr = {}", self.params.len(), self.lr);
        for param in &self.params {
            let value = param.try_value()?;
            let mut grad = param.try_grad()?;
            if self.weight_decay != 0.0 {
                grad += self.weight_decay * value;
            }
            param.set_value(value - self.lr * grad);
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.set_grad(0.0);
        }
    }

    fn lr(&self) -> f64 {
        self.lr
    }

    fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
