use crate::error::NeuroGradError;
use crate::optim::optimizer_trait::Optimizer;

/// Adjusts an optimizer's learning rate once per training step.
pub trait LrScheduler {
    /// Advances the schedule by one step and updates the optimizer's learning rate.
    fn step(&mut self);

    /// The learning rate currently set on the optimizer.
    fn get_last_lr(&self) -> f64;
}

/// Scales the base learning rate by a factor that moves linearly from `start_factor` to
/// `end_factor` over `total_iters` steps and stays at `end_factor` afterwards.
#[derive(Debug)]
pub struct LinearLR<O: Optimizer> {
    optimizer: O,
    base_lr: f64,
    start_factor: f64,
    end_factor: f64,
    total_iters: usize,
    last_epoch: usize,
}

impl<O: Optimizer> LinearLR<O> {
    /// Wraps `optimizer`, whose current learning rate becomes the base rate.
    /// The optimizer's rate is immediately set to `base_lr * start_factor`.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if `total_iters` is 0, `start_factor` is outside (0, 1] or
    /// `end_factor` is outside [0, 1].
    pub fn new(
        mut optimizer: O,
        start_factor: f64,
        end_factor: f64,
        total_iters: usize,
    ) -> Result<Self, NeuroGradError> {
        if total_iters == 0 {
            return Err(NeuroGradError::InvalidConfig(
                "LinearLR: total_iters cannot be zero".to_string(),
            ));
        }
        if !(start_factor > 0.0 && start_factor <= 1.0) {
            return Err(NeuroGradError::InvalidConfig(format!(
                "LinearLR: start_factor must be in (0, 1], got {start_factor}"
            )));
        }
        if !(0.0..=1.0).contains(&end_factor) {
            return Err(NeuroGradError::InvalidConfig(format!(
                "LinearLR: end_factor must be in [0, 1], got {end_factor}"
            )));
        }
        let base_lr = optimizer.lr();
        optimizer.set_lr(base_lr * start_factor);
        Ok(LinearLR {
            optimizer,
            base_lr,
            start_factor,
            end_factor,
            total_iters,
            last_epoch: 0,
        })
    }

    fn factor(&self, epoch: usize) -> f64 {
        let progress = epoch.min(self.total_iters) as f64 / self.total_iters as f64;
        self.start_factor + (self.end_factor - self.start_factor) * progress
    }

    pub fn optimizer(&self) -> &O {
        &self.optimizer
    }

    pub fn optimizer_mut(&mut self) -> &mut O {
        &mut self.optimizer
    }

    pub fn into_inner(self) -> O {
        self.optimizer
    }
}

impl<O: Optimizer> LrScheduler for LinearLR<O> {
    fn step(&mut self) {
        self.last_epoch += 1;
        let lr = self.base_lr * self.factor(self.last_epoch);
        self.optimizer.set_lr(lr);
    }

    fn get_last_lr(&self) -> f64 {
        self.optimizer.lr()
    }
}

#[cfg(test)]
#[path = "lr_scheduler_tests.rs"]
mod tests;
