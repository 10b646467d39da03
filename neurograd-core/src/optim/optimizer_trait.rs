use crate::error::NeuroGradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating parameter values based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or a `NeuroGradError` otherwise
    /// (for example a parameter whose node no longer exists).
    fn step(&mut self) -> Result<(), NeuroGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Must be called before the backward pass of each iteration unless accumulation
    /// across iterations is wanted: `backward()` never resets leaf gradients.
    fn zero_grad(&mut self);

    /// Current learning rate.
    fn lr(&self) -> f64;

    /// Overwrites the learning rate. Used by schedulers.
    fn set_lr(&mut self, lr: f64);
}
