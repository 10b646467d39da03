// neurograd-core/src/nn/losses/mse.rs

use crate::error::NeuroGradError;
use crate::value::Value;
use std::str::FromStr;

/// Specifies the reduction to apply to the squared errors: 'sum' | 'mean'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Sum,
    Mean,
}

impl FromStr for Reduction {
    type Err = NeuroGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(NeuroGradError::InvalidConfig(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Squared-error loss between predictions (graph nodes) and plain targets.
///
/// The result is itself a graph node, so `backward()` on it reaches every prediction's
/// ancestry.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Computes `Σ (prediction − target)²`, divided by the count for `Reduction::Mean`.
    ///
    /// # Errors
    /// `LengthMismatch` if the slices differ in length, `InvalidConfig` if both are empty.
    pub fn calculate<'g>(
        &self,
        predictions: &[Value<'g>],
        targets: &[f64],
    ) -> Result<Value<'g>, NeuroGradError> {
        if predictions.len() != targets.len() {
            return Err(NeuroGradError::LengthMismatch {
                expected: predictions.len(),
                actual: targets.len(),
                context: "loss targets".to_string(),
            });
        }
        let Some(first) = predictions.first() else {
            return Err(NeuroGradError::InvalidConfig(
                "cannot compute a loss over zero predictions".to_string(),
            ));
        };

        let graph = first.graph();
        let squared = predictions
            .iter()
            .zip(targets)
            .map(|(&pred, &target)| (pred - target).pow(2.0));
        let total = graph.sum(squared);

        Ok(match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => total * (1.0 / predictions.len() as f64),
        })
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
