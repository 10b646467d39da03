use crate::error::NeuroGradError;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// How parameter leaves get their starting values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform on `[low, high]`.
    Uniform { low: f64, high: f64 },
    /// Normal with mean 0.
    Normal { std: f64 },
    Constant(f64),
}

impl Default for Init {
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Draws `n` starting values.
    ///
    /// # Errors
    /// `InvalidConfig` for an empty/inverted uniform range or a negative/non-finite std.
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<f64>, NeuroGradError> {
        match *self {
            Init::Uniform { low, high } => {
                if !(low.is_finite() && high.is_finite() && low <= high) {
                    return Err(NeuroGradError::InvalidConfig(format!(
                        "uniform init needs finite low <= high, got [{low}, {high}]"
                    )));
                }
                Ok((0..n).map(|_| rng.gen_range(low..=high)).collect())
            }
            Init::Normal { std } => {
                // rand_distr accepts a negative std_dev and mirrors the samples.
                if !(std.is_finite() && std >= 0.0) {
                    return Err(NeuroGradError::InvalidConfig(format!(
                        "normal init needs a finite std >= 0, got {std}"
                    )));
                }
                let dist = Normal::new(0.0, std).map_err(|e| {
                    NeuroGradError::InvalidConfig(format!("normal init with std {std}: {e}"))
                })?;
                Ok((0..n).map(|_| dist.sample(rng)).collect())
            }
            Init::Constant(c) => Ok(vec![c; n]),
        }
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
