use crate::error::NeuroGradError;
use crate::node_id::NodeId;
use crate::value::Value;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Gradient check input {input_index} must be a leaf node.")]
    InputNotLeaf { input_index: usize },
    #[error("Gradient check input {input_index} is not in the graph.")]
    UnknownInput { input_index: usize },
    #[error("Graph error during gradient check: {0}")]
    Graph(NeuroGradError),
}

impl From<NeuroGradError> for GradCheckError {
    fn from(err: NeuroGradError) -> Self {
        GradCheckError::Graph(err)
    }
}

/// Checks analytical gradients against central finite differences.
///
/// `func` is evaluated once for the analytical pass (`backward()` from its output) and twice
/// per input with that input's value shifted by `±epsilon`. Every node `func` creates is
/// discarded afterwards. The inputs get their original values and gradients back, and so
/// does every other pre-existing node the analytical pass reached, so the graph is left as
/// it was found.
///
/// Gradients match when they are within `tolerance` absolutely or relatively.
pub fn check_grad<'g, F>(
    func: F,
    inputs: &[Value<'g>],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value<'g>]) -> Value<'g>,
{
    let Some(first) = inputs.first() else {
        return Ok(());
    };
    let graph = first.graph();

    for (i, input) in inputs.iter().enumerate() {
        let record = graph
            .get(input.id())
            .ok_or(GradCheckError::UnknownInput { input_index: i })?;
        if !record.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
    }

    let saved: Vec<(f64, f64)> = inputs.iter().map(|v| (v.value(), v.grad())).collect();
    let mark = graph.checkpoint();

    for input in inputs {
        input.set_grad(0.0);
    }
    let output = func(inputs);
    // Other leaves and surviving interior nodes reached by the pass get their grads back too.
    let touched: Vec<(NodeId, f64)> = graph
        .trace(output.id())
        .into_iter()
        .map(|record| (record.id, record.grad))
        .collect();
    output.backward();
    let analytical: Vec<f64> = inputs.iter().map(|v| v.grad()).collect();
    for (id, grad) in touched {
        graph.set_gradient(id, grad);
    }
    graph.rewind(mark);

    let mut outcome = Ok(());
    for (i, input) in inputs.iter().enumerate() {
        let original = saved[i].0;

        input.set_value(original + epsilon);
        let loss_plus = func(inputs).value();
        graph.rewind(mark);

        input.set_value(original - epsilon);
        let loss_minus = func(inputs).value();
        graph.rewind(mark);

        input.set_value(original);

        if let Err(e) = compare(i, analytical[i], loss_plus, loss_minus, epsilon, tolerance) {
            outcome = Err(e);
            break;
        }
    }

    for (input, &(value, grad)) in inputs.iter().zip(&saved) {
        input.set_value(value);
        input.set_grad(grad);
    }
    outcome
}

fn compare(
    input_index: usize,
    analytical_grad: f64,
    loss_plus: f64,
    loss_minus: f64,
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError> {
    if !analytical_grad.is_finite() {
        return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
            input_index,
            value: analytical_grad,
        });
    }
    let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
    if !numerical_grad.is_finite() {
        return Err(GradCheckError::NumericalGradNaNOrInfinite {
            input_index,
            loss_plus,
            loss_minus,
        });
    }
    if approx::relative_eq!(
        analytical_grad,
        numerical_grad,
        epsilon = tolerance,
        max_relative = tolerance
    ) {
        Ok(())
    } else {
        let difference = (analytical_grad - numerical_grad).abs();
        log::warn!(
            "check_grad: input {} analytical {} vs numerical {} (diff {})",
            input_index,
            analytical_grad,
            numerical_grad,
            difference
        );
        Err(GradCheckError::GradientMismatch {
            input_index,
            analytical_grad,
            numerical_grad,
            difference,
        })
    }
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
