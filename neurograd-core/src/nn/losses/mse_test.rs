use super::*;
use crate::graph::Graph;
use approx::assert_relative_eq;

#[test]
fn test_sum_reduction_value_and_grad() {
    let graph = Graph::with_seed(90);
    let preds = graph.leaves(&[1.0, 2.0, -0.5]);
    let loss = MSELoss::new(Reduction::Sum)
        .calculate(&preds, &[0.0, 3.0, 0.5])
        .unwrap();
    assert_relative_eq!(loss.value(), 1.0 + 1.0 + 1.0, epsilon = 1e-12);

    loss.backward();
    // d/dp (p - t)^2 = 2 (p - t)
    assert_relative_eq!(preds[0].grad(), 2.0, epsilon = 1e-12);
    assert_relative_eq!(preds[1].grad(), -2.0, epsilon = 1e-12);
    assert_relative_eq!(preds[2].grad(), -2.0, epsilon = 1e-12);
}

#[test]
fn test_mean_reduction() {
    let graph = Graph::with_seed(91);
    let preds = graph.leaves(&[1.0, 3.0]);
    let loss = MSELoss::new(Reduction::Mean)
        .calculate(&preds, &[0.0, 0.0])
        .unwrap();
    assert_relative_eq!(loss.value(), 5.0, epsilon = 1e-12);
    loss.backward();
    assert_relative_eq!(preds[1].grad(), 3.0, epsilon = 1e-12);
}

#[test]
fn test_length_mismatch() {
    let graph = Graph::with_seed(92);
    let preds = graph.leaves(&[1.0, 3.0]);
    let result = MSELoss::default().calculate(&preds, &[0.0]);
    assert_eq!(
        result,
        Err(NeuroGradError::LengthMismatch {
            expected: 2,
            actual: 1,
            context: "loss targets".to_string(),
        })
    );
}

#[test]
fn test_empty_predictions() {
    let result = MSELoss::default().calculate(&[], &[]);
    assert!(matches!(result, Err(NeuroGradError::InvalidConfig(_))));
}

#[test]
fn test_reduction_from_str() {
    assert_eq!("MEAN".parse::<Reduction>(), Ok(Reduction::Mean));
    assert_eq!("sum".parse::<Reduction>(), Ok(Reduction::Sum));
    assert!("median".parse::<Reduction>().is_err());
}
