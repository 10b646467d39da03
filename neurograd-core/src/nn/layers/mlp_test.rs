use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn network(graph: &Graph) -> Mlp<'_> {
    let mut rng = StdRng::seed_from_u64(42);
    Mlp::new(graph, 3, &[4, 4, 1], &mut rng).unwrap()
}

#[test]
fn test_mlp_shape() {
    let graph = Graph::with_seed(80);
    let mlp = network(&graph);
    assert_eq!(mlp.layers().len(), 3);
    assert_eq!(mlp.hidden_layers().len(), 2);
    assert_eq!(mlp.output_layer().nout(), 1);
    // (3+1)*4 + (4+1)*4 + (4+1)*1
    assert_eq!(mlp.num_parameters(), 41);
    assert_eq!(graph.len(), 41);
}

#[test]
fn test_named_parameters_match_node_names() {
    let graph = Graph::with_seed(81);
    let mlp = network(&graph);
    let named = mlp.named_parameters();
    assert_eq!(named[0].0, "layers.0.neurons.0.w0");
    assert_eq!(named.last().unwrap().0, "layers.2.neurons.0.b");
    for (name, p) in named {
        assert_eq!(p.name(), name);
    }
}

#[test]
fn test_output_is_connected_to_every_layer() {
    let graph = Graph::with_seed(82);
    let mlp = network(&graph);
    let inputs = graph.leaves(&[2.0, 3.0, -1.0]);
    let out = mlp.forward(&inputs).unwrap();
    assert_eq!(out.len(), 1);
    assert!(!out[0].is_leaf());

    let ancestry: HashSet<_> = out[0].ancestry().into_iter().collect();
    for p in mlp.parameters() {
        assert!(ancestry.contains(&p), "parameter {} is disconnected", p.name());
    }
    for x in &inputs {
        assert!(ancestry.contains(x));
    }
}

#[test]
fn test_backward_reaches_first_layer() {
    let graph = Graph::with_seed(83);
    let mlp = network(&graph);
    let out = mlp.predict(&[2.0, 3.0, -1.0]).unwrap();
    out[0].backward();
    let first_layer_grads: Vec<f64> = mlp.layers()[0].parameters().iter().map(|p| p.grad()).collect();
    assert!(first_layer_grads.iter().any(|g| *g != 0.0));
}

#[test]
fn test_mlp_gradients_match_finite_differences() {
    let graph = Graph::with_seed(84);
    let mut rng = StdRng::seed_from_u64(7);
    let mlp = Mlp::new(&graph, 2, &[3, 1], &mut rng).unwrap();
    let inputs = graph.leaves(&[0.4, -0.8]);
    let params = mlp.parameters();
    let result = crate::autograd::check_grad(
        |_| mlp.forward(&inputs).unwrap()[0],
        &params,
        1e-6,
        1e-5,
    );
    assert_eq!(result, Ok(()));
}

#[test]
fn test_invalid_shapes() {
    let graph = Graph::with_seed(85);
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        Mlp::new(&graph, 2, &[], &mut rng),
        Err(NeuroGradError::InvalidConfig(_))
    ));
    let mlp = Mlp::new(&graph, 2, &[2, 1], &mut rng).unwrap();
    assert!(matches!(
        mlp.predict(&[1.0]),
        Err(NeuroGradError::LengthMismatch { expected: 2, actual: 1, .. })
    ));
}
