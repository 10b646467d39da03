use neurograd_core::nn::Mlp;
use neurograd_core::Graph;
use rand::rngs::StdRng;
use rand::SeedableRng;

// Helpers shared by the integration tests.
// allow(dead_code) because each test binary uses a different subset.

#[allow(dead_code)]
pub fn seeded_mlp<'g>(graph: &'g Graph, nin: usize, sizes: &[usize], seed: u64) -> Mlp<'g> {
    let mut rng = StdRng::seed_from_u64(seed);
    Mlp::new(graph, nin, sizes, &mut rng).expect("test MLP creation failed")
}

/// The four-sample binary classification set used throughout the docs.
#[allow(dead_code)]
pub fn tiny_dataset() -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let xs = vec![
        vec![2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let ys = vec![vec![1.0], vec![-1.0], vec![-1.0], vec![1.0]];
    (xs, ys)
}
