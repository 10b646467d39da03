// Trains a 3 -> [4, 4, 1] tanh network on four hand-picked samples.
// Run with: cargo run --example train_mlp

use neurograd_core::nn::{Module, Mlp, TrainConfig, Trainer};
use neurograd_core::{Graph, NeuroGradError};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), NeuroGradError> {
    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(1337);
    let mlp = Mlp::new(&graph, 3, &[4, 4, 1], &mut rng)?;
    println!("Model has {} parameters", mlp.num_parameters());

    let xs = vec![
        vec![2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let ys = vec![vec![1.0], vec![-1.0], vec![-1.0], vec![1.0]];

    let config = TrainConfig::default()
        .with_steps(100)
        .with_learning_rate(0.1)
        .with_log_every(10);
    let trainer = Trainer::new(config)?;
    let report = trainer.fit(&graph, &mlp, &xs, &ys)?;

    for (step, (loss, lr)) in report
        .losses
        .iter()
        .zip(&report.learning_rates)
        .enumerate()
        .step_by(10)
    {
        println!("step {:>3}  lr {:.4}  loss {:.6}", step, lr, loss);
    }
    if let Some(loss) = report.final_loss() {
        println!("final loss {:.6}", loss);
    }

    for (x, y) in xs.iter().zip(&ys) {
        let pred = mlp.predict(x)?;
        println!("{:?} -> {:+.4} (target {:+})", x, pred[0].value(), y[0]);
    }
    println!("graph holds {} nodes", graph.len());
    Ok(())
}
