use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_uniform_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(0);
    let values = Init::default().sample(500, &mut rng).unwrap();
    assert_eq!(values.len(), 500);
    assert!(values.iter().all(|v| (-1.0..=1.0).contains(v)));
}

#[test]
fn test_uniform_is_deterministic_per_seed() {
    let a = Init::default().sample(8, &mut StdRng::seed_from_u64(3)).unwrap();
    let b = Init::default().sample(8, &mut StdRng::seed_from_u64(3)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_inverted_uniform_range_is_rejected() {
    let init = Init::Uniform {
        low: 1.0,
        high: -1.0,
    };
    let result = init.sample(1, &mut StdRng::seed_from_u64(0));
    assert!(matches!(result, Err(NeuroGradError::InvalidConfig(_))));
}

#[test]
fn test_normal_init() {
    let mut rng = StdRng::seed_from_u64(1);
    let values = Init::Normal { std: 0.5 }.sample(2000, &mut rng).unwrap();
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    assert!(mean.abs() < 0.05, "mean too far from zero: {mean}");

    let bad = Init::Normal { std: -1.0 }.sample(1, &mut rng);
    assert!(matches!(bad, Err(NeuroGradError::InvalidConfig(_))));
}

#[test]
fn test_constant_init() {
    let values = Init::Constant(0.25)
        .sample(3, &mut StdRng::seed_from_u64(0))
        .unwrap();
    assert_eq!(values, vec![0.25; 3]);
}

#[test]
fn test_normal_init_rejects_bad_std() {
    let mut rng = StdRng::seed_from_u64(2);
    for std in [-0.5, f64::NAN, f64::INFINITY] {
        let result = Init::Normal { std }.sample(4, &mut rng);
        assert!(matches!(result, Err(NeuroGradError::InvalidConfig(_))), "std {std} accepted");
    }
    assert_eq!(Init::Normal { std: 0.0 }.sample(2, &mut rng), Ok(vec![0.0, 0.0]));
}
