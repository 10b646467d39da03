use crate::autograd::Operation;
use crate::graph::Graph;
use approx::assert_relative_eq;

#[test]
fn test_additive_identity() {
    let graph = Graph::with_seed(40);
    let a = graph.leaf(1.25);
    let b = graph.leaf(-3.5);
    let c = a + b;
    assert_eq!(c.value(), 1.25 + -3.5);
    assert_eq!(c.op(), Operation::Add);
    assert_eq!(c.parents(), vec![a.id(), b.id()]);
}

#[test]
fn test_forward_values() {
    let graph = Graph::with_seed(41);
    let a = graph.leaf(3.0);
    let b = graph.leaf(2.0);
    assert_eq!((a - b).value(), 1.0);
    assert_eq!((a * b).value(), 6.0);
    assert_eq!(a.pow(2.0).value(), 9.0);
    assert_relative_eq!(a.tanh().value(), 3.0f64.tanh());
    assert_relative_eq!((a / b).value(), 1.5);
    assert_eq!((-a).value(), -3.0);
}

#[test]
fn test_operands_are_not_mutated() {
    let graph = Graph::with_seed(42);
    let a = graph.leaf(3.0);
    let b = graph.leaf(2.0);
    let _ = a * b + a.tanh();
    assert_eq!(a.value(), 3.0);
    assert_eq!(b.value(), 2.0);
    assert_eq!(a.op(), Operation::None);
}

#[test]
fn test_unary_ops_have_one_parent() {
    let graph = Graph::with_seed(43);
    let a = graph.leaf(0.5);
    let p = a.pow(3.0);
    let t = a.tanh();
    assert_eq!(p.op(), Operation::Pow);
    assert_eq!(p.parents(), vec![a.id()]);
    assert_eq!(graph.get(p.id()).unwrap().exponent, Some(3.0));
    assert_eq!(t.op(), Operation::Tanh);
    assert_eq!(t.parents(), vec![a.id()]);
}

#[test]
fn test_scalar_operands_become_leaves() {
    let graph = Graph::with_seed(44);
    let a = graph.leaf(2.0);
    let b = a + 1.0;
    let c = 10.0 - a;
    let d = 3.0 * a;
    assert_eq!(b.value(), 3.0);
    assert_eq!(c.value(), 8.0);
    assert_eq!(d.value(), 6.0);

    let constant = graph.get(b.parents()[1]).unwrap();
    assert_eq!(constant.op, Operation::None);
    assert_eq!(constant.value, 1.0);
}

#[test]
fn test_division_gradients() {
    let graph = Graph::with_seed(45);
    let a = graph.leaf(3.0);
    let b = graph.leaf(2.0);
    let c = a / b;
    c.backward();
    assert_relative_eq!(a.grad(), 0.5, epsilon = 1e-12);
    assert_relative_eq!(b.grad(), -3.0 / 4.0, epsilon = 1e-12);
}

#[test]
fn test_fractional_power_of_negative_is_nan() {
    let graph = Graph::with_seed(46);
    let a = graph.leaf(-4.0);
    assert!(a.pow(0.5).value().is_nan());
}

#[test]
fn test_sum_helper() {
    let graph = Graph::with_seed(47);
    let xs = graph.leaves(&[1.0, 2.0, 3.5]);
    let total = graph.sum(xs.iter().copied());
    assert_eq!(total.value(), 6.5);
    total.backward();
    for x in &xs {
        assert_eq!(x.grad(), 1.0);
    }
    assert_eq!(graph.sum(Vec::new()).value(), 0.0);
}

#[test]
fn test_operand_from_other_graph_gets_no_gradient() {
    let g1 = Graph::with_seed(48);
    let g2 = Graph::with_seed(49);
    let a = g1.leaf(2.0);
    let b = g2.leaf(5.0);
    let c = a * b;
    assert_eq!(c.value(), 10.0);
    assert!(g1.contains(c.id()));
    assert!(!g2.contains(c.id()));

    c.backward();
    assert_eq!(a.grad(), 0.0);
    assert_eq!(b.grad(), 0.0);

    let d = a + b;
    d.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 0.0);
}
