use crate::autograd::Operation;
use crate::graph::Graph;
use crate::node_id::NodeId;
use approx::assert_relative_eq;

#[test]
fn test_root_is_seeded_with_one() {
    let graph = Graph::with_seed(10);
    let a = graph.leaf(3.0);
    let b = a.tanh();
    b.backward();
    assert_eq!(b.grad(), 1.0);
}

#[test]
fn test_backward_on_leaf_root() {
    let graph = Graph::with_seed(11);
    let a = graph.leaf(3.0);
    a.backward();
    assert_eq!(a.grad(), 1.0);
    a.backward();
    assert_eq!(a.grad(), 1.0);
}

#[test]
fn test_each_rule() {
    let graph = Graph::with_seed(12);
    let a = graph.leaf(1.5);
    let b = graph.leaf(-2.0);

    let sub = a - b;
    sub.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), -1.0);

    a.set_grad(0.0);
    let pow = a.pow(3.0);
    pow.backward();
    assert_relative_eq!(a.grad(), 3.0 * 1.5 * 1.5, epsilon = 1e-12);

    a.set_grad(0.0);
    let t = a.tanh();
    t.backward();
    let expected = 1.0 - 1.5f64.tanh().powi(2);
    assert_relative_eq!(a.grad(), expected, epsilon = 1e-12);
}

#[test]
fn test_shared_subexpression_accumulates() {
    let graph = Graph::with_seed(13);
    let x = graph.leaf(3.0);
    // y = x*x + x  => dy/dx = 2x + 1
    let y = x * x + x;
    y.backward();
    assert_relative_eq!(x.grad(), 7.0, epsilon = 1e-12);
}

#[test]
fn test_interior_gradients_are_transient() {
    let graph = Graph::with_seed(14);
    let a = graph.leaf(2.0);
    let b = graph.leaf(3.0);
    let s = a + b;
    let out = s * graph.leaf(4.0);
    out.backward();
    assert_eq!(s.grad(), 4.0);
    out.backward();
    // The interior node is recomputed, not accumulated.
    assert_eq!(s.grad(), 4.0);
    assert_eq!(a.grad(), 8.0);
}

#[test]
fn test_zero_grad_clears_reachable_only() {
    let graph = Graph::with_seed(15);
    let a = graph.leaf(2.0);
    let b = graph.leaf(5.0);
    let other = graph.leaf(1.0);
    other.set_grad(7.0);
    let c = a * b;
    c.backward();
    c.zero_grad();
    assert_eq!(a.grad(), 0.0);
    assert_eq!(b.grad(), 0.0);
    assert_eq!(c.grad(), 0.0);
    assert_eq!(other.grad(), 7.0);
}

#[test]
fn test_backward_from_unknown_root_is_noop() {
    let graph = Graph::with_seed(16);
    let a = graph.leaf(1.0);
    graph.backward(NodeId::from_raw(0xdead));
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn test_backward_skips_dangling_parent() {
    let graph = Graph::with_seed(17);
    let a = graph.leaf(2.0);
    let ghost = NodeId::from_raw(0xbeef);
    let child = NodeId::from_raw(0xcafe);
    assert!(graph.register(child, 2.0, Operation::Add, Some(a.id()), Some(ghost), None));
    graph.backward(child);
    assert_eq!(a.grad(), 1.0);
}
