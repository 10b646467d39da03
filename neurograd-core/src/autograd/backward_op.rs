use super::Operation;
use crate::node_id::NodeId;
use crate::registry::{NodeRecord, Registry};

/// A gradient contribution owed to one parent.
pub type Contribution = (NodeId, f64);

/// Local differentiation rule for one node.
///
/// Given the node's accumulated gradient `g`, returns what each parent should receive:
///
/// | op   | parent1                | parent2         |
/// |------|------------------------|-----------------|
/// | Add  | `g`                    | `g`             |
/// | Sub  | `g`                    | `-g`            |
/// | Mul  | `p2.value * g`         | `p1.value * g`  |
/// | Pow  | `n * p1.value^(n-1) * g` |               |
/// | Tanh | `(1 - value^2) * g`    |                 |
///
/// Leaves yield nothing, and so does a `Pow` node without an exponent. A contribution is
/// dropped when its target parent is missing from the registry, and a `Mul` contribution is
/// also dropped when the value it needs belongs to a missing parent.
pub fn local_gradients(registry: &Registry, node: &NodeRecord) -> [Option<Contribution>; 2] {
    let g = node.grad;
    let p1 = node.parent1.and_then(|id| registry.get(id));
    let p2 = node.parent2.and_then(|id| registry.get(id));

    match node.op {
        Operation::None => [None, None],
        Operation::Add => [p1.map(|p| (p.id, g)), p2.map(|p| (p.id, g))],
        Operation::Sub => [p1.map(|p| (p.id, g)), p2.map(|p| (p.id, -g))],
        Operation::Mul => match (p1, p2) {
            (Some(a), Some(b)) => [Some((a.id, b.value * g)), Some((b.id, a.value * g))],
            _ => [None, None],
        },
        Operation::Pow => match node.exponent {
            Some(n) => [p1.map(|p| (p.id, n * p.value.powf(n - 1.0) * g)), None],
            None => [None, None],
        },
        Operation::Tanh => [p1.map(|p| (p.id, (1.0 - node.value * node.value) * g)), None],
    }
}
