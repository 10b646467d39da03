//! Scalar reverse-mode automatic differentiation.
//!
//! Arithmetic on [`Value`] handles records each operation as a node of a caller-owned
//! [`Graph`]; [`Value::backward`] then fills in the gradient of that node with respect to
//! every ancestor. The [`nn`] module builds a small feed-forward network and training loop
//! purely out of these operators.
//!
//! ```
//! use neurograd_core::Graph;
//!
//! let graph = Graph::new();
//! let a = graph.leaf(2.0);
//! let b = graph.leaf(3.0);
//! let c = a * b + a;
//! c.backward();
//! assert_eq!(a.grad(), 4.0);
//! assert_eq!(b.grad(), 2.0);
//! ```

pub mod autograd;
pub mod error;
pub mod graph;
pub mod nn;
pub mod node_id;
pub mod optim;
pub mod registry;
pub mod value;

pub use autograd::Operation;
pub use error::NeuroGradError;
pub use graph::{Checkpoint, Graph};
pub use node_id::NodeId;
pub use registry::NodeRecord;
pub use value::Value;
