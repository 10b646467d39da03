//! Reverse-mode differentiation over the registry.

pub mod backward_op;
pub mod engine;
pub mod grad_check;
pub mod graph;
pub mod operation;

pub use engine::BackwardPhase;
pub use grad_check::{check_grad, GradCheckError};
pub use operation::Operation;
