use crate::node_id::NodeId;
use thiserror::Error;

/// Custom error type for the neurograd engine.
///
/// Registry lookups are lenient by default (unknown identifiers are treated as absent),
/// so most graph operations never produce an error. The variants below are surfaced by the
/// strict `try_*` accessors and at the network/training boundary.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum NeuroGradError {
    #[error("Unknown node {0}: not present in the graph (stale handle after clear or rewind?)")]
    UnknownNode(NodeId),

    #[error("Length mismatch during {context}: expected {expected}, got {actual}")]
    LengthMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
