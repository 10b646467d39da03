// src/nn/layers/mod.rs

pub mod layer;
pub mod mlp;
pub mod neuron;

// Re-export key layer structs
pub use layer::Layer;
pub use mlp::Mlp;
pub use neuron::Neuron;
