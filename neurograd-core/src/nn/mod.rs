// src/nn/mod.rs
// Network building blocks composed purely from `Value` operators.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod trainer;

// Re-export common items
pub use init::Init;
pub use layers::{Layer, Mlp, Neuron};
pub use losses::{MSELoss, Reduction};
pub use module::Module;
pub use trainer::{TrainConfig, TrainReport, Trainer};
