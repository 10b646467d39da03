// Optimizers and learning-rate schedules over graph parameters.

pub mod lr_scheduler;
pub mod optimizer_trait;
pub mod sgd;

pub use lr_scheduler::{LinearLR, LrScheduler};
pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;
