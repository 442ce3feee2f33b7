pub mod behaviors;
pub mod duck;
pub mod simulator;

pub use crate::domain::model::{DuckKind, FlyKind, QuackKind, RunSummary, Scenario, Step};
pub use crate::domain::ports::{FlyBehavior, QuackBehavior};
pub use crate::utils::error::Result;
