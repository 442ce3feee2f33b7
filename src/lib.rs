pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::ScenarioConfig;
pub use core::{duck::Duck, simulator::Simulator};
pub use domain::model::{DuckKind, FlyKind, QuackKind, RunSummary, Scenario, Step};
pub use domain::ports::{FlyBehavior, QuackBehavior};
pub use utils::error::{DuckError, Result};
