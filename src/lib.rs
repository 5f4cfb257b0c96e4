pub mod config;
pub mod engine;
pub mod error;
pub mod population;
pub mod report;
pub mod rng;
pub mod systems;

pub use config::Config;
pub use engine::{Engine, GenerationReport, RunState, RunSummary};
pub use error::SimError;
pub use population::{Individual, Population, Sex};
