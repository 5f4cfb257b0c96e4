mod breeding;
mod fitness;
mod founders;
mod mutation;
mod selection;
mod weight;

pub use breeding::BreedingEngine;
pub use fitness::{Fitness, FitnessEvaluator};
pub use founders::PopulationInitializer;
pub use mutation::MutationEngine;
pub use selection::{Selection, SelectionEngine};
pub use weight::WeightModel;
