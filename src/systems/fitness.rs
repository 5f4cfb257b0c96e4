use serde::Serialize;
use tracing::instrument;

use crate::{config::Config, population::Population};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fitness {
    pub mean_weight: u64,
    pub converged: bool,
}

/// Mean cohort weight against the goal. The divisor is the nominal
/// population size, so a cohort that came up short is averaged as if the
/// missing slots weighed nothing.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    goal_weight: u64,
    population_size: u64,
}

impl FitnessEvaluator {
    pub fn new(goal_weight: u64, population_size: usize) -> Self {
        Self {
            goal_weight,
            population_size: population_size.max(1) as u64,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.goal_weight, config.population_size)
    }

    pub fn goal_weight(&self) -> u64 {
        self.goal_weight
    }

    #[instrument(level = "debug", skip(self, population), fields(goal = self.goal_weight))]
    pub fn evaluate(&self, population: &Population) -> Fitness {
        let mean_weight = population.total_weight() / self.population_size;
        Fitness {
            mean_weight,
            converged: mean_weight >= self.goal_weight,
        }
    }
}
