use rand::Rng;
use tracing::{debug, instrument};

use crate::{config::Config, population::Population, rng::RngExt};

/// Rescales a pup's weight by a uniform factor with small probability.
/// The only trait that mutates anywhere in the run.
#[derive(Debug, Clone)]
pub struct MutationEngine {
    probability: f64,
    scale_min: f64,
    scale_max: f64,
}

impl MutationEngine {
    pub fn new(probability: f64, scale_min: f64, scale_max: f64) -> Self {
        Self {
            probability,
            scale_min,
            scale_max,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.mutation_probability,
            config.mutation_scale_min,
            config.mutation_scale_max,
        )
    }

    /// Mutates `litter` in place and returns how many individuals changed.
    #[instrument(level = "debug", skip(self, rng, litter), fields(litter_size = litter.len()))]
    pub fn mutate<R: Rng + ?Sized>(&self, rng: &mut R, litter: &mut Population) -> usize {
        let mut mutated = 0;
        for pup in litter.iter_mut() {
            if !rng.chance(self.probability) {
                continue;
            }
            let scale = rng.gen_range(self.scale_min..=self.scale_max);
            let weight = (pup.weight() as f64 * scale).ceil() as u64;
            pup.set_weight(weight);
            mutated += 1;
        }
        debug!(mutated, "mutation pass complete");
        mutated
    }
}
