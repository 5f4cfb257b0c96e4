use rand::Rng;
use tracing::{debug, instrument};

use crate::{
    config::Config,
    error::SimError,
    population::{Individual, Population, Sex},
};

use super::WeightModel;

/// Builds generation zero by breeding every founder from two synthetic
/// reference parents at the configured weight extremes.
#[derive(Debug, Clone)]
pub struct PopulationInitializer {
    size: usize,
    min_weight: u64,
    max_weight: u64,
    model: WeightModel,
}

impl PopulationInitializer {
    pub fn new(size: usize, min_weight: u64, max_weight: u64) -> Self {
        Self {
            size,
            min_weight,
            max_weight,
            model: WeightModel::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.population_size,
            config.initial_min_weight,
            config.initial_max_weight,
        )
    }

    /// First half male, second half female. The reference parents never
    /// join the population.
    #[instrument(level = "debug", skip(self, rng), fields(size = self.size))]
    pub fn create<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Population, SimError> {
        let lightest = Individual::new(Sex::Female, self.min_weight);
        let heaviest = Individual::new(Sex::Male, self.max_weight);
        let half = self.size / 2;

        let mut founders = Population::new();
        for index in 0..self.size {
            let sex = if index < half { Sex::Male } else { Sex::Female };
            let weight = self
                .model
                .sample(rng, sex, lightest.weight(), heaviest.weight())?;
            founders.push(Individual::new(sex, weight));
        }

        debug!(
            males = founders.count(Sex::Male),
            females = founders.count(Sex::Female),
            "founder population created"
        );
        Ok(founders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;

    #[test]
    fn reference_founders_split_evenly() {
        let init = PopulationInitializer::from_config(&Config::reference());
        let founders = init.create(&mut seeded(1)).unwrap();

        assert_eq!(founders.count(Sex::Male), 10);
        assert_eq!(founders.count(Sex::Female), 10);
        assert!(founders
            .iter()
            .all(|r| (200..=600).contains(&r.weight()) && r.litters() == 0));
    }

    #[test]
    fn reference_parents_are_not_inserted() {
        let init = PopulationInitializer::new(4, 500, 500);
        let founders = init.create(&mut seeded(2)).unwrap();

        assert_eq!(founders.len(), 4);
        assert!(founders.iter().all(|r| r.weight() == 500));
    }

    #[test]
    fn founders_are_reproducible() {
        let init = PopulationInitializer::new(20, 200, 600);
        let a = init.create(&mut seeded(77)).unwrap();
        let b = init.create(&mut seeded(77)).unwrap();
        assert_eq!(a, b);
    }
}
