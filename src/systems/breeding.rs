use rand::{seq::SliceRandom, Rng};
use tracing::{debug, instrument};

use crate::{
    config::Config,
    error::SimError,
    population::{Individual, Population, Sex},
    rng::RngExt,
};

use super::WeightModel;

/// Random (non-assortative) pairing of a full cohort, one litter per pair.
#[derive(Debug, Clone)]
pub struct BreedingEngine {
    pairs: usize,
    litter_size: usize,
    model: WeightModel,
}

impl BreedingEngine {
    pub fn new(pairs: usize, litter_size: usize) -> Self {
        Self {
            pairs,
            litter_size,
            model: WeightModel::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.cohort_size(), config.litter_size)
    }

    /// Breeds `cohort` and returns the combined litter of every pair.
    ///
    /// Both partitions are shuffled in place and each parent's litter count
    /// goes up by one; weights are left alone. The cohort must hold exactly
    /// `pairs` individuals of each sex, otherwise nothing is touched and an
    /// error is returned.
    #[instrument(level = "debug", skip(self, rng, cohort), fields(pairs = self.pairs))]
    pub fn breed<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        cohort: &mut Population,
    ) -> Result<Population, SimError> {
        for sex in Sex::ALL {
            let available = cohort.count(sex);
            if available < self.pairs {
                return Err(SimError::StarvedCohort {
                    sex,
                    required: self.pairs,
                    available,
                });
            }
            if available > self.pairs {
                return Err(SimError::OversizedCohort {
                    sex,
                    required: self.pairs,
                    available,
                });
            }
        }

        cohort.partition_mut(Sex::Male).shuffle(rng);
        cohort.partition_mut(Sex::Female).shuffle(rng);

        let mut litter = Population::new();
        for pair in 0..self.pairs {
            let sire = &mut cohort.partition_mut(Sex::Male)[pair];
            sire.record_litter();
            let sire_weight = sire.weight();

            let dam = &mut cohort.partition_mut(Sex::Female)[pair];
            dam.record_litter();
            let dam_weight = dam.weight();

            for _ in 0..self.litter_size {
                let sex = rng.choose_sex();
                let weight = self.model.sample(rng, sex, sire_weight, dam_weight)?;
                litter.push(Individual::new(sex, weight));
            }
        }

        debug!(
            pups = litter.len(),
            males = litter.count(Sex::Male),
            females = litter.count(Sex::Female),
            "litters born"
        );
        Ok(litter)
    }
}
