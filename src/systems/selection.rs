use tracing::{instrument, warn};

use crate::{
    config::Config,
    population::{Individual, Population, Sex},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub cohort: Population,
    /// Heaviest weight seen so far in the run, retired breeders included.
    pub largest_weight: u64,
}

/// Truncation selection: the heaviest individuals still able to breed,
/// up to `cohort_size` per sex.
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    cohort_size: usize,
    max_litters: u32,
}

impl SelectionEngine {
    pub fn new(cohort_size: usize, max_litters: u32) -> Self {
        Self {
            cohort_size,
            max_litters,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.cohort_size(), config.max_litters)
    }

    /// Ranks each partition heaviest first. The sort is stable, so among
    /// equal weights the earlier entry wins; callers merge pups ahead of
    /// parents, which makes pups win ties.
    #[instrument(level = "debug", skip(self, population), fields(candidates = population.len()))]
    pub fn select(&self, mut population: Population, prior_largest: u64) -> Selection {
        let mut largest_weight = prior_largest;
        let mut cohort = Population::new();

        for sex in Sex::ALL {
            let mut ranked = population.take_partition(sex);
            ranked.sort_by(|a, b| b.weight().cmp(&a.weight()));

            if let Some(top) = ranked.first() {
                largest_weight = largest_weight.max(top.weight());
            }

            let before = cohort.count(sex);
            cohort.extend(
                ranked
                    .into_iter()
                    .filter(|r| r.can_breed(self.max_litters))
                    .take(self.cohort_size),
            );

            let kept = cohort.count(sex) - before;
            if kept < self.cohort_size {
                warn!(
                    %sex,
                    kept,
                    target = self.cohort_size,
                    "not enough breedable individuals to fill the cohort"
                );
            }
        }

        Selection {
            cohort,
            largest_weight,
        }
    }

    pub fn is_eligible(&self, individual: &Individual) -> bool {
        individual.can_breed(self.max_litters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(sex: Sex, weight: u64, litters: u32) -> Individual {
        let mut rat = Individual::new(sex, weight);
        for _ in 0..litters {
            rat.record_litter();
        }
        rat
    }

    #[test]
    fn keeps_heaviest_per_sex() {
        let engine = SelectionEngine::new(2, 5);
        let population: Population = [100, 500, 300, 400]
            .into_iter()
            .flat_map(|w| [rat(Sex::Male, w, 0), rat(Sex::Female, w / 2, 0)])
            .collect();

        let selection = engine.select(population, 0);
        let males: Vec<u64> = selection.cohort.males().iter().map(Individual::weight).collect();
        let females: Vec<u64> = selection.cohort.females().iter().map(Individual::weight).collect();

        assert_eq!(males, vec![500, 400]);
        assert_eq!(females, vec![250, 200]);
        assert_eq!(selection.largest_weight, 500);
    }

    #[test]
    fn exhausted_breeders_are_skipped() {
        let engine = SelectionEngine::new(2, 3);
        let population: Population = vec![
            rat(Sex::Female, 900, 3),
            rat(Sex::Female, 800, 2),
            rat(Sex::Female, 700, 0),
            rat(Sex::Female, 600, 1),
            rat(Sex::Male, 500, 0),
            rat(Sex::Male, 450, 0),
        ]
        .into_iter()
        .collect();

        let selection = engine.select(population, 0);
        let females: Vec<u64> = selection.cohort.females().iter().map(Individual::weight).collect();

        assert_eq!(females, vec![800, 700]);
        assert!(selection.cohort.iter().all(|r| engine.is_eligible(r)));
        // retired breeders still count towards the heaviest ever seen
        assert_eq!(selection.largest_weight, 900);
    }

    #[test]
    fn never_exceeds_cohort_size() {
        let engine = SelectionEngine::new(10, 5);
        let population: Population = (0..100)
            .map(|i| {
                let sex = if i % 2 == 0 { Sex::Male } else { Sex::Female };
                rat(sex, 200 + i, (i % 7) as u32)
            })
            .collect();

        let selection = engine.select(population, 0);
        assert_eq!(selection.cohort.count(Sex::Male), 10);
        assert_eq!(selection.cohort.count(Sex::Female), 10);
        assert!(selection.cohort.iter().all(|r| r.can_breed(5)));
    }

    #[test]
    fn shortfall_yields_smaller_cohort() {
        let engine = SelectionEngine::new(3, 2);
        let population: Population = vec![
            rat(Sex::Male, 500, 0),
            rat(Sex::Male, 480, 2),
            rat(Sex::Female, 410, 0),
            rat(Sex::Female, 400, 1),
            rat(Sex::Female, 390, 0),
        ]
        .into_iter()
        .collect();

        let selection = engine.select(population, 0);
        assert_eq!(selection.cohort.count(Sex::Male), 1);
        assert_eq!(selection.cohort.count(Sex::Female), 3);
    }

    #[test]
    fn largest_weight_never_decreases() {
        let engine = SelectionEngine::new(1, 5);
        let population: Population = vec![rat(Sex::Male, 300, 0), rat(Sex::Female, 250, 0)]
            .into_iter()
            .collect();

        assert_eq!(engine.select(population, 1_000).largest_weight, 1_000);
    }

    #[test]
    fn largest_weight_reads_top_of_each_partition() {
        let engine = SelectionEngine::new(1, 5);
        let population: Population = vec![
            rat(Sex::Female, 200, 0),
            rat(Sex::Female, 950, 0),
            rat(Sex::Male, 400, 0),
        ]
        .into_iter()
        .collect();

        assert_eq!(engine.select(population, 0).largest_weight, 950);
    }

    #[test]
    fn ties_prefer_earlier_entries() {
        let engine = SelectionEngine::new(1, 5);
        let population: Population = vec![rat(Sex::Male, 600, 0), rat(Sex::Male, 600, 4)]
            .into_iter()
            .collect();

        let selection = engine.select(population, 0);
        assert_eq!(selection.cohort.males()[0].litters(), 0);
    }

    #[test]
    fn empty_partition_is_tolerated() {
        let engine = SelectionEngine::new(2, 5);
        let population: Population = vec![rat(Sex::Male, 300, 0)].into_iter().collect();

        let selection = engine.select(population, 10);
        assert_eq!(selection.cohort.count(Sex::Female), 0);
        assert_eq!(selection.largest_weight, 300);
    }
}
