use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// A single rat. Sex is fixed at birth; weight only changes through
/// mutation and the litter count only grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    sex: Sex,
    weight: u64,
    litters: u32,
}

impl Individual {
    pub fn new(sex: Sex, weight: u64) -> Self {
        Self {
            sex,
            weight,
            litters: 0,
        }
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    /// Weight in grams.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    pub fn litters(&self) -> u32 {
        self.litters
    }

    /// True while the individual has produced fewer than `max_litters` litters.
    pub fn can_breed(&self, max_litters: u32) -> bool {
        self.litters < max_litters
    }

    pub(crate) fn set_weight(&mut self, weight: u64) {
        self.weight = weight;
    }

    pub(crate) fn record_litter(&mut self) {
        self.litters += 1;
    }
}

/// Individuals partitioned by sex. Order inside a partition carries no
/// meaning outside of selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Population {
    males: Vec<Individual>,
    females: Vec<Individual>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an individual to the partition matching its sex.
    pub fn push(&mut self, individual: Individual) {
        self.partition_mut(individual.sex()).push(individual);
    }

    pub fn partition(&self, sex: Sex) -> &[Individual] {
        match sex {
            Sex::Male => &self.males,
            Sex::Female => &self.females,
        }
    }

    pub(crate) fn partition_mut(&mut self, sex: Sex) -> &mut Vec<Individual> {
        match sex {
            Sex::Male => &mut self.males,
            Sex::Female => &mut self.females,
        }
    }

    pub(crate) fn take_partition(&mut self, sex: Sex) -> Vec<Individual> {
        std::mem::take(self.partition_mut(sex))
    }

    pub fn males(&self) -> &[Individual] {
        &self.males
    }

    pub fn females(&self) -> &[Individual] {
        &self.females
    }

    pub fn count(&self, sex: Sex) -> usize {
        self.partition(sex).len()
    }

    pub fn len(&self) -> usize {
        self.males.len() + self.females.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.males.iter().chain(self.females.iter())
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Individual> {
        self.males.iter_mut().chain(self.females.iter_mut())
    }

    /// Move every individual of `other` into the matching partitions.
    pub fn append(&mut self, mut other: Population) {
        self.males.append(&mut other.males);
        self.females.append(&mut other.females);
    }

    pub fn total_weight(&self) -> u64 {
        self.iter().map(Individual::weight).sum()
    }

    pub fn heaviest(&self) -> Option<u64> {
        self.iter().map(Individual::weight).max()
    }
}

impl Extend<Individual> for Population {
    fn extend<I: IntoIterator<Item = Individual>>(&mut self, iter: I) {
        for individual in iter {
            self.push(individual);
        }
    }
}

impl FromIterator<Individual> for Population {
    fn from_iter<I: IntoIterator<Item = Individual>>(iter: I) -> Self {
        let mut population = Population::new();
        population.extend(iter);
        population
    }
}
