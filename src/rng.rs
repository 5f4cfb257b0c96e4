//! Random stream ownership
//!
//! A run draws every sample (weights, mutations, pup sexes, shuffles) from
//! one explicitly owned generator. Tests build their own seeded stream.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::Config;
use crate::population::Sex;

pub type SimRng = ChaCha8Rng;

pub fn seeded(seed: u64) -> SimRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Seeded from `config.seed` when set, otherwise from OS entropy.
pub fn from_config(config: &Config) -> SimRng {
    match config.seed {
        Some(seed) => seeded(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Helper draws shared by the breeding stages.
pub trait RngExt {
    fn chance(&mut self, probability: f64) -> bool;
    fn choose_sex(&mut self) -> Sex;
}

impl<R: Rng + ?Sized> RngExt for R {
    fn chance(&mut self, probability: f64) -> bool {
        if probability <= 0.0 {
            false
        } else if probability >= 1.0 {
            true
        } else {
            self.gen_bool(probability)
        }
    }

    fn choose_sex(&mut self) -> Sex {
        if self.gen_bool(0.5) {
            Sex::Male
        } else {
            Sex::Female
        }
    }
}
