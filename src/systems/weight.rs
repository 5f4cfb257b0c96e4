use rand::Rng;
use rand_distr::{Distribution, Triangular};
use tracing::instrument;

use crate::{error::SimError, population::Sex};

/// Pup weight inheritance: a triangular draw between the two parents'
/// weights, peaking at the heavier parent for males and the lighter for
/// females.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightModel;

impl WeightModel {
    pub fn new() -> Self {
        Self
    }

    #[instrument(level = "trace", skip(self, rng))]
    pub fn sample<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        sex: Sex,
        parent_a: u64,
        parent_b: u64,
    ) -> Result<u64, SimError> {
        let low = parent_a.min(parent_b);
        let high = parent_a.max(parent_b);
        if low == high {
            return Ok(low);
        }

        let mode = match sex {
            Sex::Male => high,
            Sex::Female => low,
        };
        let triangular = Triangular::new(low as f64, high as f64, mode as f64)
            .map_err(|_| SimError::InvalidWeightRange { low, high })?;
        let weight = triangular.sample(rng).floor() as u64;
        // f64 rounding on very large weights can land a gram outside the range
        Ok(weight.clamp(low, high))
    }
}
