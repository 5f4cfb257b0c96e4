use crate::config::ConfigError;
use crate::population::Sex;

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("breeding needs {required} {sex}s but the cohort only has {available}")]
    StarvedCohort {
        sex: Sex,
        required: usize,
        available: usize,
    },
    #[error("breeding pairs exactly {required} {sex}s but the cohort has {available}")]
    OversizedCohort {
        sex: Sex,
        required: usize,
        available: usize,
    },
    #[error("cannot build a weight distribution over {low}..={high}")]
    InvalidWeightRange { low: u64, high: u64 },
    #[error(transparent)]
    Config(#[from] ConfigError),
}
