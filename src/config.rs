//! Run configuration for a breeding programme

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Every constant a run depends on. Built once and handed to the engine;
/// nothing reads these values from ambient state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mean cohort weight (grams) that ends the programme.
    pub goal_weight: u64,
    /// Adults kept per generation, split evenly between the sexes.
    pub population_size: usize,
    pub initial_min_weight: u64,
    pub initial_max_weight: u64,
    pub mutation_probability: f64,
    pub mutation_scale_min: f64,
    pub mutation_scale_max: f64,
    /// Pups per mating pair.
    pub litter_size: usize,
    /// An individual that has produced this many litters is retired.
    pub max_litters: u32,
    pub generations_per_year: u32,
    pub generation_limit: u32,
    /// Fixed seed for the random stream; entropy-seeded when absent.
    pub seed: Option<u64>,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("config validation error: {0}")]
    Validation(String),
}

impl Default for Config {
    fn default() -> Self {
        Self::reference()
    }
}

impl Config {
    /// The lab's reference programme: 20 adults, 8 pups per litter, 500
    /// generation cutoff, 50kg target.
    pub fn reference() -> Self {
        Self {
            goal_weight: 50_000,
            population_size: 20,
            initial_min_weight: 200,
            initial_max_weight: 600,
            mutation_probability: 0.01,
            mutation_scale_min: 0.5,
            mutation_scale_max: 1.2,
            litter_size: 8,
            max_litters: 5,
            generations_per_year: 10,
            generation_limit: 500,
            seed: None,
            logging: LoggingConfig::default(),
        }
    }

    /// Load and validate a configuration from a YAML file.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file.
    pub fn to_yaml<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Breeding cohort size for each sex.
    pub fn cohort_size(&self) -> usize {
        self.population_size / 2
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 || self.population_size % 2 != 0 {
            return Err(ConfigError::Validation(format!(
                "population size must be a positive even number, got {}",
                self.population_size
            )));
        }

        if self.initial_min_weight > self.initial_max_weight {
            return Err(ConfigError::Validation(format!(
                "initial weight range is inverted ({} > {})",
                self.initial_min_weight, self.initial_max_weight
            )));
        }

        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(ConfigError::Validation(format!(
                "mutation probability must be between 0.0 and 1.0, got {}",
                self.mutation_probability
            )));
        }

        if !self.mutation_scale_min.is_finite()
            || !self.mutation_scale_max.is_finite()
            || self.mutation_scale_min < 0.0
            || self.mutation_scale_min > self.mutation_scale_max
        {
            return Err(ConfigError::Validation(format!(
                "mutation scale must satisfy 0 <= min <= max, got {}..{}",
                self.mutation_scale_min, self.mutation_scale_max
            )));
        }

        if self.litter_size == 0 {
            return Err(ConfigError::Validation(
                "litter size must be greater than zero".into(),
            ));
        }

        if self.generations_per_year == 0 {
            return Err(ConfigError::Validation(
                "generations per year must be greater than zero".into(),
            ));
        }

        if self.max_litters == 0 {
            return Err(ConfigError::Validation(
                "max litters must be greater than zero".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_config() {
        let config = Config::reference();

        assert_eq!(config.goal_weight, 50_000);
        assert_eq!(config.population_size, 20);
        assert_eq!(config.cohort_size(), 10);
        assert_eq!(config.litter_size, 8);
        assert_eq!(config.generation_limit, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::reference();
        config.seed = Some(99);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("programme.yaml");
        config.to_yaml(&path).unwrap();

        let loaded = Config::from_yaml(&path).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_missing_fields_use_reference_values() {
        let config = Config::from_yaml_str("goal_weight: 1200\nseed: 3\n").unwrap();

        assert_eq!(config.goal_weight, 1200);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.population_size, 20);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_rejects_odd_population() {
        let config = Config {
            population_size: 21,
            ..Config::reference()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_inverted_ranges() {
        let weights = Config {
            initial_min_weight: 700,
            ..Config::reference()
        };
        assert!(weights.validate().is_err());

        let scale = Config {
            mutation_scale_min: 1.5,
            ..Config::reference()
        };
        assert!(scale.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_probability() {
        let config = Config {
            mutation_probability: 1.5,
            ..Config::reference()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_litter_cap() {
        let config = Config {
            max_litters: 0,
            ..Config::reference()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_error_surfaces() {
        let err = Config::from_yaml_str("goal_weight: [not, a, number]").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
