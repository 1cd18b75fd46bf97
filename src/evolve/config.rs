//! Generation driver configuration.
//!
//! [`EvolveConfig`] holds the parameters [`EvolveRunner`](super::EvolveRunner)
//! passes to every [`evolve`](super::evolve) call, plus the caller's
//! stopping criteria.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for repeated evolution.
///
/// # Defaults
///
/// ```
/// use genetix::evolve::EvolveConfig;
///
/// let config = EvolveConfig::default();
/// assert_eq!(config.elites, 10);
/// assert_eq!(config.max_generations, 1000);
/// assert_eq!(config.target_score, Some(0.0));
/// ```
///
/// # Builder Pattern
///
/// ```
/// use genetix::evolve::EvolveConfig;
///
/// let config = EvolveConfig::default()
///     .with_elites(5)
///     .with_mutation_rate(0.3)
///     .with_crossover_rate(0.05)
///     .with_target_score(1.5)
///     .with_seed(42);
/// assert!(config.validate(100).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvolveConfig {
    /// Number of best entities preserved unchanged each generation.
    ///
    /// Must be less than the population size.
    pub elites: usize,

    /// Mutation budget per entity.
    ///
    /// Each generation issues `floor(n * mutation_rate) + 1` mutations.
    /// Values above 1.0 are allowed.
    pub mutation_rate: f64,

    /// Crossover budget per unordered pair.
    ///
    /// Each generation issues `floor(n(n-1)/2 * crossover_rate) + 1`
    /// crossovers. Values above 1.0 are allowed.
    pub crossover_rate: f64,

    /// Maximum number of generations.
    pub max_generations: usize,

    /// Stop as soon as the best score is at or below this value.
    ///
    /// `None` runs until `max_generations` or cancellation.
    pub target_score: Option<f64>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EvolveConfig {
    fn default() -> Self {
        Self {
            elites: 10,
            mutation_rate: 0.2,
            crossover_rate: 0.1,
            max_generations: 1000,
            target_score: Some(0.0),
            seed: None,
        }
    }
}

impl EvolveConfig {
    /// Sets the number of elites.
    pub fn with_elites(mut self, elites: usize) -> Self {
        self.elites = elites;
        self
    }

    /// Sets the mutation rate. Negative values are clamped to 0.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.max(0.0);
        self
    }

    /// Sets the crossover rate. Negative values are clamped to 0.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.max(0.0);
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the target score.
    pub fn with_target_score(mut self, target: f64) -> Self {
        self.target_score = Some(target);
        self
    }

    /// Runs without a target score.
    pub fn without_target_score(mut self) -> Self {
        self.target_score = None;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration against a population size.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self, population_size: usize) -> Result<(), String> {
        if population_size == 0 {
            return Err("population must not be empty".into());
        }
        if self.elites >= population_size {
            return Err(format!(
                "elites ({}) must be less than the population size ({population_size})",
                self.elites
            ));
        }
        if !self.mutation_rate.is_finite() || self.mutation_rate < 0.0 {
            return Err("mutation_rate must be finite and non-negative".into());
        }
        if !self.crossover_rate.is_finite() || self.crossover_rate < 0.0 {
            return Err("crossover_rate must be finite and non-negative".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if matches!(self.target_score, Some(t) if !t.is_finite()) {
            return Err("target_score must be finite".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvolveConfig::default();
        assert_eq!(config.elites, 10);
        assert!((config.mutation_rate - 0.2).abs() < 1e-10);
        assert!((config.crossover_rate - 0.1).abs() < 1e-10);
        assert_eq!(config.max_generations, 1000);
        assert_eq!(config.target_score, Some(0.0));
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EvolveConfig::default()
            .with_elites(3)
            .with_mutation_rate(1.5)
            .with_crossover_rate(0.01)
            .with_max_generations(50)
            .with_target_score(2.0)
            .with_seed(7);

        assert_eq!(config.elites, 3);
        assert!((config.mutation_rate - 1.5).abs() < 1e-10);
        assert!((config.crossover_rate - 0.01).abs() < 1e-10);
        assert_eq!(config.max_generations, 50);
        assert_eq!(config.target_score, Some(2.0));
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_without_target_score() {
        let config = EvolveConfig::default().without_target_score();
        assert!(config.target_score.is_none());
    }

    #[test]
    fn test_rates_clamp_negative_only() {
        let config = EvolveConfig::default()
            .with_mutation_rate(-1.0)
            .with_crossover_rate(3.0);
        assert!((config.mutation_rate - 0.0).abs() < 1e-15);
        assert!((config.crossover_rate - 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_validate_ok() {
        assert!(EvolveConfig::default().validate(100).is_ok());
    }

    #[test]
    fn test_validate_empty_population() {
        assert!(EvolveConfig::default().with_elites(0).validate(0).is_err());
    }

    #[test]
    fn test_validate_elites_fill_population() {
        let config = EvolveConfig::default().with_elites(10);
        let err = config.validate(10).unwrap_err();
        assert!(err.contains("elites (10)"), "unexpected message: {err}");
        assert!(config.validate(11).is_ok());
    }

    #[test]
    fn test_validate_bad_rates() {
        let mut config = EvolveConfig::default();
        config.mutation_rate = f64::NAN;
        assert!(config.validate(100).is_err());

        let mut config = EvolveConfig::default();
        config.crossover_rate = -0.5;
        assert!(config.validate(100).is_err());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = EvolveConfig::default().with_max_generations(0);
        assert!(config.validate(100).is_err());
    }

    #[test]
    fn test_validate_infinite_target() {
        let config = EvolveConfig::default().with_target_score(f64::INFINITY);
        assert!(config.validate(100).is_err());
    }
}
