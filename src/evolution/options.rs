//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct represents the configuration of a balancing
//! run: team count, population size, mutation rate, generation count,
//! crossover strategy, and the progress-reporting cadence.
//!
//! ## Example
//!
//! ```rust
//! use teambalance::evolution::options::EvolutionOptions;
//! use teambalance::ops::CrossoverKind;
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::builder()
//!     .team_count(4)
//!     .population_size(60)
//!     .mutation_rate(0.2)
//!     .generations(200)
//!     .crossover(CrossoverKind::TeamBlend)
//!     .build();
//!
//! // Create a new EvolutionOptions instance with default parameters
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.team_count(), 5);
//! ```

use crate::error::{BalanceError, Result};
use crate::ops::CrossoverKind;

/// Configuration options for a balancing run.
///
/// The parameters are fixed for the duration of a run; the driver validates
/// them against the roster before building the initial population.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct EvolutionOptions {
    team_count: usize,
    population_size: usize,
    mutation_rate: f64,
    generations: usize,
    crossover: CrossoverKind,
    /// Report best fitness every this many generations; zero disables reporting.
    report_every: usize,
}

impl EvolutionOptions {
    /// Creates a new `EvolutionOptions` instance with the core parameters;
    /// crossover strategy and reporting cadence take their defaults.
    pub fn new(
        team_count: usize,
        population_size: usize,
        mutation_rate: f64,
        generations: usize,
    ) -> Self {
        Self {
            team_count,
            population_size,
            mutation_rate,
            generations,
            crossover: CrossoverKind::default(),
            report_every: 10,
        }
    }

    pub fn team_count(&self) -> usize {
        self.team_count
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn generations(&self) -> usize {
        self.generations
    }

    pub fn crossover(&self) -> CrossoverKind {
        self.crossover
    }

    /// Returns the progress-reporting cadence; zero means never report.
    pub fn report_every(&self) -> usize {
        self.report_every
    }

    /// Validates the configuration against the roster it will partition.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the team count, population size,
    /// or generation count is zero, if the population size is odd (the
    /// population must halve evenly at selection), if the mutation rate is
    /// not a probability, or if the roster is smaller than the team count.
    /// Returns `EmptyRoster` for a roster with no individuals.
    pub fn validate(&self, roster_len: usize) -> Result<()> {
        if self.team_count == 0 {
            return Err(BalanceError::Configuration(
                "Team count cannot be zero".to_string(),
            ));
        }

        if self.population_size == 0 {
            return Err(BalanceError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        if self.population_size % 2 != 0 {
            return Err(BalanceError::Configuration(format!(
                "Population size ({}) must be even to halve at selection",
                self.population_size
            )));
        }

        if self.generations == 0 {
            return Err(BalanceError::Configuration(
                "Generation count cannot be zero".to_string(),
            ));
        }

        if !self.mutation_rate.is_finite() || !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(BalanceError::Configuration(format!(
                "Mutation rate ({}) must be a probability in [0, 1]",
                self.mutation_rate
            )));
        }

        if roster_len == 0 {
            return Err(BalanceError::EmptyRoster);
        }

        if roster_len < self.team_count {
            return Err(BalanceError::Configuration(format!(
                "Roster size ({}) is smaller than the team count ({})",
                roster_len, self.team_count
            )));
        }

        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            team_count: 5,
            population_size: 100,
            mutation_rate: 0.1,
            generations: 100,
            crossover: CrossoverKind::default(),
            report_every: 10,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    team_count: Option<usize>,
    population_size: Option<usize>,
    mutation_rate: Option<f64>,
    generations: Option<usize>,
    crossover: Option<CrossoverKind>,
    report_every: Option<usize>,
}

impl EvolutionOptionsBuilder {
    /// Sets the number of teams.
    pub fn team_count(mut self, value: usize) -> Self {
        self.team_count = Some(value);
        self
    }

    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the mutation rate.
    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    /// Sets the number of generations.
    pub fn generations(mut self, value: usize) -> Self {
        self.generations = Some(value);
        self
    }

    /// Sets the crossover strategy.
    pub fn crossover(mut self, value: CrossoverKind) -> Self {
        self.crossover = Some(value);
        self
    }

    /// Sets the progress-reporting cadence; zero disables reporting.
    pub fn report_every(mut self, value: usize) -> Self {
        self.report_every = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            team_count: self.team_count.unwrap_or(defaults.team_count),
            population_size: self.population_size.unwrap_or(defaults.population_size),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            generations: self.generations.unwrap_or(defaults.generations),
            crossover: self.crossover.unwrap_or(defaults.crossover),
            report_every: self.report_every.unwrap_or(defaults.report_every),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let options = EvolutionOptions::default();

        assert!(options.validate(20).is_ok());
    }

    #[test]
    fn test_builder_overrides_and_defaults() {
        let options = EvolutionOptions::builder()
            .team_count(3)
            .generations(50)
            .build();

        assert_eq!(options.team_count(), 3);
        assert_eq!(options.generations(), 50);
        assert_eq!(options.population_size(), 100);
        assert_eq!(options.crossover(), CrossoverKind::PairedSwap);
    }

    #[test]
    fn test_rejects_zero_teams() {
        let options = EvolutionOptions::new(0, 100, 0.1, 100);

        assert!(matches!(
            options.validate(20),
            Err(BalanceError::Configuration(_))
        ));
    }

    #[test]
    fn test_rejects_odd_population() {
        let options = EvolutionOptions::new(5, 99, 0.1, 100);

        assert!(matches!(
            options.validate(20),
            Err(BalanceError::Configuration(_))
        ));
    }

    #[test]
    fn test_rejects_zero_generations() {
        let options = EvolutionOptions::new(5, 100, 0.1, 0);

        assert!(matches!(
            options.validate(20),
            Err(BalanceError::Configuration(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_mutation_rate() {
        let options = EvolutionOptions::new(5, 100, 1.5, 100);

        assert!(matches!(
            options.validate(20),
            Err(BalanceError::Configuration(_))
        ));
    }

    #[test]
    fn test_rejects_empty_roster() {
        let options = EvolutionOptions::default();

        assert!(matches!(options.validate(0), Err(BalanceError::EmptyRoster)));
    }

    #[test]
    fn test_rejects_roster_smaller_than_team_count() {
        let options = EvolutionOptions::new(5, 100, 0.1, 100);

        assert!(matches!(
            options.validate(3),
            Err(BalanceError::Configuration(_))
        ));
    }
}
