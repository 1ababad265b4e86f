//! # EvolutionDriver
//!
//! The generational loop of the optimizer. The driver owns the fitness
//! evaluator and steps the population through repeated evaluation,
//! truncation selection, and reproduction until the configured number of
//! generations has run, then returns the best partition found.
//!
//! The population is an owned value local to the loop, replaced wholesale
//! every generation; nothing about a run is global. Because the survivor set
//! always carries the current best partition into the next generation, the
//! best fitness observed is non-increasing across generations.

use tracing::{debug, info};

use super::options::EvolutionOptions;
use crate::error::{BalanceError, Result};
use crate::fitness::{FitnessEvaluator, RangeEvaluator};
use crate::individual::Individual;
use crate::ops::{crossover, mutate};
use crate::partition::Partition;
use crate::rng::RandomNumberGenerator;
use crate::selection::truncation_select;

/// The result of a balancing run: the best partition found, its fitness,
/// and the best fitness observed after each generation.
#[derive(Debug, Clone)]
pub struct EvolutionOutcome {
    /// The best partition found.
    pub best: Partition,
    /// The fitness of the best partition; lower is better, zero is balanced.
    pub fitness: f64,
    /// Best fitness after each generation, one entry per generation.
    pub history: Vec<f64>,
}

/// Runs the generational loop with a fitness evaluator.
///
/// # Example
///
/// ```rust
/// use teambalance::evolution::{EvolutionDriver, EvolutionOptions};
/// use teambalance::individual::Individual;
/// use teambalance::rng::RandomNumberGenerator;
///
/// let roster: Vec<Individual> = (0..10)
///     .map(|i| Individual::new(format!("p{}", i), 5.0, 1, "regular"))
///     .collect();
///
/// let options = EvolutionOptions::builder()
///     .team_count(5)
///     .population_size(20)
///     .generations(10)
///     .build();
///
/// let driver = EvolutionDriver::new();
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let outcome = driver.evolve(&roster, &options, &mut rng).unwrap();
///
/// assert_eq!(outcome.best.team_count(), 5);
/// assert_eq!(outcome.fitness, 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionDriver<E = RangeEvaluator>
where
    E: FitnessEvaluator,
{
    evaluator: E,
}

impl EvolutionDriver<RangeEvaluator> {
    /// Creates a driver with the default range-spread evaluator.
    pub fn new() -> Self {
        Self {
            evaluator: RangeEvaluator,
        }
    }
}

impl Default for EvolutionDriver<RangeEvaluator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EvolutionDriver<E>
where
    E: FitnessEvaluator,
{
    /// Creates a driver with a custom fitness evaluator.
    pub fn with_evaluator(evaluator: E) -> Self {
        Self { evaluator }
    }

    /// Evolves a population of random partitions of the roster and returns
    /// the best one found.
    ///
    /// # Arguments
    ///
    /// * `roster` - The full list of individuals to partition.
    /// * `options` - Run configuration; validated before anything is built.
    /// * `rng` - The random number generator driving the whole run.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` or `EmptyRoster` error if the options fail
    /// validation against the roster, and a `FitnessCalculation` error if
    /// the evaluator produces a non-finite score.
    pub fn evolve(
        &self,
        roster: &[Individual],
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionOutcome> {
        options.validate(roster.len())?;

        let mut population: Vec<Partition> = (0..options.population_size())
            .map(|_| Partition::random(roster, options.team_count(), rng))
            .collect::<Result<_>>()?;

        let mut history = Vec::with_capacity(options.generations());

        for generation in 0..options.generations() {
            let fitness = self.evaluate(&population)?;

            let best = fitness.iter().copied().fold(f64::INFINITY, f64::min);
            history.push(best);

            if options.report_every() != 0 && generation % options.report_every() == 0 {
                debug!(generation, best_fitness = best, "generation evaluated");
            }

            let survivors = truncation_select(&population, &fitness)?;

            let mut next = survivors.clone();
            while next.len() < options.population_size() {
                let parent1 = &survivors[rng.index(survivors.len())];
                let parent2 = &survivors[rng.index(survivors.len())];

                let mut child = crossover(options.crossover(), parent1, parent2, rng);
                mutate(&mut child, options.mutation_rate(), rng);
                next.push(child);
            }

            population = next;
        }

        // Final evaluation pass over the last population
        let fitness = self.evaluate(&population)?;
        let (best_index, best_fitness) = fitness
            .iter()
            .copied()
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .ok_or_else(|| {
                BalanceError::Evolution(
                    "Evolution completed but no candidates were produced".to_string(),
                )
            })?;

        info!(
            generations = options.generations(),
            best_fitness, "evolution finished"
        );

        Ok(EvolutionOutcome {
            best: population.swap_remove(best_index),
            fitness: best_fitness,
            history,
        })
    }

    fn evaluate(&self, population: &[Partition]) -> Result<Vec<f64>> {
        population
            .iter()
            .map(|partition| {
                let score = self.evaluator.score(partition);
                if !score.is_finite() {
                    return Err(BalanceError::FitnessCalculation(format!(
                        "Non-finite fitness score encountered: {}",
                        score
                    )));
                }
                Ok(score)
            })
            .collect()
    }
}
