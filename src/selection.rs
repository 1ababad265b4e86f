//! # Selection
//!
//! Truncation selection in the elitist style: rank the evaluated population
//! ascending by fitness and keep the best half as survivors. The sort is
//! stable, so partitions with equal fitness keep their prior relative order.
//!
//! This is deliberately the simplest selection scheme: deterministic given a
//! fitness ranking, favoring exploitation over diversity. The previous best
//! partition always survives, which makes the best fitness of the population
//! non-increasing across generations.

use std::cmp::Ordering;

use crate::error::{BalanceError, Result};
use crate::partition::Partition;

/// Selects the better half of an evaluated population.
///
/// # Arguments
///
/// * `population` - The current population of partitions.
/// * `fitness` - The fitness score of each partition, lower is better.
///
/// # Returns
///
/// The `population.len() / 2` partitions with the lowest fitness, ordered
/// ascending by fitness.
///
/// # Errors
///
/// Returns an error if the population is empty or if the fitness vector
/// length does not match the population length.
pub fn truncation_select(population: &[Partition], fitness: &[f64]) -> Result<Vec<Partition>> {
    if population.is_empty() {
        return Err(BalanceError::EmptyRoster);
    }

    if fitness.len() != population.len() {
        return Err(BalanceError::Configuration(format!(
            "Fitness vector length ({}) doesn't match population length ({})",
            fitness.len(),
            population.len()
        )));
    }

    let mut indexed: Vec<(usize, f64)> = fitness.iter().copied().enumerate().collect();

    // Stable sort: equal fitness keeps prior relative order
    indexed.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    Ok(indexed
        .iter()
        .take(population.len() / 2)
        .map(|&(idx, _)| population[idx].clone())
        .collect())
}
