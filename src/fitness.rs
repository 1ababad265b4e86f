//! # Fitness Evaluation
//!
//! The `FitnessEvaluator` trait defines the interface for scoring a
//! [`Partition`]; lower is better and zero means perfectly balanced.
//!
//! The concrete [`RangeEvaluator`] measures how far apart the best- and
//! worst-off teams are: it sums each team's scores and preferences and adds
//! the two ranges together. Being a range metric, it reacts to single
//! outlier teams, not to the overall spread.
//!
//! ## Example
//!
//! ```rust
//! use teambalance::fitness::{FitnessEvaluator, RangeEvaluator};
//! use teambalance::individual::Individual;
//! use teambalance::partition::Partition;
//!
//! let partition = Partition::from_teams(vec![
//!     vec![Individual::new("a", 5.0, 1, "regular")],
//!     vec![Individual::new("b", 5.0, 1, "regular")],
//! ]);
//!
//! let evaluator = RangeEvaluator;
//! assert_eq!(evaluator.score(&partition), 0.0);
//! ```

use crate::partition::Partition;

/// Trait for scoring partitions. Lower scores are better.
///
/// Implementations must be deterministic: evaluating the same partition
/// twice must produce the same value, since the driver re-evaluates
/// partitions freely instead of caching fitness.
pub trait FitnessEvaluator {
    /// Computes the fitness of a partition. Lower is better; zero is the
    /// theoretical best.
    fn score(&self, partition: &Partition) -> f64;
}

/// Fitness as the spread between the most and least loaded teams.
///
/// For each team the evaluator sums member scores and member preferences,
/// sorts both vectors ascending, and returns
/// `(max score sum - min score sum) + (max preference sum - min preference sum)`.
#[derive(Debug, Clone, Default)]
pub struct RangeEvaluator;

impl FitnessEvaluator for RangeEvaluator {
    fn score(&self, partition: &Partition) -> f64 {
        let mut team_scores = Vec::with_capacity(partition.team_count());
        let mut team_preferences = Vec::with_capacity(partition.team_count());

        for team in partition.teams() {
            team_scores.push(team.iter().map(|member| member.score()).sum::<f64>());
            team_preferences.push(
                team.iter()
                    .map(|member| f64::from(member.preference()))
                    .sum::<f64>(),
            );
        }

        team_scores.sort_by(f64::total_cmp);
        team_preferences.sort_by(f64::total_cmp);

        spread(&team_scores) + spread(&team_preferences)
    }
}

fn spread(sorted: &[f64]) -> f64 {
    match (sorted.first(), sorted.last()) {
        (Some(min), Some(max)) => max - min,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::individual::Individual;

    fn team(scores: &[(f64, u32)]) -> Vec<Individual> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &(score, pref))| Individual::new(format!("m{}", i), score, pref, "regular"))
            .collect()
    }

    #[test]
    fn test_balanced_partition_scores_zero() {
        let partition = Partition::from_teams(vec![
            team(&[(5.0, 1), (5.0, 2)]),
            team(&[(5.0, 1), (5.0, 2)]),
        ]);

        assert_eq!(RangeEvaluator.score(&partition), 0.0);
    }

    #[test]
    fn test_known_spread() {
        // Score sums 3.0 and 10.0, preference sums 2 and 4
        let partition = Partition::from_teams(vec![
            team(&[(1.0, 1), (2.0, 1)]),
            team(&[(4.0, 2), (6.0, 2)]),
        ]);

        let fitness = RangeEvaluator.score(&partition);

        assert!((fitness - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_fitness_is_non_negative() {
        let partition = Partition::from_teams(vec![
            team(&[(100.0, 3)]),
            team(&[(0.5, 1)]),
            team(&[(17.0, 2)]),
        ]);

        assert!(RangeEvaluator.score(&partition) >= 0.0);
    }

    #[test]
    fn test_fitness_is_deterministic() {
        let partition = Partition::from_teams(vec![
            team(&[(1.5, 1), (3.25, 2)]),
            team(&[(2.0, 3), (0.75, 1)]),
        ]);

        let first = RangeEvaluator.score(&partition);
        let second = RangeEvaluator.score(&partition);

        assert_eq!(first, second);
    }

    #[test]
    fn test_single_outlier_dominates() {
        // The middle team does not affect a range metric
        let tight = Partition::from_teams(vec![
            team(&[(1.0, 1)]),
            team(&[(5.0, 1)]),
            team(&[(9.0, 1)]),
        ]);
        let spread_out = Partition::from_teams(vec![
            team(&[(1.0, 1)]),
            team(&[(1.0, 1)]),
            team(&[(9.0, 1)]),
        ]);

        assert_eq!(
            RangeEvaluator.score(&tight),
            RangeEvaluator.score(&spread_out)
        );
    }
}
