//! # Partition
//!
//! The `Partition` struct assigns every individual of a roster to exactly one
//! of N teams. It is the chromosome of the optimizer: populations are
//! collections of partitions, and the variation operators produce new
//! partitions from old ones.
//!
//! Random construction shuffles the roster uniformly and deals individuals
//! round-robin, which guarantees that every individual appears exactly once
//! and that team sizes differ by at most one.
//!
//! ## Example
//!
//! ```rust
//! use teambalance::individual::Individual;
//! use teambalance::partition::Partition;
//! use teambalance::rng::RandomNumberGenerator;
//!
//! let roster = vec![
//!     Individual::new("a", 1.0, 1, "regular"),
//!     Individual::new("b", 2.0, 1, "regular"),
//!     Individual::new("c", 3.0, 2, "ironman"),
//!     Individual::new("d", 4.0, 2, "regular"),
//! ];
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let partition = Partition::random(&roster, 2, &mut rng).unwrap();
//!
//! assert_eq!(partition.team_count(), 2);
//! assert_eq!(partition.member_count(), 4);
//! ```

use crate::error::{BalanceError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// An assignment of every individual to exactly one of N teams.
///
/// Each partition owns independent clones of its members; copying a partition
/// never aliases another one.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    teams: Vec<Vec<Individual>>,
}

impl Partition {
    /// Creates a partition by uniformly shuffling the roster and assigning
    /// the individual at position `i` to team `i % team_count`.
    ///
    /// # Arguments
    ///
    /// * `roster` - The full list of individuals to distribute.
    /// * `team_count` - The number of teams, fixed for the run.
    /// * `rng` - The random number generator driving the shuffle.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `team_count` is zero or if the
    /// roster has fewer individuals than teams, which would leave a team
    /// empty.
    pub fn random(
        roster: &[Individual],
        team_count: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        if team_count == 0 {
            return Err(BalanceError::Configuration(
                "Team count cannot be zero".to_string(),
            ));
        }

        if roster.len() < team_count {
            return Err(BalanceError::Configuration(format!(
                "Roster size ({}) is smaller than the team count ({})",
                roster.len(),
                team_count
            )));
        }

        let mut shuffled = roster.to_vec();
        rng.shuffle(&mut shuffled);

        let mut teams = vec![Vec::new(); team_count];
        for (i, individual) in shuffled.into_iter().enumerate() {
            teams[i % team_count].push(individual);
        }

        Ok(Self { teams })
    }

    /// Creates a partition from pre-built teams.
    ///
    /// Used by the variation operators; no invariant is checked here, since
    /// the legacy blend crossover deliberately produces partitions that are
    /// not valid permutations of the roster.
    pub fn from_teams(teams: Vec<Vec<Individual>>) -> Self {
        Self { teams }
    }

    /// Returns the teams of this partition.
    pub fn teams(&self) -> &[Vec<Individual>] {
        &self.teams
    }

    /// Returns the number of teams.
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Returns the total number of members across all teams.
    pub fn member_count(&self) -> usize {
        self.teams.iter().map(Vec::len).sum()
    }

    /// Returns the teams with each roster sorted by descending score.
    ///
    /// This is the shape the presentation layer renders: per-team rosters
    /// with the strongest member first.
    pub fn ranked_teams(&self) -> Vec<Vec<Individual>> {
        self.teams
            .iter()
            .map(|team| {
                let mut ranked = team.clone();
                ranked.sort_by(|a, b| b.score().total_cmp(&a.score()));
                ranked
            })
            .collect()
    }

    /// Swaps the member at `(team_a, slot_a)` with the member at
    /// `(team_b, slot_b)`.
    pub(crate) fn swap_members(
        &mut self,
        team_a: usize,
        slot_a: usize,
        team_b: usize,
        slot_b: usize,
    ) {
        if team_a == team_b {
            self.teams[team_a].swap(slot_a, slot_b);
            return;
        }

        let (lo, lo_slot, hi, hi_slot) = if team_a < team_b {
            (team_a, slot_a, team_b, slot_b)
        } else {
            (team_b, slot_b, team_a, slot_a)
        };
        let (left, right) = self.teams.split_at_mut(hi);
        std::mem::swap(&mut left[lo][lo_slot], &mut right[0][hi_slot]);
    }
}
