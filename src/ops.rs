//! # Variation Operators
//!
//! Crossover and mutation for partitions. The crossover variant is
//! runtime-selectable via [`CrossoverKind`]:
//!
//! - [`CrossoverKind::PairedSwap`] (the default) blends each child team
//!   toward the second parent by swapping members between teams, so the
//!   child is always a valid permutation of the roster.
//! - [`CrossoverKind::TeamBlend`] is the legacy overwrite-based blend,
//!   which does **not** preserve the exactly-once invariant across team
//!   boundaries: an individual displaced from one team can still sit
//!   untouched in another. It exists for strict compatibility with older
//!   runs.
//!
//! Mutation swaps one random member between two random teams with a fixed
//! probability per reproduction event; it preserves per-team sizes and total
//! membership, unlike the blend crossover.

use std::collections::{HashMap, HashSet};

use crate::individual::Individual;
use crate::partition::Partition;
use crate::rng::RandomNumberGenerator;

/// Crossover strategy for combining two parent partitions into a child.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossoverKind {
    /// Swap-based blend that keeps the child a valid permutation of the
    /// roster.
    #[default]
    PairedSwap,
    /// Legacy overwrite-based blend; may duplicate or drop individuals
    /// across team boundaries.
    TeamBlend,
}

/// Produces one child partition from two parents using the given strategy.
///
/// Both parents must have the same number of teams with matching sizes per
/// team index, which is guaranteed for partitions built from the same roster
/// with the same team count.
pub fn crossover(
    kind: CrossoverKind,
    parent1: &Partition,
    parent2: &Partition,
    rng: &mut RandomNumberGenerator,
) -> Partition {
    match kind {
        CrossoverKind::PairedSwap => paired_swap(parent1, parent2, rng),
        CrossoverKind::TeamBlend => team_blend(parent1, parent2, rng),
    }
}

/// With probability `rate`, swaps one random member of a random team `i`
/// with one random member of team `j = (i + random(0..N)) % N`.
///
/// The two team indices may coincide, in which case the draw is a no-op
/// swap. A true swap preserves each team's size and the total membership
/// count.
pub fn mutate(partition: &mut Partition, rate: f64, rng: &mut RandomNumberGenerator) {
    if !rng.chance(rate) {
        return;
    }

    let team_count = partition.team_count();
    if team_count == 0 {
        return;
    }

    let i = rng.index(team_count);
    let j = (i + rng.index(team_count)) % team_count;
    if partition.teams()[i].is_empty() || partition.teams()[j].is_empty() {
        return;
    }

    let slot_i = rng.index(partition.teams()[i].len());
    let slot_j = rng.index(partition.teams()[j].len());
    partition.swap_members(i, slot_i, j, slot_j);
}

/// Overwrite-based blend, per team index independently: the child team
/// starts as a copy of parent-1's team, then every member of parent-2's
/// same-indexed team overwrites a distinct randomly chosen slot.
///
/// Because each team is blended in isolation, the child as a whole is not
/// guaranteed to contain every roster member exactly once.
fn team_blend(
    parent1: &Partition,
    parent2: &Partition,
    rng: &mut RandomNumberGenerator,
) -> Partition {
    let mut teams = Vec::with_capacity(parent1.team_count());

    for (team1, team2) in parent1.teams().iter().zip(parent2.teams()) {
        let mut child = team1.clone();
        let mut overwritten = vec![false; child.len()];

        // Matching team sizes mean every donor member finds a free slot;
        // the take guards against malformed input hanging the retry loop.
        for member in team2.iter().take(child.len()) {
            let mut slot = rng.index(child.len());
            while overwritten[slot] {
                slot = rng.index(child.len());
            }
            child[slot] = member.clone();
            overwritten[slot] = true;
        }

        teams.push(child);
    }

    Partition::from_teams(teams)
}

/// Swap-based blend: the child starts as a copy of parent-1, then for each
/// team index, each member parent-2 places there is adopted with probability
/// one half by swapping it with a member parent-2 does not want on that
/// team. Adopting every donor member would reproduce parent-2 outright, so
/// the coin flip is what makes this a recombination of both parents.
///
/// Every move is a true swap between two teams of the child, so the child
/// remains a valid permutation of the roster with parent-1's team sizes.
fn paired_swap(
    parent1: &Partition,
    parent2: &Partition,
    rng: &mut RandomNumberGenerator,
) -> Partition {
    let mut child = parent1.clone();

    // Where each individual currently sits in the child
    let mut locations: HashMap<String, (usize, usize)> = HashMap::new();
    for (team, members) in child.teams().iter().enumerate() {
        for (slot, member) in members.iter().enumerate() {
            locations.insert(member.name().to_string(), (team, slot));
        }
    }

    for (team, donor) in parent2.teams().iter().enumerate() {
        let wanted: HashSet<&str> = donor.iter().map(Individual::name).collect();

        for member in donor {
            let Some(&(current_team, current_slot)) = locations.get(member.name()) else {
                continue;
            };
            if current_team == team {
                continue;
            }
            if !rng.chance(0.5) {
                continue;
            }

            // Swap with a member of this team that parent-2 places elsewhere
            let candidates: Vec<usize> = child.teams()[team]
                .iter()
                .enumerate()
                .filter(|(_, resident)| !wanted.contains(resident.name()))
                .map(|(slot, _)| slot)
                .collect();
            if candidates.is_empty() {
                continue;
            }

            let slot = candidates[rng.index(candidates.len())];
            let displaced = child.teams()[team][slot].name().to_string();

            child.swap_members(team, slot, current_team, current_slot);
            locations.insert(member.name().to_string(), (team, slot));
            locations.insert(displaced, (current_team, current_slot));
        }
    }

    child
}
