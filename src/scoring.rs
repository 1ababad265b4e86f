//! # Score Derivation
//!
//! Helpers that turn raw participant data into the `score` and `preference`
//! attributes of an [`Individual`](crate::individual::Individual).
//!
//! The collaborators that actually fetch profile statistics or read survey
//! responses live outside this crate; these functions only encode the
//! derivations so that every caller buckets wealth answers and caps skill
//! contributions the same way.
//!
//! ## Example
//!
//! ```rust
//! use teambalance::scoring::{skill_score, PlayerStats, ScoreWeights};
//!
//! let stats = PlayerStats { ehb: 200.0, ehp: 400.0 };
//! let score = skill_score(&stats, &ScoreWeights::default());
//!
//! // Both axes sit at half their cap, so each contributes 5.0
//! assert!((score - 10.0).abs() < 1e-9);
//! ```

/// Raw skill-tracking statistics for one participant.
///
/// `ehb` (efficient hours bossed) and `ehp` (efficient hours played) come
/// from an external profile-lookup collaborator.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerStats {
    pub ehb: f64,
    pub ehp: f64,
}

/// Caps applied to the skill-tracking statistics.
///
/// Each axis contributes up to 10 points, reached at its cap; values above
/// the cap are clamped rather than extrapolated.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub ehb_max: f64,
    pub ehp_max: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            ehb_max: 400.0,
            ehp_max: 800.0,
        }
    }
}

/// Derives a skill score from raw statistics.
///
/// Each axis contributes `10.0` at or above its cap, and scales linearly
/// below it, so scores fall in `[0.0, 20.0]`.
pub fn skill_score(stats: &PlayerStats, weights: &ScoreWeights) -> f64 {
    axis_score(stats.ehb, weights.ehb_max) + axis_score(stats.ehp, weights.ehp_max)
}

/// Derives a skill score from raw statistics plus a wealth contribution.
///
/// The wealth term is added on top of the capped axes, typically a value
/// produced by [`wealth_score`].
pub fn skill_score_with_wealth(stats: &PlayerStats, wealth: f64, weights: &ScoreWeights) -> f64 {
    skill_score(stats, weights) + wealth
}

fn axis_score(value: f64, max: f64) -> f64 {
    if value >= max {
        10.0
    } else {
        (value * 10.0) / max
    }
}

/// Maps a survey wealth bucket to its score contribution.
///
/// Returns `None` for an unrecognized bucket.
pub fn wealth_score(bucket: &str) -> Option<f64> {
    match bucket {
        "greater than or equal to 2B" => Some(20.0),
        "less than 2B but greater than 1B" => Some(15.0),
        "less than 1B but more than 500M" => Some(7.5),
        "less than 500M but more than 100M" => Some(2.5),
        "less than 100M but more than 50M" => Some(0.75),
        "less than 50M" => Some(0.5),
        _ => None,
    }
}

/// Maps a survey content-preference answer to its numeric category.
///
/// Returns `None` for an unrecognized answer.
pub fn preference_from_answer(answer: &str) -> Option<u32> {
    match answer {
        "PVM" => Some(1),
        "SKILLING" => Some(2),
        "Both?" => Some(3),
        _ => None,
    }
}
