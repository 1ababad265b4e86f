//! # Individual
//!
//! The `Individual` struct represents one participant in a balancing run.
//! It carries the two numeric attributes the optimizer balances across teams
//! (a skill `score` and a content `preference`) plus an informational
//! `category` label that the fitness function ignores.
//!
//! Individuals are created once per run from external data and never mutated;
//! partitions clone them freely.
//!
//! ## Example
//!
//! ```rust
//! use teambalance::individual::Individual;
//!
//! let individual = Individual::new("Zezima", 12.5, 1, "regular");
//!
//! assert_eq!(individual.name(), "Zezima");
//! assert_eq!(individual.preference(), 1);
//! ```

/// One participant with the attributes used for balancing.
///
/// The `name` is expected to be unique within a run; the optimizer relies on
/// it to track members across partitions.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    name: String,
    score: f64,
    preference: u32,
    category: String,
}

impl Individual {
    /// Creates a new `Individual`.
    ///
    /// # Arguments
    ///
    /// * `name` - Identifier, unique within a run.
    /// * `score` - Non-negative balancing metric, such as effort-based skill.
    /// * `preference` - Small integer category for content preference.
    /// * `category` - Classification tag, informational only.
    pub fn new(
        name: impl Into<String>,
        score: f64,
        preference: u32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            score,
            preference,
            category: category.into(),
        }
    }

    /// Returns the identifier of this individual.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the skill score used for balancing.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Returns the content preference used for balancing.
    pub fn preference(&self) -> u32 {
        self.preference
    }

    /// Returns the classification tag. Not used by the fitness function.
    pub fn category(&self) -> &str {
        &self.category
    }
}
