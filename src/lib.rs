pub mod error;
pub mod evolution;
pub mod fitness;
pub mod individual;
pub mod ops;
pub mod partition;
pub mod rng;
pub mod scoring;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{BalanceError, Result};
pub use evolution::{EvolutionDriver, EvolutionOptions, EvolutionOutcome};
pub use fitness::{FitnessEvaluator, RangeEvaluator};
pub use individual::Individual;
pub use ops::CrossoverKind;
pub use partition::Partition;
pub use rng::RandomNumberGenerator;
