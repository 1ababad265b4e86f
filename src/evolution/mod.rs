pub mod driver;
pub mod options;

pub use driver::{EvolutionDriver, EvolutionOutcome};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder};
