//! # Error Types
//!
//! This module defines custom error types for the team balancing library.
//! It provides specific error variants for the failure scenarios that may
//! occur while configuring and running the optimizer.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use teambalance::error::{BalanceError, Result};
//!
//! fn some_function() -> Result<()> {
//!     // Function implementation
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur in the team balancing library.
///
/// This enum provides specific error variants for the failure scenarios
/// that may occur during configuration validation and evolution.
#[derive(Error, Debug)]
pub enum BalanceError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty roster or population is encountered.
    #[error("Empty roster error: Cannot operate on an empty roster")]
    EmptyRoster,

    /// Error that occurs when an evolution run fails.
    #[error("Evolution error: {0}")]
    Evolution(String),

    /// Error that occurs when a fitness calculation produces an invalid value.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),
}

/// A specialized Result type for team balancing operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `BalanceError`.
///
/// ## Examples
///
/// ```rust
/// use teambalance::error::{BalanceError, Result};
///
/// fn may_fail() -> Result<i32> {
///     // Some operation that might fail
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, BalanceError>;
