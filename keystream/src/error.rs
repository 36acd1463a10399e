//! Error taxonomy for generator operations
//!
//! Every failure is synchronous and recoverable. Restore operations validate
//! their input completely before touching generator state, so an error
//! always leaves the generator exactly as it was.

use thiserror::Error;

/// Errors that can occur while seeding, drawing or restoring a generator
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeneratorError {
    #[error("Invalid seed key: {0}")]
    InvalidSeed(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid range: min {min} exceeds max {max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Invalid state string: {0}")]
    InvalidStateString(String),

    #[error("Entropy source failed: {0}")]
    Entropy(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
