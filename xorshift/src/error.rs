//! Errors for the fallible edges of the crate
//!
//! Generating output never fails. These cover runtime-length state input
//! and generator selection by name or config.

use thiserror::Error;

/// Errors that can occur when building a generator at runtime
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("State vector has {actual} words, expected {expected}")]
    StateLength { expected: usize, actual: usize },

    #[error("Unknown generator kind: {0}")]
    UnknownKind(String),

    #[error("Invalid generator config: {0}")]
    InvalidConfig(String),
}
