//! Structured error types for the Physalia crates.

use thiserror::Error;

/// Unified error type for all Physalia operations.
#[derive(Debug, Error)]
pub enum PhysaliaError {
    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A structure could not be built from the given parameters
    #[error("construction error: {0}")]
    Construction(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the Physalia crates.
pub type Result<T> = std::result::Result<T, PhysaliaError>;
