//! Error types for the duplicate-detection engine

use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the duplicate-detection engine.
///
/// The engine itself has no fallible operations: comparators degrade absent
/// or malformed fields to "no evidence" instead of failing. The only error
/// surface is configuration validation at the boundary of a run.
#[derive(Error, Debug)]
pub enum Error {
    /// Threshold configuration rejected before the scan begins
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
