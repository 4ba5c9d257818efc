//! Error types for the ruleset core.
//!
//! Routine lookup misses are modeled as `Option` values, not errors; the
//! error type covers only conditions where the dataset itself cannot be
//! used.

use thiserror::Error;

/// Result type for ruleset core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while loading or validating the ruleset.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The ruleset JSON could not be parsed.
    #[error("dataset unavailable: {0}")]
    DatasetUnavailable(#[from] serde_json::Error),
}
