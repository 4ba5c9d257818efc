//! Error types for the mechanics engine.

use thiserror::Error;

/// Result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;

/// Errors that can occur during mechanics operations.
#[derive(Debug, Error)]
pub enum MechError {
    /// A stat name from the UI boundary matched no Starforged stat.
    #[error("unknown stat: {0}")]
    UnknownStat(String),
}
