//! Solver exchange error types.

use crate::core::ModelError;
use crate::notation::NotationError;
use thiserror::Error;

/// Errors that can occur while talking to an external solver
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Payload version is not supported by this version
    #[error("Unsupported payload version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Payload was well-formed but does not describe a cube
    #[error("Payload validation failed: {0}")]
    ValidationFailed(String),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Notation(#[from] NotationError),

    /// The solver answered with its error sentinel
    #[error("Solver failed: {0}")]
    SolverFailed(String),

    #[error("Solver returned no steps")]
    EmptySolution,
}
