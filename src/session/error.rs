//! Session error types.

use crate::core::ModelError;
use crate::notation::NotationError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Notation(#[from] NotationError),

    /// A solver step could not be turned into moves.
    #[error("Step {index} ('{notation}') is invalid: {source}")]
    InvalidStep {
        index: usize,
        notation: String,
        source: NotationError,
    },
}
