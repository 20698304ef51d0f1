//! Scan assembly errors.

use crate::core::{Face, ModelError};
use crate::validation::ScanViolation;
use thiserror::Error;

/// Errors that can occur while assembling a cube from scanned faces.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("All six faces have already been scanned. Use .capture_face(face, ..) to rescan")]
    ScanComplete,

    #[error("Face {0} has not been scanned yet. Capture it before correcting stickers")]
    FaceNotScanned(Face),

    #[error("Scan rejected with {} problem(s)", .0.len())]
    Rejected(Vec<ScanViolation>),
}

impl BuildError {
    /// Every violation behind a rejected scan; empty for other errors.
    pub fn violations(&self) -> &[ScanViolation] {
        match self {
            Self::Rejected(violations) => violations,
            _ => &[],
        }
    }
}
