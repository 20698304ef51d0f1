//! Reasons a scanned cube cannot be accepted yet.

use crate::core::Face;
use crate::validation::mismatch::ColorMismatch;
use thiserror::Error;

/// Problems found while assembling a scanned cube.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScanViolation {
    #[error("Face {0} has not been scanned")]
    MissingFace(Face),

    #[error("Face {face} has {count} unclassified sticker(s)")]
    UnknownStickers { face: Face, count: usize },

    #[error("Color count off: {0}")]
    ColorCount(ColorMismatch),
}
