//! Precondition errors for the cube model.

use thiserror::Error;

/// Errors raised when a caller hands the model malformed dimensions or
/// identifiers. These are integration bugs, not user-correctable states.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Unsupported cube size {size} (supported: {min}..={max})")]
    UnsupportedSize { size: usize, min: usize, max: usize },

    #[error("Face grid has {actual} stickers, expected {expected}")]
    GridLength { expected: usize, actual: usize },

    #[error("Face grid is {actual}x{actual} but the cube is {expected}x{expected}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Unknown face identifier '{0}'")]
    UnknownFace(String),

    #[error("Unknown color '{0}'")]
    UnknownColor(String),

    #[error("Cannot turn {layers} layers on a {size}x{size} cube")]
    InvalidLayers { layers: usize, size: usize },

    #[error("Cell ({row}, {col}) is outside a {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
}
