//! Cube state model.
//!
//! This module contains the pure value types of the crate:
//! - Sticker colors and scan-time placeholders
//! - Face identifiers and their conventions
//! - Per-face grids and the whole-cube state
//! - Immutable move history
//!
//! Nothing in here mutates a value that has been handed out; changes are
//! expressed by returning new values.

mod color;
mod error;
mod face;
mod grid;
mod history;
mod state;

pub use color::{Color, Sticker};
pub use error::ModelError;
pub use face::{Face, Side, SCAN_ORDER};
pub use grid::{check_size, FaceGrid, MAX_SIZE, MIN_SIZE};
pub use history::{MoveHistory, MoveRecord};
pub use state::CubeState;
