//! Builder API for turning scanner output into a cube.
//!
//! The scanner reports one grid per face in [`SCAN_ORDER`], possibly with
//! cells it could not classify. [`ScanBuilder`] holds those grids while the
//! user corrects them and only hands out a [`CubeState`] once every face is
//! present, every sticker is known and the color counts add up.

pub mod error;
pub mod scan;

pub use error::BuildError;
pub use scan::ScanBuilder;

use crate::core::{Color, CubeState, Sticker, SCAN_ORDER};

/// Assemble a cube from fully classified grids given in scan order.
///
/// # Example
///
/// ```
/// use cubist::builder::from_scan;
/// use cubist::core::{CubeState, SCAN_ORDER};
///
/// let solved = CubeState::initial(3);
/// let grids: Vec<Vec<_>> = SCAN_ORDER
///     .iter()
///     .map(|&f| solved.face(f).cells().to_vec())
///     .collect();
/// assert_eq!(from_scan(3, grids).unwrap(), solved);
/// ```
pub fn from_scan(size: usize, grids: Vec<Vec<Color>>) -> Result<CubeState, BuildError> {
    let mut builder = ScanBuilder::new(size)?;
    for colors in grids.into_iter().take(SCAN_ORDER.len()) {
        builder = builder.capture(colors.into_iter().map(Sticker::Known).collect())?;
    }
    builder.build()
}
