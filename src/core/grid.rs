//! Square sticker grid for a single face.

use super::color::Color;
use super::error::ModelError;
use serde::Serialize;

/// Smallest cube the model accepts.
pub const MIN_SIZE: usize = 2;

/// Largest cube the model accepts from external input.
pub const MAX_SIZE: usize = 9;

/// Check that `size` is a supported cube dimension.
pub fn check_size(size: usize) -> Result<(), ModelError> {
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(ModelError::UnsupportedSize {
            size,
            min: MIN_SIZE,
            max: MAX_SIZE,
        })
    }
}

/// N×N stickers of one face, stored row-major.
///
/// Cell (0, 0) is the top-left corner as seen when looking straight at the
/// face. The grid always holds exactly `size * size` cells.
///
/// # Example
///
/// ```rust
/// use cubist::core::{Color, FaceGrid};
///
/// let grid = FaceGrid::solid(3, Color::Red);
/// assert_eq!(grid.cells().len(), 9);
/// assert!(grid.is_solid());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct FaceGrid {
    size: usize,
    cells: Vec<Color>,
}

impl FaceGrid {
    /// Build a grid from row-major cells.
    ///
    /// Fails if the size is unsupported or `cells.len() != size * size`.
    pub fn new(size: usize, cells: Vec<Color>) -> Result<Self, ModelError> {
        check_size(size)?;
        let expected = size * size;
        if cells.len() != expected {
            return Err(ModelError::GridLength {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// A grid filled with one color.
    pub fn solid(size: usize, color: Color) -> Self {
        Self {
            size,
            cells: vec![color; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> Option<&[Color]> {
        (row < self.size).then(|| &self.cells[row * self.size..(row + 1) * self.size])
    }

    pub fn column(&self, col: usize) -> Option<Vec<Color>> {
        (col < self.size).then(|| (0..self.size).map(|row| self.at(row, col)).collect())
    }

    /// Center sticker, which only exists for odd sizes.
    pub fn center(&self) -> Option<Color> {
        (self.size % 2 == 1).then(|| self.at(self.size / 2, self.size / 2))
    }

    pub fn is_solid(&self) -> bool {
        self.cells.windows(2).all(|pair| pair[0] == pair[1])
    }

    /// Return a copy with one cell recolored.
    pub fn with_cell(&self, row: usize, col: usize, color: Color) -> Result<Self, ModelError> {
        if row >= self.size || col >= self.size {
            return Err(ModelError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        let mut next = self.clone();
        next.set(row, col, color);
        Ok(next)
    }

    /// Rotate the grid a quarter turn into a fresh grid.
    ///
    /// Clockwise sends (row, col) to (col, n-1-row); counter-clockwise sends
    /// it to (n-1-col, row).
    pub fn rotated(&self, clockwise: bool) -> Self {
        let n = self.size;
        let mut cells = self.cells.clone();
        for row in 0..n {
            for col in 0..n {
                let (r, c) = if clockwise {
                    (col, n - 1 - row)
                } else {
                    (n - 1 - col, row)
                };
                cells[r * n + c] = self.cells[row * n + col];
            }
        }
        Self { size: n, cells }
    }

    pub(crate) fn at(&self, row: usize, col: usize) -> Color {
        self.cells[row * self.size + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, color: Color) {
        self.cells[row * self.size + col] = color;
    }
}
