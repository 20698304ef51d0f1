//! The whole-cube value.
//!
//! A [`CubeState`] is an immutable value: every operation that changes the
//! cube returns a new state and leaves the old one intact, so anything still
//! holding the previous value (a renderer, a history) never sees a half
//! applied update.

use super::color::Color;
use super::error::ModelError;
use super::face::Face;
use super::grid::{check_size, FaceGrid};
use serde::Serialize;

/// One [`FaceGrid`] per face, all of the same size.
///
/// # Example
///
/// ```rust
/// use cubist::core::{Color, CubeState, Face};
///
/// let cube = CubeState::initial(3);
/// assert_eq!(cube.face(Face::Front).get(1, 1), Some(Color::Green));
/// assert!(cube.is_solved());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct CubeState {
    size: usize,
    faces: [FaceGrid; 6],
}

impl CubeState {
    /// Solved cube with every face filled by its home color.
    ///
    /// # Panics
    ///
    /// Panics if `size` is outside `MIN_SIZE..=MAX_SIZE`; use
    /// [`CubeState::try_initial`] for sizes coming from outside the program.
    pub fn initial(size: usize) -> Self {
        match Self::try_initial(size) {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_initial(size: usize) -> Result<Self, ModelError> {
        check_size(size)?;
        Ok(Self {
            size,
            faces: Face::ALL.map(|face| FaceGrid::solid(size, face.home_color())),
        })
    }

    /// Assemble a state from grids indexed like [`Face::ALL`].
    pub fn from_faces(size: usize, faces: [FaceGrid; 6]) -> Result<Self, ModelError> {
        check_size(size)?;
        for grid in &faces {
            if grid.size() != size {
                return Err(ModelError::SizeMismatch {
                    expected: size,
                    actual: grid.size(),
                });
            }
        }
        Ok(Self { size, faces })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn face(&self, face: Face) -> &FaceGrid {
        &self.faces[face.index()]
    }

    /// Faces paired with their grids, in [`Face::ALL`] order.
    pub fn faces(&self) -> impl Iterator<Item = (Face, &FaceGrid)> {
        Face::ALL.into_iter().zip(self.faces.iter())
    }

    /// Return a new state with one face replaced.
    pub fn with_face(&self, face: Face, grid: FaceGrid) -> Result<Self, ModelError> {
        if grid.size() != self.size {
            return Err(ModelError::GridLength {
                expected: self.size * self.size,
                actual: grid.cells().len(),
            });
        }
        let mut next = self.clone();
        next.faces[face.index()] = grid;
        Ok(next)
    }

    /// Sticker totals per color, indexed like [`Color::ALL`].
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for grid in &self.faces {
            for color in grid.cells() {
                counts[color.index()] += 1;
            }
        }
        counts
    }

    pub fn count(&self, color: Color) -> usize {
        self.color_counts()[color.index()]
    }

    /// Every face is a single color.
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(FaceGrid::is_solid)
    }

    pub(crate) fn face_mut(&mut self, face: Face) -> &mut FaceGrid {
        &mut self.faces[face.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_uses_home_colors() {
        for size in 2..=5 {
            let cube = CubeState::initial(size);
            assert_eq!(cube.size(), size);
            for (face, grid) in cube.faces() {
                assert_eq!(grid.cells().len(), size * size);
                assert!(grid.cells().iter().all(|&c| c == face.home_color()));
            }
        }
    }

    #[test]
    fn try_initial_rejects_bad_sizes() {
        assert!(CubeState::try_initial(0).is_err());
        assert!(CubeState::try_initial(10).is_err());
    }

    #[test]
    #[should_panic(expected = "Unsupported cube size")]
    fn initial_panics_on_programmer_error() {
        let _ = CubeState::initial(1);
    }

    #[test]
    fn with_face_returns_new_value() {
        let cube = CubeState::initial(3);
        let grid = FaceGrid::solid(3, Color::Red);
        let edited = cube.with_face(Face::Up, grid.clone()).unwrap();

        assert_eq!(edited.face(Face::Up), &grid);
        assert_eq!(cube.face(Face::Up), &FaceGrid::solid(3, Color::White));
    }

    #[test]
    fn with_face_rejects_wrong_size() {
        let cube = CubeState::initial(3);
        let err = cube
            .with_face(Face::Up, FaceGrid::solid(2, Color::White))
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::GridLength {
                expected: 9,
                actual: 4
            }
        );
    }

    #[test]
    fn from_faces_checks_every_grid() {
        let mut faces = Face::ALL.map(|f| FaceGrid::solid(3, f.home_color()));
        faces[2] = FaceGrid::solid(4, Color::Green);
        assert!(matches!(
            CubeState::from_faces(3, faces),
            Err(ModelError::SizeMismatch {
                expected: 3,
                actual: 4
            })
        ));
    }

    #[test]
    fn color_counts_cover_all_stickers() {
        let cube = CubeState::initial(4);
        assert_eq!(cube.color_counts(), [16; 6]);
        assert_eq!(cube.count(Color::Orange), 16);
    }

    #[test]
    fn solved_ignores_which_color_sits_where() {
        let cube = CubeState::initial(2)
            .with_face(Face::Up, FaceGrid::solid(2, Color::Red))
            .unwrap();
        assert!(cube.is_solved());

        let scrambled = cube
            .with_face(
                Face::Up,
                FaceGrid::solid(2, Color::Red).with_cell(0, 0, Color::Blue).unwrap(),
            )
            .unwrap();
        assert!(!scrambled.is_solved());
    }
}
