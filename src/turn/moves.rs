//! Moves and move sequences.

use super::transform::turn_layers;
use crate::core::{CubeState, Face, ModelError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single quarter turn of a face, optionally taking inner slices with it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Move {
    pub face: Face,
    pub clockwise: bool,
    /// Number of layers turned, counting the face itself.
    pub layers: usize,
}

impl Move {
    /// Outer-layer quarter turn.
    pub fn new(face: Face, clockwise: bool) -> Self {
        Self {
            face,
            clockwise,
            layers: 1,
        }
    }

    /// Wide quarter turn covering `layers` layers.
    pub fn wide(face: Face, clockwise: bool, layers: usize) -> Self {
        Self {
            face,
            clockwise,
            layers,
        }
    }

    pub fn inverse(self) -> Self {
        Self {
            clockwise: !self.clockwise,
            ..self
        }
    }

    pub fn is_wide(self) -> bool {
        self.layers > 1
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.layers > 2 {
            write!(f, "{}", self.layers)?;
        }
        write!(f, "{}", self.face.letter())?;
        if self.is_wide() {
            f.write_str("w")?;
        }
        if !self.clockwise {
            f.write_str("'")?;
        }
        Ok(())
    }
}

/// Apply one move.
///
/// Fails only when a wide move asks for more layers than the cube allows.
pub fn apply_move(state: &CubeState, mv: Move) -> Result<CubeState, ModelError> {
    turn_layers(state, mv.face, mv.clockwise, mv.layers)
}

/// Apply moves strictly in order, each to the result of the previous one.
///
/// # Example
///
/// ```rust
/// use cubist::core::{CubeState, Face};
/// use cubist::turn::{apply_moves, Move};
///
/// let cube = CubeState::initial(3);
/// let sexy = [
///     Move::new(Face::Right, true),
///     Move::new(Face::Up, true),
///     Move::new(Face::Right, false),
///     Move::new(Face::Up, false),
/// ];
/// let mut state = cube.clone();
/// for _ in 0..6 {
///     state = apply_moves(&state, &sexy).unwrap();
/// }
/// assert_eq!(state, cube);
/// ```
pub fn apply_moves(state: &CubeState, moves: &[Move]) -> Result<CubeState, ModelError> {
    moves
        .iter()
        .try_fold(state.clone(), |current, &mv| apply_move(&current, mv))
}

/// Moves that undo `moves`.
pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|mv| mv.inverse()).collect()
}
