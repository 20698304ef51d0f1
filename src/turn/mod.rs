//! Turn transform engine.
//!
//! A turn is a pure function from one [`CubeState`](crate::core::CubeState)
//! to the next:
//! - the turning face's grid rotates a quarter turn in place
//! - the four strips around it advance one step along the face's ring
//!
//! Both directions are driven by the same static adjacency table in
//! [`topology`]; counter-clockwise turns read the ring backwards.

mod moves;
pub mod topology;
mod transform;

pub use moves::{apply_move, apply_moves, invert_sequence, Move};
pub use topology::{neighbor, ring, Axis, Edge, Strip};
pub use transform::{turn, turn_layers};
