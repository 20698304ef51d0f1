//! Quarter-turn transform.

use super::topology::ring;
use crate::core::{CubeState, Face, ModelError};

/// Turn one face a quarter turn and return the resulting state.
///
/// The input is never modified. Every sticker written to the result is read
/// from `state`, so strips written earlier in the turn cannot leak into
/// strips read later.
///
/// # Example
///
/// ```rust
/// use cubist::core::{Color, CubeState, Face};
/// use cubist::turn::turn;
///
/// let cube = CubeState::initial(3);
/// let turned = turn(&cube, Face::Right, true);
///
/// assert_eq!(turned.face(Face::Up).column(2).unwrap(), vec![Color::Green; 3]);
/// assert_eq!(turn(&turned, Face::Right, false), cube);
/// ```
pub fn turn(state: &CubeState, face: Face, clockwise: bool) -> CubeState {
    permute(state, face, clockwise, 1)
}

/// Turn `face` together with the `layers - 1` slices directly behind it.
///
/// `layers` must be at least one and, for wide turns, smaller than the cube
/// size; turning every layer would be a whole-cube rotation.
pub fn turn_layers(
    state: &CubeState,
    face: Face,
    clockwise: bool,
    layers: usize,
) -> Result<CubeState, ModelError> {
    let size = state.size();
    if layers == 0 || (layers > 1 && layers >= size) {
        return Err(ModelError::InvalidLayers { layers, size });
    }
    Ok(permute(state, face, clockwise, layers))
}

fn permute(state: &CubeState, face: Face, clockwise: bool, layers: usize) -> CubeState {
    let ring = ring(face);
    let mut next = state.clone();

    *next.face_mut(face) = state.face(face).rotated(clockwise);

    for depth in 0..layers {
        let strips = ring.map(|s| s.read(state.face(s.face), depth));
        for k in 0..4 {
            let (dst, src) = if clockwise {
                ((k + 1) % 4, k)
            } else {
                (k, (k + 1) % 4)
            };
            let target = &ring[dst];
            target.write(next.face_mut(target.face), depth, &strips[src]);
        }
    }

    next
}
