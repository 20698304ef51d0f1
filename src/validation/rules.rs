//! Sticker-count validation for whole cubes.

use crate::core::{Color, CubeState};
use crate::validation::mismatch::ColorMismatch;
use crate::validation::violations::ScanViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Report every color whose total differs from `size * size`.
///
/// An empty result means the counts are consistent. Colors are listed in
/// palette order.
///
/// # Example
///
/// ```rust
/// use cubist::core::{Color, CubeState, Face};
/// use cubist::validation::validate;
///
/// let cube = CubeState::initial(3);
/// assert!(validate(&cube).is_empty());
///
/// let up = cube.face(Face::Up).with_cell(0, 0, Color::Red).unwrap();
/// let broken = cube.with_face(Face::Up, up).unwrap();
/// let deltas: Vec<_> = validate(&broken).iter().map(|m| (m.color, m.delta())).collect();
/// assert_eq!(deltas, vec![(Color::White, -1), (Color::Red, 1)]);
/// ```
pub fn validate(state: &CubeState) -> Vec<ColorMismatch> {
    let expected = state.size() * state.size();
    let counts = state.color_counts();
    Color::ALL
        .into_iter()
        .zip(counts)
        .filter(|&(_, actual)| actual != expected)
        .map(|(color, actual)| ColorMismatch {
            color,
            expected,
            actual,
        })
        .collect()
}

/// [`validate`] as an accumulating check, one violation per mismatch.
pub fn check_counts(state: &CubeState) -> Validation<(), NonEmptyVec<ScanViolation>> {
    let checks: Vec<Validation<(), NonEmptyVec<ScanViolation>>> = validate(state)
        .into_iter()
        .map(|mismatch| Validation::fail(ScanViolation::ColorCount(mismatch)))
        .collect();

    if checks.is_empty() {
        return Validation::success(());
    }
    Validation::all_vec(checks).map(|_| ())
}
