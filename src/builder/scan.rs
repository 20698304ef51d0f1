//! Builder for assembling a cube from scanned faces.

use crate::builder::error::BuildError;
use crate::core::{check_size, Color, CubeState, Face, FaceGrid, ModelError, Sticker, SCAN_ORDER};
use crate::validation::{check_counts, ScanViolation};
use log::{debug, warn};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Collects one grid per face, in scan order, and produces a [`CubeState`]
/// once everything checks out.
///
/// # Example
///
/// ```rust
/// use cubist::builder::ScanBuilder;
/// use cubist::core::{CubeState, Sticker, SCAN_ORDER};
///
/// let solved = CubeState::initial(2);
/// let mut builder = ScanBuilder::new(2).unwrap();
/// for face in SCAN_ORDER {
///     let stickers = solved.face(face).cells().iter().map(|&c| Sticker::Known(c)).collect();
///     builder = builder.capture(stickers).unwrap();
/// }
/// assert_eq!(builder.build().unwrap(), solved);
/// ```
#[derive(Clone, Debug)]
pub struct ScanBuilder {
    size: usize,
    grids: [Option<Vec<Sticker>>; 6],
    cursor: usize,
}

impl ScanBuilder {
    /// Start a scan for a cube of the given size.
    pub fn new(size: usize) -> Result<Self, BuildError> {
        check_size(size)?;
        Ok(Self {
            size,
            grids: Default::default(),
            cursor: 0,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The face the scanner should capture next, if any remain.
    pub fn current_face(&self) -> Option<Face> {
        SCAN_ORDER.get(self.cursor).copied()
    }

    /// Stickers captured so far for `face`.
    pub fn stickers(&self, face: Face) -> Option<&[Sticker]> {
        self.grids[face.index()].as_deref()
    }

    /// Capture the next face in scan order.
    pub fn capture(mut self, stickers: Vec<Sticker>) -> Result<Self, BuildError> {
        let face = self.current_face().ok_or(BuildError::ScanComplete)?;
        self = self.capture_face(face, stickers)?;
        self.cursor += 1;
        Ok(self)
    }

    /// Capture (or recapture) a specific face without moving the cursor.
    pub fn capture_face(mut self, face: Face, stickers: Vec<Sticker>) -> Result<Self, BuildError> {
        let expected = self.size * self.size;
        if stickers.len() != expected {
            return Err(ModelError::GridLength {
                expected,
                actual: stickers.len(),
            }
            .into());
        }
        debug!(
            "captured face {} ({} unknown)",
            face,
            stickers.iter().filter(|s| !s.is_known()).count()
        );
        self.grids[face.index()] = Some(stickers);
        Ok(self)
    }

    /// Manually set one sticker of an already captured face.
    pub fn paint(
        mut self,
        face: Face,
        row: usize,
        col: usize,
        color: Color,
    ) -> Result<Self, BuildError> {
        let size = self.size;
        if row >= size || col >= size {
            return Err(ModelError::OutOfBounds { row, col, size }.into());
        }
        let grid = self.grids[face.index()]
            .as_mut()
            .ok_or(BuildError::FaceNotScanned(face))?;
        grid[row * size + col] = Sticker::Known(color);
        Ok(self)
    }

    /// All faces captured and every sticker classified.
    pub fn is_complete(&self) -> bool {
        self.grids
            .iter()
            .all(|g| g.as_ref().is_some_and(|s| s.iter().all(|s| s.is_known())))
    }

    /// Check the scan, accumulating every problem found.
    ///
    /// Color counts are only checked once the scan is complete, since an
    /// unclassified sticker would show up as a count error too.
    pub fn check(&self) -> Validation<(), NonEmptyVec<ScanViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ScanViolation>>> = Vec::new();

        for face in SCAN_ORDER {
            let check = match &self.grids[face.index()] {
                None => Validation::fail(ScanViolation::MissingFace(face)),
                Some(stickers) => {
                    let count = stickers.iter().filter(|s| !s.is_known()).count();
                    if count > 0 {
                        Validation::fail(ScanViolation::UnknownStickers { face, count })
                    } else {
                        Validation::success(())
                    }
                }
            };
            checks.push(check);
        }

        if let Some(state) = self.assemble() {
            checks.push(check_counts(&state));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the cube, or report every reason it cannot be built yet.
    pub fn build(self) -> Result<CubeState, BuildError> {
        match (self.check(), self.assemble()) {
            (Validation::Success(_), Some(state)) => {
                debug!("scan accepted ({}x{})", self.size, self.size);
                Ok(state)
            }
            (Validation::Failure(errors), _) => {
                let violations: Vec<ScanViolation> = errors.iter().cloned().collect();
                warn!("scan rejected: {} problem(s)", violations.len());
                Err(BuildError::Rejected(violations))
            }
            (Validation::Success(_), None) => unreachable!("a passing scan always assembles"),
        }
    }

    fn assemble(&self) -> Option<CubeState> {
        let mut state = CubeState::initial(self.size);
        for face in Face::ALL {
            let colors = self.grids[face.index()]
                .as_ref()?
                .iter()
                .map(|s| s.color())
                .collect::<Option<Vec<Color>>>()?;
            let grid = FaceGrid::new(self.size, colors).ok()?;
            state = state.with_face(face, grid).ok()?;
        }
        Some(state)
    }
}
