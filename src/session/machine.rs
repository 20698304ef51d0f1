//! Session holding the live cube.

use crate::core::{CubeState, Face, MoveHistory, MoveRecord};
use crate::exchange::SolveStep;
use crate::notation::{expand, parse_token};
use crate::session::error::SessionError;
use crate::turn::{apply_move, apply_moves, Move};
use chrono::Utc;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Result of pressing a move control
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressResult {
    /// First press: the move is pending and waits for confirmation
    Armed(Move),

    /// Second press of the same move: it was applied
    Committed(Move),
}

/// Swipe gesture on the cube view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Swipe {
    Up,
    Down,
    Left,
    Right,
}

impl Swipe {
    /// Horizontal swipes drive the top layer, vertical ones the right layer.
    pub fn to_move(self) -> Move {
        match self {
            Swipe::Left => Move::new(Face::Up, true),
            Swipe::Right => Move::new(Face::Up, false),
            Swipe::Up => Move::new(Face::Right, true),
            Swipe::Down => Move::new(Face::Right, false),
        }
    }
}

/// Outcome of replaying a solver's steps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplayReport {
    /// Quarter turns applied
    pub applied: usize,

    /// Indices of `FIX` steps, which need manual correction
    pub fixes: Vec<usize>,
}

impl ReplayReport {
    pub fn needs_fix(&self) -> bool {
        !self.fixes.is_empty()
    }
}

/// The cube an application is currently showing, plus how it got there.
///
/// Every mutation replaces the held [`CubeState`] with a new value produced
/// by the pure engine; nothing is edited in place.
///
/// # Example
///
/// ```rust
/// use cubist::core::Face;
/// use cubist::session::{PressResult, Session};
/// use cubist::turn::Move;
///
/// let mut session = Session::new(3).unwrap();
/// let r = Move::new(Face::Right, true);
///
/// assert_eq!(session.press(r).unwrap(), PressResult::Armed(r));
/// assert!(session.state().is_solved());
///
/// assert_eq!(session.press(r).unwrap(), PressResult::Committed(r));
/// assert!(!session.state().is_solved());
/// assert_eq!(session.history().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    initial: CubeState,
    state: CubeState,
    history: MoveHistory,
    pending: Option<Move>,
    redo: Vec<Move>,
}

impl Session {
    /// Start from a solved cube of the given size.
    pub fn new(size: usize) -> Result<Self, SessionError> {
        Ok(Self::from_state(CubeState::try_initial(size)?))
    }

    /// Start from an already assembled cube, e.g. a validated scan.
    pub fn from_state(state: CubeState) -> Self {
        Self {
            initial: state.clone(),
            state,
            history: MoveHistory::new(),
            pending: None,
            redo: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.state.size()
    }

    /// Current cube (pure)
    pub fn state(&self) -> &CubeState {
        &self.state
    }

    /// Cube the session started from (pure)
    pub fn initial(&self) -> &CubeState {
        &self.initial
    }

    /// Moves applied so far (pure)
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Move waiting for confirmation, if any (pure)
    pub fn pending(&self) -> Option<Move> {
        self.pending
    }

    /// Press a move control.
    ///
    /// The first press arms the move; pressing the same move again commits
    /// it. Pressing a different move re-arms with that move instead.
    pub fn press(&mut self, mv: Move) -> Result<PressResult, SessionError> {
        if self.pending == Some(mv) {
            self.apply(mv)?;
            return Ok(PressResult::Committed(mv));
        }
        trace!("armed {mv}");
        self.pending = Some(mv);
        Ok(PressResult::Armed(mv))
    }

    /// Drop the pending move without applying it.
    pub fn cancel(&mut self) -> Option<Move> {
        self.pending.take()
    }

    /// Apply a move immediately, clearing any pending move.
    ///
    /// A fresh move discards whatever could have been redone.
    pub fn apply(&mut self, mv: Move) -> Result<(), SessionError> {
        let next = apply_move(&self.state, mv)?;
        self.commit(next, mv);
        self.pending = None;
        self.redo.clear();
        Ok(())
    }

    /// Apply the move a swipe maps to. Swipes skip confirmation.
    pub fn swipe(&mut self, swipe: Swipe) -> Result<Move, SessionError> {
        let mv = swipe.to_move();
        self.apply(mv)?;
        Ok(mv)
    }

    /// Apply a whitespace-separated notation sequence such as `"R U R' U'"`.
    ///
    /// Returns the number of quarter turns applied. Nothing is applied if
    /// any token is malformed.
    pub fn play(&mut self, text: &str) -> Result<usize, SessionError> {
        let moves = expand(text, self.size())?;
        let next = apply_moves(&self.state, &moves)?;
        self.commit_batch(next, &moves);
        debug!("played '{}' ({} turn(s))", text.trim(), moves.len());
        Ok(moves.len())
    }

    /// Apply every step in order.
    ///
    /// All steps are parsed and applied against a working copy first, so a
    /// bad step leaves the session untouched.
    pub fn replay(&mut self, steps: &[SolveStep]) -> Result<ReplayReport, SessionError> {
        let size = self.size();
        let mut state = self.state.clone();
        let mut applied = Vec::new();
        let mut report = ReplayReport::default();

        for (index, step) in steps.iter().enumerate() {
            let moves = parse_token(&step.notation)
                .and_then(|token| {
                    if token.is_fix() {
                        report.fixes.push(index);
                    }
                    token.moves(size)
                })
                .map_err(|source| SessionError::InvalidStep {
                    index,
                    notation: step.notation.clone(),
                    source,
                })?;

            for mv in moves {
                state = apply_move(&state, mv)?;
                applied.push(mv);
            }
        }

        report.applied = applied.len();
        self.commit_batch(state, &applied);
        debug!(
            "replayed {} step(s): {} turn(s), {} fix(es)",
            steps.len(),
            report.applied,
            report.fixes.len()
        );
        Ok(report)
    }

    /// Take back the most recent move and return it.
    ///
    /// Repeated calls walk back through the history one move at a time.
    /// Undone moves can be reapplied with [`Session::redo`] until a new move
    /// is applied.
    pub fn undo(&mut self) -> Result<Option<Move>, SessionError> {
        let Some((history, last)) = self.history.rewind() else {
            return Ok(None);
        };
        self.state = apply_move(&self.state, last.mv.inverse())?;
        self.history = history;
        self.pending = None;
        self.redo.push(last.mv);
        debug!("undid {}", last.mv);
        Ok(Some(last.mv))
    }

    /// Reapply the most recently undone move.
    pub fn redo(&mut self) -> Result<Option<Move>, SessionError> {
        let Some(&mv) = self.redo.last() else {
            return Ok(None);
        };
        let next = apply_move(&self.state, mv)?;
        self.redo.pop();
        self.commit(next, mv);
        self.pending = None;
        Ok(Some(mv))
    }

    /// Moves that [`Session::redo`] would reapply, most recent last.
    pub fn redoable(&self) -> &[Move] {
        &self.redo
    }

    /// Return to the starting cube and forget all moves.
    pub fn reset(&mut self) {
        debug!("session reset after {} move(s)", self.history.len());
        self.state = self.initial.clone();
        self.history = MoveHistory::new();
        self.pending = None;
        self.redo.clear();
    }

    fn commit(&mut self, next: CubeState, mv: Move) {
        debug!("applied {mv}");
        self.history = self.history.record(MoveRecord {
            mv,
            timestamp: Utc::now(),
        });
        self.state = next;
    }

    fn commit_batch(&mut self, next: CubeState, moves: &[Move]) {
        let timestamp = Utc::now();
        self.history = self
            .history
            .record_all(moves.iter().map(|&mv| MoveRecord { mv, timestamp }));
        self.state = next;
        self.pending = None;
        self.redo.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, ModelError};
    use crate::notation::NotationError;
    use crate::turn::{apply_moves, turn};

    fn r() -> Move {
        Move::new(Face::Right, true)
    }

    #[test_log::test]
    fn press_arms_then_commits() {
        let mut session = Session::new(3).unwrap();

        assert_eq!(session.press(r()).unwrap(), PressResult::Armed(r()));
        assert_eq!(session.pending(), Some(r()));
        assert!(session.history().is_empty());

        assert_eq!(session.press(r()).unwrap(), PressResult::Committed(r()));
        assert_eq!(session.pending(), None);
        assert_eq!(session.state(), &turn(&CubeState::initial(3), Face::Right, true));
    }

    #[test]
    fn pressing_another_move_rearms() {
        let mut session = Session::new(3).unwrap();
        let r_prime = r().inverse();

        session.press(r()).unwrap();
        assert_eq!(session.press(r_prime).unwrap(), PressResult::Armed(r_prime));
        assert_eq!(session.pending(), Some(r_prime));
        assert!(session.state().is_solved());
    }

    #[test]
    fn cancel_clears_pending() {
        let mut session = Session::new(2).unwrap();
        session.press(r()).unwrap();
        assert_eq!(session.cancel(), Some(r()));
        assert_eq!(session.pending(), None);
        assert_eq!(session.press(r()).unwrap(), PressResult::Armed(r()));
    }

    #[test]
    fn swipes_map_to_top_and_right_layers() {
        assert_eq!(Swipe::Left.to_move(), Move::new(Face::Up, true));
        assert_eq!(Swipe::Right.to_move(), Move::new(Face::Up, false));
        assert_eq!(Swipe::Up.to_move(), Move::new(Face::Right, true));
        assert_eq!(Swipe::Down.to_move(), Move::new(Face::Right, false));
    }

    #[test]
    fn swipe_applies_without_confirmation_and_clears_pending() {
        let mut session = Session::new(3).unwrap();
        session.press(Move::new(Face::Front, true)).unwrap();

        let mv = session.swipe(Swipe::Up).unwrap();
        assert_eq!(mv, r());
        assert_eq!(session.pending(), None);
        assert_eq!(session.history().moves(), vec![r()]);
    }

    #[test]
    fn wide_move_too_large_is_rejected() {
        let mut session = Session::new(3).unwrap();
        let err = session.apply(Move::wide(Face::Right, true, 3)).unwrap_err();
        assert!(matches!(err, SessionError::Model(ModelError::InvalidLayers { .. })));
        assert!(session.history().is_empty());
    }

    #[test_log::test]
    fn replay_applies_steps_in_order() {
        let mut session = Session::new(3).unwrap();
        let steps = [
            SolveStep::new("R", "Right up"),
            SolveStep::new("U2", "Top half turn"),
            SolveStep::new("FIX", "Flip an edge"),
            SolveStep::new("F'", "Front back"),
        ];

        let report = session.replay(&steps).unwrap();
        assert_eq!(report.applied, 4);
        assert_eq!(report.fixes, vec![2]);
        assert!(report.needs_fix());

        let expected = apply_moves(
            &CubeState::initial(3),
            &[
                r(),
                Move::new(Face::Up, true),
                Move::new(Face::Up, true),
                Move::new(Face::Front, false),
            ],
        )
        .unwrap();
        assert_eq!(session.state(), &expected);
        assert_eq!(session.history().len(), 4);
    }

    #[test]
    fn replay_with_bad_step_leaves_session_untouched() {
        let mut session = Session::new(3).unwrap();
        session.apply(r()).unwrap();
        let before = session.state().clone();

        let steps = [SolveStep::new("U", "ok"), SolveStep::new("Q2", "bad")];
        let err = session.replay(&steps).unwrap_err();

        assert!(matches!(
            err,
            SessionError::InvalidStep {
                index: 1,
                source: NotationError::UnknownFace(_),
                ..
            }
        ));
        assert_eq!(session.state(), &before);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn replay_rejects_wide_step_on_small_cube() {
        let mut session = Session::new(2).unwrap();
        let err = session.replay(&[SolveStep::new("Rw", "")]).unwrap_err();
        assert!(matches!(
            err,
            SessionError::InvalidStep {
                source: NotationError::WideOnSmallCube { size: 2, .. },
                ..
            }
        ));
    }

    #[test]
    fn play_applies_notation_text() {
        let mut session = Session::new(3).unwrap();
        assert_eq!(session.play("R U R' U'").unwrap(), 4);
        assert!(!session.state().is_solved());
        for _ in 0..5 {
            session.play("R U R' U'").unwrap();
        }
        assert!(session.state().is_solved());
        assert_eq!(session.history().len(), 24);
    }

    #[test]
    fn play_rejects_malformed_text_atomically() {
        let mut session = Session::new(3).unwrap();
        let err = session.play("R U X").unwrap_err();
        assert!(matches!(err, SessionError::Notation(NotationError::UnknownFace(_))));
        assert!(session.history().is_empty());
    }

    #[test]
    fn undo_restores_previous_state() {
        let mut session = Session::new(4).unwrap();
        let mv = Move::wide(Face::Front, false, 2);
        session.apply(mv).unwrap();
        assert_eq!(session.undo().unwrap(), Some(mv));
        assert!(session.state().is_solved());
        assert!(session.history().is_empty());
        assert_eq!(session.redoable(), &[mv]);
    }

    #[test_log::test]
    fn repeated_undo_walks_back_through_history() {
        let mut session = Session::new(3).unwrap();
        let up = Move::new(Face::Up, true);
        session.apply(r()).unwrap();
        session.apply(up).unwrap();

        assert_eq!(session.undo().unwrap(), Some(up));
        assert_eq!(session.state(), &turn(&CubeState::initial(3), Face::Right, true));
        assert_eq!(session.history().moves(), vec![r()]);

        assert_eq!(session.undo().unwrap(), Some(r()));
        assert!(session.state().is_solved());
        assert!(session.history().is_empty());
        assert_eq!(session.undo().unwrap(), None);
    }

    #[test]
    fn redo_reapplies_undone_moves_in_order() {
        let mut session = Session::new(3).unwrap();
        let up = Move::new(Face::Up, true);
        session.play("R U").unwrap();
        let played = session.state().clone();
        session.undo().unwrap();
        session.undo().unwrap();

        assert_eq!(session.redo().unwrap(), Some(r()));
        assert_eq!(session.redo().unwrap(), Some(up));
        assert_eq!(session.redo().unwrap(), None);
        assert_eq!(session.state(), &played);
        assert_eq!(session.history().moves(), vec![r(), up]);
    }

    #[test]
    fn new_move_discards_redo() {
        let mut session = Session::new(3).unwrap();
        session.apply(r()).unwrap();
        session.undo().unwrap();
        session.swipe(Swipe::Left).unwrap();
        assert!(session.redoable().is_empty());
        assert_eq!(session.redo().unwrap(), None);
    }

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let mut session = Session::new(2).unwrap();
        assert_eq!(session.undo().unwrap(), None);
    }

    #[test]
    fn reset_returns_to_starting_cube() {
        let scrambled = turn(&CubeState::initial(3), Face::Left, true);
        let mut session = Session::from_state(scrambled.clone());
        session.swipe(Swipe::Left).unwrap();
        session.press(r()).unwrap();

        session.reset();
        assert_eq!(session.state(), &scrambled);
        assert_eq!(session.initial(), &scrambled);
        assert!(session.history().is_empty());
        assert_eq!(session.pending(), None);
    }

    #[test]
    fn new_rejects_unsupported_size() {
        assert!(matches!(
            Session::new(1),
            Err(SessionError::Model(ModelError::UnsupportedSize { .. }))
        ));
    }

    #[test]
    fn colors_are_conserved_across_session_moves() {
        let mut session = Session::new(3).unwrap();
        for swipe in [Swipe::Up, Swipe::Left, Swipe::Down, Swipe::Right] {
            session.swipe(swipe).unwrap();
        }
        for color in Color::ALL {
            assert_eq!(session.state().count(color), 9);
        }
    }
}
