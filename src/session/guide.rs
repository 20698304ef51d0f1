//! Step-by-step walk through a solver's answer.

use crate::exchange::{SolveStep, SolverResponse};
use crate::notation::parse_token;
use crate::session::error::SessionError;
use crate::session::machine::Session;
use crate::turn::{invert_sequence, Move};
use log::debug;

/// Cursor over solution steps that drives a [`Session`] forwards and back.
///
/// Every step is expanded into moves up front, so stepping can only fail
/// if the session's cube size changes underneath it.
#[derive(Clone, Debug)]
pub struct Guide {
    steps: Vec<SolveStep>,
    moves: Vec<Vec<Move>>,
    cursor: usize,
}

impl Guide {
    pub fn new(steps: Vec<SolveStep>, size: usize) -> Result<Self, SessionError> {
        let moves = steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                parse_token(&step.notation)
                    .and_then(|token| token.moves(size))
                    .map_err(|source| SessionError::InvalidStep {
                        index,
                        notation: step.notation.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            steps,
            moves,
            cursor: 0,
        })
    }

    pub fn from_response(response: SolverResponse, size: usize) -> Result<Self, SessionError> {
        Self::new(response.steps, size)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the next step to perform.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// The next step to perform, or `None` once finished.
    pub fn current(&self) -> Option<&SolveStep> {
        self.steps.get(self.cursor)
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.steps.len()
    }

    /// Perform the current step on `session` and move to the next one.
    pub fn advance(&mut self, session: &mut Session) -> Result<Option<&SolveStep>, SessionError> {
        let Some(moves) = self.moves.get(self.cursor) else {
            return Ok(None);
        };
        for &mv in moves {
            session.apply(mv)?;
        }
        self.cursor += 1;
        debug!("guide at step {}/{}", self.cursor, self.steps.len());
        Ok(self.steps.get(self.cursor - 1))
    }

    /// Undo the previous step on `session` and move the cursor back to it.
    pub fn back(&mut self, session: &mut Session) -> Result<Option<&SolveStep>, SessionError> {
        if self.cursor == 0 {
            return Ok(None);
        }
        for mv in invert_sequence(&self.moves[self.cursor - 1]) {
            session.apply(mv)?;
        }
        self.cursor -= 1;
        debug!("guide back to step {}/{}", self.cursor, self.steps.len());
        Ok(self.steps.get(self.cursor))
    }
}
