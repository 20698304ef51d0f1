//! Move history tracking.
//!
//! Provides immutable tracking of the moves applied to a cube over time,
//! following functional programming principles.

use crate::turn::Move;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied move.
///
/// # Example
///
/// ```rust
/// use cubist::core::{Face, MoveRecord};
/// use cubist::turn::Move;
/// use chrono::Utc;
///
/// let record = MoveRecord {
///     mv: Move::new(Face::Right, true),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.mv.to_string(), "R");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The move that was applied
    pub mv: Move,
    /// When it was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of applied moves.
///
/// History is immutable - the `record` method returns a new history
/// with the move added.
///
/// # Example
///
/// ```rust
/// use cubist::core::{Face, MoveHistory, MoveRecord};
/// use cubist::turn::Move;
/// use chrono::Utc;
///
/// let history = MoveHistory::new();
/// let history = history.record(MoveRecord {
///     mv: Move::new(Face::Up, false),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.len(), 1);
/// assert_eq!(history.undo_sequence(), vec![Move::new(Face::Up, true)]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a move, returning a new history. The receiver is unchanged.
    pub fn record(&self, record: MoveRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Record several moves at once, copying the existing records only once.
    pub fn record_all(&self, records: impl IntoIterator<Item = MoveRecord>) -> Self {
        let mut all = self.records.clone();
        all.extend(records);
        Self { records: all }
    }

    /// Split off the most recent record, returning the shorter history.
    ///
    /// Returns `None` if there is nothing to remove.
    pub fn rewind(&self) -> Option<(Self, MoveRecord)> {
        let (last, rest) = self.records.split_last()?;
        Some((
            Self {
                records: rest.to_vec(),
            },
            last.clone(),
        ))
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The moves in the order they were applied.
    pub fn moves(&self) -> Vec<Move> {
        self.records.iter().map(|r| r.mv).collect()
    }

    /// Moves that take the cube back to where the history started.
    pub fn undo_sequence(&self) -> Vec<Move> {
        self.records.iter().rev().map(|r| r.mv.inverse()).collect()
    }

    /// Time between the first and last recorded move.
    ///
    /// Returns `None` if there are no moves.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
