//! Replay of recorded games.
//!
//! A cursor steps through a move-record sequence, reconstructing board state
//! on an initially empty board. The random initial setup is not replayed;
//! piece identity comes from the records themselves, so a replayed position
//! shows exactly the pieces that have moved, with captures absent. Records
//! round-trip through JSON in the same array shape the game writes.

use thiserror::Error;

use crate::board::{Board, MoveRecord, Piece};

/// Errors loading a persisted history.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("malformed replay: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses a JSON history into move records.
pub fn parse_records(json: &str) -> Result<Vec<MoveRecord>, ReplayError> {
    Ok(serde_json::from_str(json)?)
}

/// Serializes move records to the JSON history format.
pub fn records_to_json(records: &[MoveRecord]) -> Result<String, ReplayError> {
    Ok(serde_json::to_string(records)?)
}

/// A stepping reconstruction of board state from a record sequence.
///
/// `step` counts the records applied so far and stays in `[0, len]`.
/// Stepping past either end is a no-op.
pub struct ReplayCursor {
    records: Vec<MoveRecord>,
    step: usize,
    board: Board,
}

impl ReplayCursor {
    /// Creates a cursor at step 0 over the given records.
    pub fn new(records: Vec<MoveRecord>) -> ReplayCursor {
        ReplayCursor {
            records,
            step: 0,
            board: Board::empty(),
        }
    }

    /// Creates a cursor from a persisted JSON history.
    pub fn from_json(json: &str) -> Result<ReplayCursor, ReplayError> {
        Ok(ReplayCursor::new(parse_records(json)?))
    }

    /// The reconstructed board at the current step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Records applied so far.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Applies the next record, if any. Returns whether the cursor moved.
    pub fn step_forward(&mut self) -> bool {
        let record = match self.records.get(self.step) {
            Some(r) => *r,
            None => return false,
        };
        apply(&mut self.board, record);
        self.step += 1;
        true
    }

    /// Steps back one record, if any. Returns whether the cursor moved.
    ///
    /// The board is rebuilt from scratch by replaying the remaining prefix;
    /// histories are small enough that incremental undo is not worth it.
    pub fn step_backward(&mut self) -> bool {
        if self.step == 0 {
            return false;
        }
        self.step -= 1;
        self.board = Board::empty();
        for i in 0..self.step {
            let record = self.records[i];
            apply(&mut self.board, record);
        }
        true
    }
}

/// Applies one record: clear the source, place the moved piece at the
/// destination. The capture fields are informational; a captured piece simply
/// disappears by being overwritten.
fn apply(board: &mut Board, record: MoveRecord) {
    board.take(record.from);
    board.set(
        record.to,
        Some(Piece::new(record.moved_owner, record.moved_kind)),
    );
}
