//! Move records.
//!
//! A record describes one applied move and any capture it caused. The game
//! history is an append-only sequence of these, and the replay cursor
//! reconstructs board state from them alone.
//!
//! On the wire a record is the 8-element JSON array
//! `[fromRow, fromCol, toRow, toCol, movedKind, movedOwner, capturedKind,
//! capturedOwner]` with both capture fields `null` for quiet moves. Logs
//! saved by earlier versions of the game use exactly this shape, so it is
//! kept stable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::piece::{Kind, Player};
use super::square::Square;

/// A completed move, never mutated after being appended to the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordWire", into = "RecordWire")]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub moved_kind: Kind,
    pub moved_owner: Player,
    pub captured_kind: Option<Kind>,
    pub captured_owner: Option<Player>,
}

impl MoveRecord {
    /// Returns true if this move captured a piece.
    pub fn is_capture(&self) -> bool {
        self.captured_kind.is_some()
    }
}

/// Errors validating a wire record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("square ({0}, {1}) is out of bounds")]
    OutOfBounds(u8, u8),

    #[error("unknown piece kind '{0}'")]
    UnknownKind(String),

    #[error("invalid player number {0}")]
    InvalidPlayer(u8),

    #[error("capture fields must both be present or both null")]
    HalfCapture,
}

/// The on-disk shape of a record.
type RecordWire = (u8, u8, u8, u8, String, u8, Option<String>, Option<u8>);

fn parse_square(row: u8, col: u8) -> Result<Square, RecordError> {
    Square::new(row as usize, col as usize).ok_or(RecordError::OutOfBounds(row, col))
}

fn parse_kind(s: &str) -> Result<Kind, RecordError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Kind::from_letter(c).ok_or_else(|| RecordError::UnknownKind(s.into())),
        _ => Err(RecordError::UnknownKind(s.into())),
    }
}

impl TryFrom<RecordWire> for MoveRecord {
    type Error = RecordError;

    fn try_from(wire: RecordWire) -> Result<MoveRecord, RecordError> {
        let (from_row, from_col, to_row, to_col, kind, owner, captured_kind, captured_owner) = wire;

        let (captured_kind, captured_owner) = match (captured_kind, captured_owner) {
            (Some(k), Some(o)) => (
                Some(parse_kind(&k)?),
                Some(Player::from_number(o).ok_or(RecordError::InvalidPlayer(o))?),
            ),
            (None, None) => (None, None),
            _ => return Err(RecordError::HalfCapture),
        };

        Ok(MoveRecord {
            from: parse_square(from_row, from_col)?,
            to: parse_square(to_row, to_col)?,
            moved_kind: parse_kind(&kind)?,
            moved_owner: Player::from_number(owner).ok_or(RecordError::InvalidPlayer(owner))?,
            captured_kind,
            captured_owner,
        })
    }
}

impl From<MoveRecord> for RecordWire {
    fn from(record: MoveRecord) -> RecordWire {
        (
            record.from.row() as u8,
            record.from.col() as u8,
            record.to.row() as u8,
            record.to.col() as u8,
            record.moved_kind.letter().to_string(),
            record.moved_owner.number(),
            record.captured_kind.map(|k| k.letter().to_string()),
            record.captured_owner.map(|p| p.number()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn quiet_move_json_roundtrip() {
        let record = MoveRecord {
            from: sq(6, 2),
            to: sq(5, 2),
            moved_kind: Kind::F,
            moved_owner: Player::One,
            captured_kind: None,
            captured_owner: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"[6,2,5,2,"F",1,null,null]"#);
        let back: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
        assert!(!back.is_capture());
    }

    #[test]
    fn capture_json_roundtrip() {
        let record = MoveRecord {
            from: sq(3, 3),
            to: sq(2, 4),
            moved_kind: Kind::D,
            moved_owner: Player::Two,
            captured_kind: Some(Kind::W),
            captured_owner: Some(Player::One),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"[3,3,2,4,"D",2,"W",1]"#);
        let back: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
        assert!(back.is_capture());
    }

    #[test]
    fn rejects_out_of_bounds_square() {
        let err = serde_json::from_str::<MoveRecord>(r#"[9,0,0,0,"F",1,null,null]"#);
        assert!(err.is_err());
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = serde_json::from_str::<MoveRecord>(r#"[0,0,1,1,"Q",1,null,null]"#);
        assert!(err.is_err());
    }

    #[test]
    fn rejects_invalid_player() {
        let err = serde_json::from_str::<MoveRecord>(r#"[0,0,1,1,"F",3,null,null]"#);
        assert!(err.is_err());
    }

    #[test]
    fn rejects_half_capture() {
        let err = serde_json::from_str::<MoveRecord>(r#"[0,0,1,1,"F",1,"D",null]"#);
        assert!(err.is_err());
    }
}
