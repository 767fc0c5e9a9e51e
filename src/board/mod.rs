//! Board representation and game-state types.
//!
//! Contains the core data structures for squares, pieces, the grid itself,
//! and the move records that make up a game history.

pub mod piece;
pub mod record;
pub mod square;
pub mod state;

pub use piece::{Kind, Piece, Player};
pub use record::{MoveRecord, RecordError};
pub use square::{Square, BOARD_SIZE, CELL_COUNT};
pub use state::Board;
