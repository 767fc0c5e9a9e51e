//! The board grid.
//!
//! Holds at most one piece per cell in a flat row-major array indexed by
//! `Square::index()`. The board owns every piece; engine operations mutate it
//! in place through the accessors here.

use std::fmt;

use super::piece::{Piece, Player};
use super::square::{Square, BOARD_SIZE, CELL_COUNT};

/// The game board: one optional piece per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn empty() -> Board {
        Board {
            cells: [None; CELL_COUNT],
        }
    }

    /// Returns the piece at a square, if any.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    /// Places a piece on an empty square. Returns false if the square is
    /// already occupied.
    pub fn place(&mut self, square: Square, piece: Piece) -> bool {
        let cell = &mut self.cells[square.index()];
        if cell.is_some() {
            return false;
        }
        *cell = Some(piece);
        true
    }

    /// Removes and returns the piece at a square.
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.index()].take()
    }

    /// Overwrites a cell, returning whatever it held.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.cells[square.index()], piece)
    }

    /// Iterates over every occupied square with its piece, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Counts the live pieces owned by a player.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|p| p.owner == player)
            .count()
    }
}

impl fmt::Display for Board {
    /// Renders the grid with `K1`/`K2` cells (kind letter plus owner number)
    /// and `..` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {:2}", col)?;
        }
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            write!(f, "{:2}", row)?;
            for col in 0..BOARD_SIZE {
                let sq = Square::new(row, col).expect("row/col in range");
                match self.piece_at(sq) {
                    Some(p) => write!(f, " {}{}", p.kind.letter(), p.owner.number())?,
                    None => write!(f, " ..")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::Kind;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn empty_board_has_no_pieces() {
        let board = Board::empty();
        assert!(Square::all().all(|s| board.piece_at(s).is_none()));
        assert_eq!(board.count(Player::One), 0);
        assert_eq!(board.count(Player::Two), 0);
    }

    #[test]
    fn place_and_read_back() {
        let mut board = Board::empty();
        let piece = Piece::new(Player::One, Kind::H);
        assert!(board.place(sq(4, 4), piece));
        assert_eq!(board.piece_at(sq(4, 4)), Some(piece));
        assert_eq!(board.count(Player::One), 1);
    }

    #[test]
    fn place_rejects_occupied() {
        let mut board = Board::empty();
        assert!(board.place(sq(0, 0), Piece::new(Player::One, Kind::D)));
        assert!(!board.place(sq(0, 0), Piece::new(Player::Two, Kind::F)));
        assert_eq!(board.piece_at(sq(0, 0)).unwrap().owner, Player::One);
    }

    #[test]
    fn take_clears_the_cell() {
        let mut board = Board::empty();
        let piece = Piece::new(Player::Two, Kind::J);
        board.place(sq(1, 7), piece);
        assert_eq!(board.take(sq(1, 7)), Some(piece));
        assert_eq!(board.piece_at(sq(1, 7)), None);
        assert_eq!(board.take(sq(1, 7)), None);
    }

    #[test]
    fn set_returns_previous_occupant() {
        let mut board = Board::empty();
        let first = Piece::new(Player::One, Kind::W);
        let second = Piece::new(Player::Two, Kind::S);
        assert_eq!(board.set(sq(3, 3), Some(first)), None);
        assert_eq!(board.set(sq(3, 3), Some(second)), Some(first));
        assert_eq!(board.piece_at(sq(3, 3)), Some(second));
    }

    #[test]
    fn occupied_lists_all_pieces() {
        let mut board = Board::empty();
        board.place(sq(0, 0), Piece::new(Player::Two, Kind::D));
        board.place(sq(8, 8), Piece::new(Player::One, Kind::F));
        let occupied: Vec<(Square, Piece)> = board.occupied().collect();
        assert_eq!(occupied.len(), 2);
        assert_eq!(occupied[0].0, sq(0, 0));
        assert_eq!(occupied[1].0, sq(8, 8));
    }

    #[test]
    fn display_marks_pieces_and_empties() {
        let mut board = Board::empty();
        board.place(sq(0, 1), Piece::new(Player::Two, Kind::J));
        let text = board.to_string();
        assert!(text.contains("J2"));
        assert!(text.contains(".."));
    }
}
