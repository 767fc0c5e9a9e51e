//! Game orchestration.
//!
//! Holds the live board, the side to move, the pending selection, capture
//! bookkeeping, and the move history. A turn is a two-step protocol:
//! `select_square` computes and stores the legal move set for a piece, then
//! `apply_move` executes one of those moves, appends a record, and flips the
//! turn. Rejections never mutate the board or the turn.

use rand::Rng;
use thiserror::Error;

use crate::board::{Board, Kind, MoveRecord, Player, Square};
use crate::movegen::{forced_selectable, legal_destinations, special_targets};
use crate::setup;

/// Rejections of selection and move attempts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("the game is over, player {} won", .0.number())]
    GameOver(Player),

    #[error("must move a piece that can capture the opponent's W")]
    MustCaptureSpecial,

    #[error("selected piece has no forced-capture move")]
    NoForcedCapture,

    #[error("no piece is selected")]
    NoSelection,

    #[error("destination is not a legal move for the selected piece")]
    InvalidDestination,
}

/// Outcome of a successful `select_square` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A piece was selected; these are its legal destinations.
    Selected { square: Square, moves: Vec<Square> },
    /// The square was empty or held an opponent piece; any pending
    /// selection was cleared.
    Cleared,
}

/// Outcome of a successful `apply_move` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub record: MoveRecord,
    /// Set when this move ended the game.
    pub winner: Option<Player>,
}

/// A live game: board, turn state, selection, captures, and history.
pub struct Game {
    board: Board,
    turn: Player,
    pending: Option<(Square, Vec<Square>)>,
    captured_by_one: Vec<Kind>,
    captured_by_two: Vec<Kind>,
    history: Vec<MoveRecord>,
    winner: Option<Player>,
}

impl Game {
    /// Starts a new game with randomized initial placement. Player One moves
    /// first.
    pub fn new(rng: &mut impl Rng) -> Game {
        let mut board = Board::empty();
        setup::place_random(&mut board, rng);
        Game::from_board(board)
    }

    /// Starts a game from an arbitrary position with Player One to move.
    pub fn from_board(board: Board) -> Game {
        Game {
            board,
            turn: Player::One,
            pending: None,
            captured_by_one: Vec::new(),
            captured_by_two: Vec::new(),
            history: Vec::new(),
            winner: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    /// The winner, once decided.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The currently selected square and its legal destinations.
    pub fn selection(&self) -> Option<(Square, &[Square])> {
        self.pending
            .as_ref()
            .map(|(square, moves)| (*square, moves.as_slice()))
    }

    /// Kinds captured by the given player, in capture order.
    pub fn captured_by(&self, player: Player) -> &[Kind] {
        match player {
            Player::One => &self.captured_by_one,
            Player::Two => &self.captured_by_two,
        }
    }

    /// The full move history, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Selects the piece at a square for the side to move.
    ///
    /// An empty square or an opponent piece clears the selection without
    /// error. When the forced-capture rule applies, only pieces able to
    /// capture the opponent's W may be selected, and their move sets are
    /// restricted to the W squares.
    pub fn select_square(&mut self, square: Square) -> Result<Selection, MoveError> {
        if let Some(winner) = self.winner {
            return Err(MoveError::GameOver(winner));
        }
        self.pending = None;

        match self.board.piece_at(square) {
            Some(piece) if piece.owner == self.turn => {}
            _ => return Ok(Selection::Cleared),
        }

        let forced = forced_selectable(self.turn, &self.board);
        if !forced.is_empty() && !forced.contains(&square) {
            return Err(MoveError::MustCaptureSpecial);
        }

        let mut moves = legal_destinations(square, &self.board);
        if !forced.is_empty() {
            let targets = special_targets(self.turn, &self.board);
            moves.retain(|dest| targets.contains(dest));
            if moves.is_empty() {
                return Err(MoveError::NoForcedCapture);
            }
        }

        self.pending = Some((square, moves.clone()));
        Ok(Selection::Selected { square, moves })
    }

    /// Applies a move of the selected piece to `dest`.
    ///
    /// On success the piece is moved, any capture is recorded, a move record
    /// is appended, and the turn flips. A destination outside the pending
    /// move set clears the selection and changes nothing else.
    pub fn apply_move(&mut self, dest: Square) -> Result<AppliedMove, MoveError> {
        if let Some(winner) = self.winner {
            return Err(MoveError::GameOver(winner));
        }
        let (from, moves) = match self.pending.take() {
            Some(pending) => pending,
            None => return Err(MoveError::NoSelection),
        };
        if !moves.contains(&dest) {
            return Err(MoveError::InvalidDestination);
        }

        let piece = self
            .board
            .take(from)
            .expect("selected square holds a piece");
        let captured = self.board.set(dest, Some(piece));
        if let Some(victim) = captured {
            match self.turn {
                Player::One => self.captured_by_one.push(victim.kind),
                Player::Two => self.captured_by_two.push(victim.kind),
            }
        }

        let record = MoveRecord {
            from,
            to: dest,
            moved_kind: piece.kind,
            moved_owner: piece.owner,
            captured_kind: captured.map(|p| p.kind),
            captured_owner: captured.map(|p| p.owner),
        };
        self.history.push(record);
        self.turn = self.turn.opponent();
        self.winner = self.decide_winner();

        Ok(AppliedMove {
            record,
            winner: self.winner,
        })
    }

    /// A player with one piece or fewer has lost.
    fn decide_winner(&self) -> Option<Player> {
        if self.board.count(Player::One) <= 1 {
            Some(Player::Two)
        } else if self.board.count(Player::Two) <= 1 {
            Some(Player::One)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    /// A quiet two-piece position: One's F at (6, 4), Two's D at (2, 2).
    fn quiet_board() -> Board {
        let mut board = Board::empty();
        board.place(sq(6, 4), Piece::new(Player::One, Kind::F));
        board.place(sq(2, 2), Piece::new(Player::Two, Kind::D));
        board
    }

    #[test]
    fn new_game_starts_with_player_one() {
        let mut rng = SmallRng::seed_from_u64(5);
        let game = Game::new(&mut rng);
        assert_eq!(game.turn(), Player::One);
        assert_eq!(game.winner(), None);
        assert!(game.history().is_empty());
        assert!(game.selection().is_none());
        assert_eq!(game.board().count(Player::One), 9);
        assert_eq!(game.board().count(Player::Two), 9);
    }

    #[test]
    fn selecting_empty_square_clears() {
        let mut game = Game::from_board(quiet_board());
        assert_eq!(game.select_square(sq(0, 0)), Ok(Selection::Cleared));
        assert!(game.selection().is_none());
        assert_eq!(game.turn(), Player::One);
    }

    #[test]
    fn selecting_opponent_piece_clears() {
        let mut game = Game::from_board(quiet_board());
        assert_eq!(game.select_square(sq(2, 2)), Ok(Selection::Cleared));
        assert!(game.selection().is_none());
    }

    #[test]
    fn selecting_own_piece_yields_moves() {
        let mut game = Game::from_board(quiet_board());
        let selection = game.select_square(sq(6, 4)).unwrap();
        match selection {
            Selection::Selected { square, moves } => {
                assert_eq!(square, sq(6, 4));
                assert_eq!(moves.len(), 4);
            }
            Selection::Cleared => panic!("expected a selection"),
        }
        assert!(game.selection().is_some());
    }

    #[test]
    fn reselecting_replaces_the_selection() {
        let mut board = quiet_board();
        board.place(sq(7, 7), Piece::new(Player::One, Kind::J));
        let mut game = Game::from_board(board);
        game.select_square(sq(6, 4)).unwrap();
        game.select_square(sq(7, 7)).unwrap();
        assert_eq!(game.selection().unwrap().0, sq(7, 7));
    }

    #[test]
    fn apply_without_selection_is_rejected() {
        let mut game = Game::from_board(quiet_board());
        assert_eq!(game.apply_move(sq(5, 4)), Err(MoveError::NoSelection));
    }

    #[test]
    fn quiet_move_flips_turn_and_records() {
        let mut game = Game::from_board(quiet_board());
        game.select_square(sq(6, 4)).unwrap();
        let applied = game.apply_move(sq(5, 4)).unwrap();

        assert_eq!(applied.record.from, sq(6, 4));
        assert_eq!(applied.record.to, sq(5, 4));
        assert_eq!(applied.record.moved_kind, Kind::F);
        assert_eq!(applied.record.moved_owner, Player::One);
        assert!(!applied.record.is_capture());

        assert_eq!(game.turn(), Player::Two);
        assert_eq!(game.history().len(), 1);
        assert!(game.selection().is_none());
        assert_eq!(game.board().piece_at(sq(6, 4)), None);
        assert_eq!(
            game.board().piece_at(sq(5, 4)),
            Some(Piece::new(Player::One, Kind::F))
        );
    }

    #[test]
    fn invalid_destination_clears_selection_only() {
        let mut game = Game::from_board(quiet_board());
        game.select_square(sq(6, 4)).unwrap();
        let before = game.board().clone();

        assert_eq!(game.apply_move(sq(0, 0)), Err(MoveError::InvalidDestination));
        assert!(game.selection().is_none());
        assert_eq!(game.turn(), Player::One);
        assert_eq!(game.board(), &before);
        assert!(game.history().is_empty());
    }

    #[test]
    fn capture_is_booked_for_the_mover() {
        let mut board = Board::empty();
        board.place(sq(5, 4), Piece::new(Player::One, Kind::F));
        board.place(sq(4, 4), Piece::new(Player::Two, Kind::H));
        // Extra pieces so the capture does not end the game.
        board.place(sq(8, 0), Piece::new(Player::One, Kind::D));
        board.place(sq(0, 0), Piece::new(Player::Two, Kind::D));
        board.place(sq(0, 8), Piece::new(Player::Two, Kind::J));
        let mut game = Game::from_board(board);

        game.select_square(sq(5, 4)).unwrap();
        let applied = game.apply_move(sq(4, 4)).unwrap();
        assert_eq!(applied.record.captured_kind, Some(Kind::H));
        assert_eq!(applied.record.captured_owner, Some(Player::Two));
        assert_eq!(applied.winner, None);
        assert_eq!(game.captured_by(Player::One), &[Kind::H]);
        assert!(game.captured_by(Player::Two).is_empty());
    }

    #[test]
    fn forced_capture_restricts_selection_and_moves() {
        let mut board = Board::empty();
        board.place(sq(4, 4), Piece::new(Player::Two, Kind::W));
        board.place(sq(5, 4), Piece::new(Player::One, Kind::F));
        board.place(sq(8, 8), Piece::new(Player::One, Kind::H));
        board.place(sq(0, 0), Piece::new(Player::Two, Kind::D));
        board.place(sq(0, 8), Piece::new(Player::Two, Kind::J));
        let mut game = Game::from_board(board);

        // The H cannot reach the W, so selecting it is rejected.
        assert_eq!(
            game.select_square(sq(8, 8)),
            Err(MoveError::MustCaptureSpecial)
        );
        assert!(game.selection().is_none());

        // The forced piece may only move onto the W.
        let selection = game.select_square(sq(5, 4)).unwrap();
        assert_eq!(
            selection,
            Selection::Selected {
                square: sq(5, 4),
                moves: vec![sq(4, 4)],
            }
        );
    }

    #[test]
    fn reducing_to_one_piece_ends_the_game() {
        let mut board = Board::empty();
        board.place(sq(5, 4), Piece::new(Player::One, Kind::F));
        board.place(sq(8, 0), Piece::new(Player::One, Kind::D));
        board.place(sq(4, 4), Piece::new(Player::Two, Kind::H));
        board.place(sq(0, 0), Piece::new(Player::Two, Kind::D));
        let mut game = Game::from_board(board);

        game.select_square(sq(5, 4)).unwrap();
        let applied = game.apply_move(sq(4, 4)).unwrap();
        assert_eq!(applied.winner, Some(Player::One));
        assert_eq!(game.winner(), Some(Player::One));

        // Terminal state refuses both operations.
        assert_eq!(
            game.select_square(sq(0, 0)),
            Err(MoveError::GameOver(Player::One))
        );
        assert_eq!(
            game.apply_move(sq(1, 0)),
            Err(MoveError::GameOver(Player::One))
        );
    }
}
