//! Initial piece placement.
//!
//! Each side fields nine pieces drawn from a fixed kind list, with one F
//! promoted to the W target and one D promoted to S. Placement within each
//! side's three home rows is a random permutation, so the RNG is injected to
//! keep tests deterministic.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Kind, Piece, Player, Square, BOARD_SIZE};

/// Pieces fielded by each side.
pub const PIECES_PER_SIDE: usize = 9;

/// The kind list for one side after promotion: the first F becomes W, the
/// first D becomes S.
pub fn side_kinds() -> [Kind; PIECES_PER_SIDE] {
    let mut kinds = [
        Kind::D,
        Kind::D,
        Kind::F,
        Kind::F,
        Kind::H,
        Kind::H,
        Kind::J,
        Kind::J,
        Kind::F,
    ];
    promote(&mut kinds, Kind::F, Kind::W);
    promote(&mut kinds, Kind::D, Kind::S);
    kinds
}

fn promote(kinds: &mut [Kind], from: Kind, to: Kind) {
    if let Some(slot) = kinds.iter_mut().find(|k| **k == from) {
        *slot = to;
    }
}

/// The home rows where a player's pieces start: the bottom third of the
/// board for Player One, the top third for Player Two.
pub fn home_rows(player: Player) -> std::ops::Range<usize> {
    match player {
        Player::One => (BOARD_SIZE - BOARD_SIZE / 3)..BOARD_SIZE,
        Player::Two => 0..(BOARD_SIZE / 3),
    }
}

/// Populates a fresh board with both sides' pieces on random cells of their
/// home rows. The board must be empty.
pub fn place_random(board: &mut Board, rng: &mut impl Rng) {
    for player in [Player::One, Player::Two] {
        let mut cells: Vec<Square> = home_rows(player)
            .flat_map(|row| {
                (0..BOARD_SIZE).map(move |col| Square::new(row, col).expect("home cell in range"))
            })
            .collect();
        cells.shuffle(rng);

        for (kind, square) in side_kinds().into_iter().zip(cells) {
            board.place(square, Piece::new(player, kind));
        }
    }
}
