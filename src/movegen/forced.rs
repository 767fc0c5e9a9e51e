//! Forced-capture evaluation.
//!
//! When any piece of the side to move can capture the opponent's W, the
//! player must move one of those pieces, and only onto the W. This module
//! finds the W target squares and the pieces compelled by them; the engine
//! uses both to restrict selection and filter move sets against the same
//! definition of a target.

use super::movement::legal_destinations;
use crate::board::{Board, Kind, Player, Square};

/// Squares holding the opponent's W pieces, relative to the side to move.
pub fn special_targets(player: Player, board: &Board) -> Vec<Square> {
    let opponent = player.opponent();
    board
        .occupied()
        .filter(|(_, piece)| piece.kind == Kind::W && piece.owner == opponent)
        .map(|(square, _)| square)
        .collect()
}

/// Squares of the player's pieces that can capture an opponent W this turn.
///
/// Empty when the opponent has no W on the board or nothing can reach it.
pub fn forced_selectable(player: Player, board: &Board) -> Vec<Square> {
    let targets = special_targets(player, board);
    if targets.is_empty() {
        return Vec::new();
    }

    board
        .occupied()
        .filter(|(_, piece)| piece.owner == player)
        .filter(|&(square, _)| {
            legal_destinations(square, board)
                .iter()
                .any(|dest| targets.contains(dest))
        })
        .map(|(square, _)| square)
        .collect()
}
