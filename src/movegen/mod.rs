//! Legal move generation.
//!
//! Per-kind destination generation, the forced-capture evaluator, and a
//! random-move picker used by the CLI and by tests that drive whole games.

pub mod forced;
pub mod movement;

use rand::Rng;

pub use forced::{forced_selectable, special_targets};
pub use movement::legal_destinations;

use crate::board::{Board, Player, Square};

/// Picks a uniformly random legal move for the player, respecting the
/// forced-capture rule: when the force applies, only forced pieces may move
/// and only onto an opponent W.
///
/// Returns `None` when the player has no legal move at all.
pub fn random_move(player: Player, board: &Board, rng: &mut impl Rng) -> Option<(Square, Square)> {
    let forced = forced_selectable(player, board);
    let force_applies = !forced.is_empty();

    let candidates: Vec<Square> = if force_applies {
        forced
    } else {
        board
            .occupied()
            .filter(|(_, piece)| piece.owner == player)
            .map(|(square, _)| square)
            .collect()
    };

    let targets = special_targets(player, board);
    let mut playable: Vec<(Square, Vec<Square>)> = Vec::new();
    for from in candidates {
        let mut moves = legal_destinations(from, board);
        if force_applies {
            moves.retain(|dest| targets.contains(dest));
        }
        if !moves.is_empty() {
            playable.push((from, moves));
        }
    }

    if playable.is_empty() {
        return None;
    }
    let (from, moves) = &playable[rng.gen_range(0..playable.len())];
    let dest = moves[rng.gen_range(0..moves.len())];
    Some((*from, dest))
}
