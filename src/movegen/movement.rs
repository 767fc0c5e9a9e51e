//! Legal destination generation.
//!
//! One generator per piece kind, dispatched on the kind of the piece at the
//! source square. Every generator applies the same occupancy rule at the
//! destination: an empty cell or an enemy piece (capture by displacement) is
//! legal, a friendly piece is not.

use crate::board::{Board, Kind, Player, Square, BOARD_SIZE};

/// The four orthogonal single-step directions.
const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The four diagonal single-step directions.
const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// All eight straight-line directions.
const ALL_DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// The eight jump offsets: two squares orthogonally or diagonally.
const JUMP_OFFSETS: [(i32, i32); 8] = [
    (2, 0),
    (-2, 0),
    (0, 2),
    (0, -2),
    (2, 2),
    (-2, -2),
    (2, -2),
    (-2, 2),
];

/// Generates every legal destination for the piece at the given square.
///
/// Returns an empty vec if the square is empty. Destinations are always in
/// bounds and never hold a piece of the moving side.
pub fn legal_destinations(square: Square, board: &Board) -> Vec<Square> {
    let piece = match board.piece_at(square) {
        Some(p) => p,
        None => return Vec::new(),
    };

    match piece.kind {
        Kind::D => offset_moves(square, board, piece.owner, &DIAGONAL),
        Kind::F | Kind::W => offset_moves(square, board, piece.owner, &ORTHOGONAL),
        Kind::H => hybrid_moves(square, board, piece.owner),
        // Jumps check occupancy at the destination only; intervening pieces
        // are irrelevant.
        Kind::J => offset_moves(square, board, piece.owner, &JUMP_OFFSETS),
        Kind::S => ranged_moves(square, board, piece.owner),
    }
}

/// Returns whether the moving side may land on a square: empty or enemy.
fn can_land(square: Square, board: &Board, owner: Player) -> bool {
    match board.piece_at(square) {
        None => true,
        Some(p) => p.owner != owner,
    }
}

/// Destinations at a fixed set of offsets, bounds- and occupancy-filtered.
fn offset_moves(
    square: Square,
    board: &Board,
    owner: Player,
    offsets: &[(i32, i32)],
) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| square.offset(dr, dc))
        .filter(|&dest| can_land(dest, board, owner))
        .collect()
}

/// H movement: one square up or down, plus a horizontal rook-slide.
fn hybrid_moves(square: Square, board: &Board, owner: Player) -> Vec<Square> {
    let mut moves = Vec::new();

    for dr in [-1, 1] {
        if let Some(dest) = square.offset(dr, 0) {
            if can_land(dest, board, owner) {
                moves.push(dest);
            }
        }
    }

    slide(square, board, owner, -1, &mut moves);
    slide(square, board, owner, 1, &mut moves);
    moves
}

/// Scans horizontally from the square: empty cells are legal and scanning
/// continues; the first occupied cell stops the scan and is legal only if
/// it belongs to the enemy.
fn slide(square: Square, board: &Board, owner: Player, dc: i32, moves: &mut Vec<Square>) {
    let mut dist = 1;
    while let Some(dest) = square.offset(0, dc * dist) {
        match board.piece_at(dest) {
            None => moves.push(dest),
            Some(p) => {
                if p.owner != owner {
                    moves.push(dest);
                }
                return;
            }
        }
        dist += 1;
    }
}

/// S movement: exactly two or three squares along any of the eight
/// directions, with every strictly-intervening cell empty. Single steps are
/// never legal.
fn ranged_moves(square: Square, board: &Board, owner: Player) -> Vec<Square> {
    let mut moves = Vec::new();

    for (dr, dc) in ALL_DIRECTIONS {
        for dist in [2, 3] {
            let dest = match square.offset(dr * dist, dc * dist) {
                Some(d) => d,
                None => continue,
            };
            let blocked = (1..dist).any(|step| {
                let between = square
                    .offset(dr * step, dc * step)
                    .expect("intervening cell is inside the board when the destination is");
                board.piece_at(between).is_some()
            });
            if !blocked && can_land(dest, board, owner) {
                moves.push(dest);
            }
        }
    }

    moves
}

/// Upper bound on the destination count for a kind, before occupancy
/// filtering. Useful for sanity checks and sizing.
pub fn max_destinations(kind: Kind) -> usize {
    match kind {
        Kind::D | Kind::F | Kind::W => 4,
        Kind::J => 8,
        // Vertical steps plus a full-width slide on both sides.
        Kind::H => 2 + (BOARD_SIZE - 1),
        // Eight directions, two distances each.
        Kind::S => 16,
    }
}
