//! Piece kinds and ownership.
//!
//! Each piece belongs to one of two players and has a kind that selects its
//! movement rule. Kind and player both have compact wire forms matching the
//! persisted history format: single-letter kinds, numeric players.

/// One of the two players. Player One starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Returns the other player.
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the numeric wire form (1 or 2).
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Parses a player from its numeric wire form.
    pub fn from_number(n: u8) -> Option<Player> {
        match n {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }
}

/// A piece's movement-rule category.
///
/// - `D` steps one square diagonally.
/// - `F` steps one square orthogonally.
/// - `H` steps one square vertically or slides horizontally.
/// - `J` jumps exactly two squares, ignoring anything in between.
/// - `W` moves like `F` but is the forced-capture target.
/// - `S` moves exactly two or three squares in a straight line, blocked by
///   intervening pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    D,
    F,
    H,
    J,
    W,
    S,
}

impl Kind {
    /// Returns the single-letter wire form.
    pub const fn letter(self) -> char {
        match self {
            Kind::D => 'D',
            Kind::F => 'F',
            Kind::H => 'H',
            Kind::J => 'J',
            Kind::W => 'W',
            Kind::S => 'S',
        }
    }

    /// Parses a kind from its single-letter wire form.
    pub fn from_letter(c: char) -> Option<Kind> {
        match c {
            'D' => Some(Kind::D),
            'F' => Some(Kind::F),
            'H' => Some(Kind::H),
            'J' => Some(Kind::J),
            'W' => Some(Kind::W),
            'S' => Some(Kind::S),
            _ => None,
        }
    }
}

/// A piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub owner: Player,
    pub kind: Kind,
}

impl Piece {
    pub const fn new(owner: Player, kind: Kind) -> Piece {
        Piece { owner, kind }
    }
}
