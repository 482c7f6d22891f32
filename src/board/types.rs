//! Core value types: colors, pieces, squares, and moves.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::SquareError;

pub(crate) fn file_to_index(file: char) -> usize {
    file as usize - ('a' as usize)
}

pub(crate) fn rank_to_index(rank: char) -> usize {
    (rank as usize) - ('0' as usize) - 1
}

pub(crate) const ROOK_DIRS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const BISHOP_DIRS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];
pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];

/// Side of the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Direction a pawn of this color advances along the rank axis.
    #[inline]
    pub(crate) const fn pawn_dir(self) -> isize {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank of this color's back row (king/rook home rank).
    #[inline]
    pub(crate) const fn back_rank(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Kinds a pawn may promote to.
pub const PROMOTION_PIECES: [Piece; 4] = [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

impl Piece {
    /// Parse a piece from a character (p, n, b, r, q, k), case-insensitive.
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Convert the piece to a lowercase character.
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }
}

/// A piece as it sits on a square.
///
/// `has_moved` flips to `true` the first time the piece is relocated,
/// including the rook's silent relocation during castling. It gates
/// castling availability.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PlacedPiece {
    pub color: Color,
    pub piece: Piece,
    pub has_moved: bool,
}

impl PlacedPiece {
    #[inline]
    #[must_use]
    pub(crate) const fn new(color: Color, piece: Piece) -> Self {
        PlacedPiece {
            color,
            piece,
            has_moved: false,
        }
    }
}

/// A square on the board, represented as (rank, file).
/// Rank 0 is rank 1, file 0 is file a.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Square(pub usize, pub usize);

impl Square {
    /// Create a square with bounds checking.
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank, file))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    /// Step by a (rank, file) delta, returning `None` off the board.
    #[must_use]
    pub fn offset(self, dr: isize, df: isize) -> Option<Square> {
        let rank = self.0 as isize + dr;
        let file = self.1 as isize + df;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square(rank as usize, file as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, self.0 + 1)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() == 2 && ('a'..='h').contains(&chars[0]) && ('1'..='8').contains(&chars[1]) {
            Ok(Square(rank_to_index(chars[1]), file_to_index(chars[0])))
        } else {
            Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            })
        }
    }
}

/// The square and owner of a pawn that just double-stepped.
///
/// Live for exactly one ply: cleared by the next applied move unless that
/// move is itself a double step.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct EnPassantTarget {
    pub square: Square,
    pub color: Color,
}

/// Special-move marker carried by a [`Move`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MoveFlag {
    Quiet,
    DoubleStep,
    EnPassant,
    CastleKingside,
    CastleQueenside,
    /// Pawn reaches the far rank. `None` means the promotion kind has not
    /// been chosen yet; applying such a move fails with `PromotionRequired`.
    Promotion(Option<Piece>),
}

/// A candidate or accepted move, anchored to an origin square supplied by
/// the caller.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Move {
    pub to: Square,
    pub captures: bool,
    pub flag: MoveFlag,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn quiet(to: Square) -> Self {
        Move {
            to,
            captures: false,
            flag: MoveFlag::Quiet,
        }
    }

    #[inline]
    #[must_use]
    pub const fn capture(to: Square) -> Self {
        Move {
            to,
            captures: true,
            flag: MoveFlag::Quiet,
        }
    }

    #[inline]
    #[must_use]
    pub const fn double_step(to: Square) -> Self {
        Move {
            to,
            captures: false,
            flag: MoveFlag::DoubleStep,
        }
    }

    #[inline]
    #[must_use]
    pub const fn en_passant(to: Square) -> Self {
        Move {
            to,
            captures: true,
            flag: MoveFlag::EnPassant,
        }
    }

    #[inline]
    #[must_use]
    pub const fn castle_kingside(to: Square) -> Self {
        Move {
            to,
            captures: false,
            flag: MoveFlag::CastleKingside,
        }
    }

    #[inline]
    #[must_use]
    pub const fn castle_queenside(to: Square) -> Self {
        Move {
            to,
            captures: false,
            flag: MoveFlag::CastleQueenside,
        }
    }

    /// A pawn move onto the far rank with the promotion kind still open.
    #[inline]
    #[must_use]
    pub const fn promotion(to: Square, captures: bool) -> Self {
        Move {
            to,
            captures,
            flag: MoveFlag::Promotion(None),
        }
    }

    /// Resolve a pending promotion by choosing the replacement piece.
    #[must_use]
    pub fn with_promotion(self, piece: Piece) -> Self {
        Move {
            flag: MoveFlag::Promotion(Some(piece)),
            ..self
        }
    }

    /// Whether this move still needs a promotion kind before it can be
    /// applied through the game state.
    #[inline]
    #[must_use]
    pub const fn requires_promotion(&self) -> bool {
        matches!(self.flag, MoveFlag::Promotion(None))
    }

    /// The chosen promotion kind, if any.
    #[inline]
    #[must_use]
    pub const fn promotion_piece(&self) -> Option<Piece> {
        match self.flag {
            MoveFlag::Promotion(p) => p,
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(&self) -> bool {
        matches!(
            self.flag,
            MoveFlag::CastleKingside | MoveFlag::CastleQueenside
        )
    }
}
