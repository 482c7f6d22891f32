//! Mailbox board representation.
//!
//! The board is an 8x8 grid of optional pieces plus the side to move and
//! the en-passant target. It has value semantics: `Clone` produces the
//! full deep copy that the legality filter mutates and discards, so the
//! authoritative state is untouched until a move is accepted.

use std::fmt;

use super::{Color, EnPassantTarget, Piece, PlacedPiece, Square};

#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) cells: [[Option<PlacedPiece>; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) en_passant_target: Option<EnPassantTarget>,
}

impl Board {
    /// Standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, file), Color::White, *piece);
            board.set_piece(Square(7, file), Color::Black, *piece);
            board.set_piece(Square(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square(6, file), Color::Black, Piece::Pawn);
        }
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
            side_to_move: Color::White,
            en_passant_target: None,
        }
    }

    /// The piece on a square, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<PlacedPiece> {
        self.cells[sq.rank()][sq.file()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.rank()][sq.file()].is_none()
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<EnPassantTarget> {
        self.en_passant_target
    }

    /// Place a fresh (unmoved) piece on a square, replacing any occupant.
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.cells[sq.rank()][sq.file()] = Some(PlacedPiece::new(color, piece));
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                match self.cells[rank][file] {
                    Some(p) => {
                        let c = match p.color {
                            Color::White => p.piece.to_char().to_ascii_uppercase(),
                            Color::Black => p.piece.to_char(),
                        };
                        write!(f, "{c} ")?;
                    }
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
