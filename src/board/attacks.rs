//! Attack oracle: does a side attack a given square?
//!
//! Pure queries over the current board, used both for king safety after a
//! simulated move and for the castling-path safety pre-check.

use super::types::{BISHOP_DIRS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRS};
use super::{Board, Color, Piece, Square};

impl Board {
    /// Whether `attacker` attacks `square` on the current board.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        // Pawn attackers sit one rank behind the square along their own
        // push direction.
        let pawn_dir = attacker.pawn_dir();
        for df in [-1, 1] {
            if let Some(src) = square.offset(-pawn_dir, df) {
                if let Some(p) = self.piece_at(src) {
                    if p.color == attacker && p.piece == Piece::Pawn {
                        return true;
                    }
                }
            }
        }

        for (dr, df) in KNIGHT_OFFSETS {
            if let Some(src) = square.offset(dr, df) {
                if let Some(p) = self.piece_at(src) {
                    if p.color == attacker && p.piece == Piece::Knight {
                        return true;
                    }
                }
            }
        }

        if self.ray_attacked(square, attacker, &ROOK_DIRS, [Piece::Rook, Piece::Queen]) {
            return true;
        }
        if self.ray_attacked(square, attacker, &BISHOP_DIRS, [Piece::Bishop, Piece::Queen]) {
            return true;
        }

        for (dr, df) in KING_OFFSETS {
            if let Some(src) = square.offset(dr, df) {
                if let Some(p) = self.piece_at(src) {
                    if p.color == attacker && p.piece == Piece::King {
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Walk each direction until the first occupant; attacked if that
    /// occupant belongs to `attacker` and is one of `kinds`.
    fn ray_attacked(
        &self,
        square: Square,
        attacker: Color,
        dirs: &[(isize, isize)],
        kinds: [Piece; 2],
    ) -> bool {
        for &(dr, df) in dirs {
            let mut next = square.offset(dr, df);
            while let Some(sq) = next {
                match self.piece_at(sq) {
                    None => next = sq.offset(dr, df),
                    Some(p) => {
                        if p.color == attacker && kinds.contains(&p.piece) {
                            return true;
                        }
                        break;
                    }
                }
            }
        }
        false
    }

    /// Locate the king of a color. `None` only on malformed boards.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        for rank in 0..8 {
            for file in 0..8 {
                let sq = Square(rank, file);
                if let Some(p) = self.piece_at(sq) {
                    if p.color == color && p.piece == Piece::King {
                        return Some(sq);
                    }
                }
            }
        }
        None
    }

    /// Whether the king of `color` is currently attacked.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        if let Some(king_sq) = self.find_king(color) {
            self.is_square_attacked(king_sq, color.opponent())
        } else {
            false
        }
    }
}
