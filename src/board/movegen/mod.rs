//! Pseudo-legal move generation and the legality filter.
//!
//! Per-piece generators live in their own files; this module dispatches on
//! the piece at the origin and filters candidates by simulating each one on
//! a cloned board and rejecting it if the mover's own king is attacked
//! afterward. Check evasion and pins fall out of that pattern without any
//! explicit pin detection.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::types::{BISHOP_DIRS, ROOK_DIRS};
use super::{Board, Color, Move, Piece, Square};

impl Board {
    /// Piece-movement candidates for the piece on `from`, ignoring king
    /// safety. An empty origin yields an empty vec, not an error.
    #[must_use]
    pub fn pseudo_moves(&self, from: Square) -> Vec<Move> {
        let Some(placed) = self.piece_at(from) else {
            return Vec::new();
        };
        let color = placed.color;
        match placed.piece {
            Piece::Pawn => self.pawn_moves(from, color),
            Piece::Knight => self.knight_moves(from, color),
            Piece::Bishop => self.sliding_moves(from, color, &BISHOP_DIRS),
            Piece::Rook => self.sliding_moves(from, color, &ROOK_DIRS),
            Piece::Queen => {
                let mut moves = self.sliding_moves(from, color, &ROOK_DIRS);
                moves.extend(self.sliding_moves(from, color, &BISHOP_DIRS));
                moves
            }
            Piece::King => self.king_moves(from, color),
        }
    }

    /// Moves from `from` that do not leave the mover's king attacked.
    ///
    /// Yields an empty vec when the origin is empty or holds a piece that
    /// does not belong to the side to move.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> Vec<Move> {
        let Some(placed) = self.piece_at(from) else {
            return Vec::new();
        };
        if placed.color != self.side_to_move {
            return Vec::new();
        }
        self.pseudo_moves(from)
            .into_iter()
            .filter(|mv| self.keeps_king_safe(from, mv, placed.color))
            .collect()
    }

    /// Clone, apply, inspect: the simulate-then-check legality test.
    pub(crate) fn keeps_king_safe(&self, from: Square, mv: &Move, mover: Color) -> bool {
        let mut sim = self.clone();
        sim.apply_move(from, mv);
        !sim.is_in_check(mover)
    }

    /// Whether `color` has at least one legal move anywhere, stopping at
    /// the first one found.
    #[must_use]
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        for rank in 0..8 {
            for file in 0..8 {
                let from = Square(rank, file);
                match self.piece_at(from) {
                    Some(p) if p.color == color => {}
                    _ => continue,
                }
                for mv in self.pseudo_moves(from) {
                    if self.keeps_king_safe(from, &mv, color) {
                        return true;
                    }
                }
            }
        }
        false
    }
}
