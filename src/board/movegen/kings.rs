use super::super::types::KING_OFFSETS;
use super::super::{Board, Color, Move, Piece, Square};

impl Board {
    pub(crate) fn king_moves(&self, from: Square, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for (dr, df) in KING_OFFSETS {
            let Some(to) = from.offset(dr, df) else {
                continue;
            };
            match self.piece_at(to) {
                None => moves.push(Move::quiet(to)),
                Some(occupant) if occupant.color != color => moves.push(Move::capture(to)),
                Some(_) => {}
            }
        }

        // Castling is pre-checked against the current board, not a
        // simulation: king unmoved, not in check, rook unmoved on its home
        // square, path empty, and start/transit/landing squares unattacked.
        let king_unmoved = self
            .piece_at(from)
            .map(|p| !p.has_moved)
            .unwrap_or(false);
        if from == Square(color.back_rank(), 4) && king_unmoved && !self.is_in_check(color) {
            if let Some(mv) = self.castle_move(from, color, true) {
                moves.push(mv);
            }
            if let Some(mv) = self.castle_move(from, color, false) {
                moves.push(mv);
            }
        }

        moves
    }

    fn castle_move(&self, from: Square, color: Color, kingside: bool) -> Option<Move> {
        let rank = from.rank();
        let rook_file = if kingside { 7 } else { 0 };
        let rook = self.piece_at(Square(rank, rook_file))?;
        if rook.piece != Piece::Rook || rook.color != color || rook.has_moved {
            return None;
        }

        let between: &[usize] = if kingside { &[5, 6] } else { &[1, 2, 3] };
        if !between.iter().all(|&f| self.is_empty(Square(rank, f))) {
            return None;
        }

        let king_path: &[usize] = if kingside { &[4, 5, 6] } else { &[4, 3, 2] };
        let enemy = color.opponent();
        if king_path
            .iter()
            .any(|&f| self.is_square_attacked(Square(rank, f), enemy))
        {
            return None;
        }

        Some(if kingside {
            Move::castle_kingside(Square(rank, 6))
        } else {
            Move::castle_queenside(Square(rank, 2))
        })
    }
}
