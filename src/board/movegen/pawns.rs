use super::super::{Board, Color, Move, Square};

impl Board {
    pub(crate) fn pawn_moves(&self, from: Square, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        let dir = color.pawn_dir();
        let start_rank = if color == Color::White { 1 } else { 6 };
        let promotion_rank = if color == Color::White { 7 } else { 0 };

        if let Some(ahead) = from.offset(dir, 0) {
            if self.is_empty(ahead) {
                if ahead.rank() == promotion_rank {
                    moves.push(Move::promotion(ahead, false));
                } else {
                    moves.push(Move::quiet(ahead));
                    if from.rank() == start_rank {
                        if let Some(two_ahead) = from.offset(2 * dir, 0) {
                            if self.is_empty(two_ahead) {
                                moves.push(Move::double_step(two_ahead));
                            }
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            if let Some(occupant) = self.piece_at(target) {
                if occupant.color != color {
                    if target.rank() == promotion_rank {
                        moves.push(Move::promotion(target, true));
                    } else {
                        moves.push(Move::capture(target));
                    }
                }
            }
        }

        if let Some(target) = self.en_passant_target {
            if target.color != color
                && target.square.rank() == from.rank()
                && target.square.file().abs_diff(from.file()) == 1
            {
                if let Some(to) = Square::new((from.rank() as isize + dir) as usize, target.square.file())
                {
                    moves.push(Move::en_passant(to));
                }
            }
        }

        moves
    }
}
