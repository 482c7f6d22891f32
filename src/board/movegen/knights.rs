use super::super::types::KNIGHT_OFFSETS;
use super::super::{Board, Color, Move, Square};

impl Board {
    pub(crate) fn knight_moves(&self, from: Square, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for (dr, df) in KNIGHT_OFFSETS {
            let Some(to) = from.offset(dr, df) else {
                continue;
            };
            match self.piece_at(to) {
                None => moves.push(Move::quiet(to)),
                Some(occupant) if occupant.color != color => moves.push(Move::capture(to)),
                Some(_) => {}
            }
        }
        moves
    }
}
