use super::super::{Board, Color, Move, Square};

impl Board {
    /// Ray-cast per direction until the board edge, an own piece (stop,
    /// exclude) or an enemy piece (capture, stop).
    pub(crate) fn sliding_moves(
        &self,
        from: Square,
        color: Color,
        dirs: &[(isize, isize)],
    ) -> Vec<Move> {
        let mut moves = Vec::new();
        for &(dr, df) in dirs {
            let mut next = from.offset(dr, df);
            while let Some(to) = next {
                match self.piece_at(to) {
                    None => {
                        moves.push(Move::quiet(to));
                        next = to.offset(dr, df);
                    }
                    Some(occupant) => {
                        if occupant.color != color {
                            moves.push(Move::capture(to));
                        }
                        break;
                    }
                }
            }
        }
        moves
    }
}
