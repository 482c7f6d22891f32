//! Move application: the single state transition on a board.
//!
//! Used both on the authoritative board once a move is accepted and on
//! throwaway clones inside the legality filter. There is no unmake; the
//! filter works on copies.

use super::{Board, EnPassantTarget, Move, MoveFlag, Square};

impl Board {
    /// Apply a move anchored at `from`. Legality is the caller's concern;
    /// this only executes the relocation and its side effects.
    ///
    /// A pending promotion (`Promotion(None)`) moves the pawn without
    /// substituting it, which is exactly what the legality simulation
    /// needs: occupancy is identical for every promotion kind, so king
    /// safety does not depend on the choice.
    ///
    /// Flips the side to move and recomputes the en-passant target, which
    /// is `None` unless this move is itself a double step.
    pub fn apply_move(&mut self, from: Square, mv: &Move) {
        let Some(mut piece) = self.cells[from.rank()][from.file()].take() else {
            return;
        };
        let mut new_target = None;

        match mv.flag {
            MoveFlag::EnPassant => {
                // The captured pawn sits beside the origin, not on the
                // destination square.
                self.cells[from.rank()][mv.to.file()] = None;
            }
            MoveFlag::DoubleStep => {
                new_target = Some(EnPassantTarget {
                    square: mv.to,
                    color: piece.color,
                });
            }
            MoveFlag::CastleKingside => {
                self.relocate_rook(Square(from.rank(), 7), Square(from.rank(), 5));
            }
            MoveFlag::CastleQueenside => {
                self.relocate_rook(Square(from.rank(), 0), Square(from.rank(), 3));
            }
            MoveFlag::Promotion(Some(kind)) => {
                piece.piece = kind;
            }
            MoveFlag::Promotion(None) | MoveFlag::Quiet => {}
        }

        piece.has_moved = true;
        self.cells[mv.to.rank()][mv.to.file()] = Some(piece);
        self.en_passant_target = new_target;
        self.side_to_move = self.side_to_move.opponent();
    }

    fn relocate_rook(&mut self, from: Square, to: Square) {
        if let Some(mut rook) = self.cells[from.rank()][from.file()].take() {
            rook.has_moved = true;
            self.cells[to.rank()][to.file()] = Some(rook);
        }
    }
}
