//! Chess board representation and move rules.
//!
//! A mailbox board (8x8 grid of optional pieces) with pseudo-legal move
//! generation per piece, an attack oracle, and a simulate-then-check
//! legality filter. Supports full move rules including castling, en
//! passant, and promotions.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Square};
//!
//! let board = Board::new();
//! let moves = board.legal_moves(Square(1, 4)); // the e2 pawn
//! assert_eq!(moves.len(), 2);
//! ```

mod apply;
mod attacks;
mod error;
mod fen;
mod movegen;
pub(crate) mod san;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveError, SquareError};
pub use state::Board;
pub use types::{
    Color, EnPassantTarget, Move, MoveFlag, Piece, PlacedPiece, Square, PROMOTION_PIECES,
};

pub(crate) use types::{file_to_index, rank_to_index};
