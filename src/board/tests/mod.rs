//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Pseudo-legal generation and the legality filter
//! - `attacks.rs` - Attack oracle queries
//! - `castling.rs` - Castling availability and execution
//! - `en_passant.rs` - En passant lifetime and capture
//! - `promotion.rs` - Promotion resolution
//! - `terminal.rs` - Checkmate/stalemate/resignation classification
//! - `fen.rs` - FEN parsing and generation
//! - `proptest.rs` - Property-based tests

mod attacks;
mod terminal;

use crate::board::Square;

fn sq(notation: &str) -> Square {
    notation.parse().expect("valid square notation")
}
