//! Error types for board and game operations.

use std::fmt;

use super::Square;

/// Error type for square notation parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Notation is not a file a-h followed by a rank 1-8
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 4)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Invalid rank in position string
    InvalidRank { rank: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidRank { rank } => {
                write!(f, "Invalid rank index {rank} in FEN")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for rejected game-state transitions.
///
/// `InvalidOrigin` and `IllegalMove` indicate a caller that skipped the
/// `legal_moves` query; `PromotionRequired` indicates a pawn move that
/// reached the far rank without a chosen replacement piece. None of these
/// are retried internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game is already over; no further transitions are accepted
    GameOver,
    /// Origin square is empty or holds a piece of the wrong color
    InvalidOrigin { square: Square },
    /// Destination is not in the legal set for the origin
    IllegalMove { from: Square, to: Square },
    /// Move reaches the far rank without a chosen promotion kind
    PromotionRequired { from: Square, to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::InvalidOrigin { square } => {
                write!(f, "No piece of the side to move on {square}")
            }
            MoveError::IllegalMove { from, to } => {
                write!(f, "Move {from}{to} is not legal")
            }
            MoveError::PromotionRequired { from, to } => {
                write!(f, "Move {from}{to} requires a promotion piece")
            }
        }
    }
}

impl std::error::Error for MoveError {}
