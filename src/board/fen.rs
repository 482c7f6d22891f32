//! FEN parsing and generation for the board position.
//!
//! The castling-availability field maps onto the per-piece `has_moved`
//! flags: a right is emitted while king and rook sit unmoved on their home
//! squares, and a missing right marks the corresponding rook (and, when
//! both rights are missing, the king) as moved on parse. The halfmove and
//! fullmove fields are tolerated but not stored here; the game state keeps
//! the move number.

use super::error::FenError;
use super::{
    file_to_index, rank_to_index, Board, Color, EnPassantTarget, Piece, Square,
};

impl Board {
    /// Parse a board position from FEN notation.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        for (rank_idx, rank_str) in parts[0].split('/').enumerate() {
            if rank_idx >= 8 {
                return Err(FenError::InvalidRank { rank: rank_idx });
            }
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    board.set_piece(Square(7 - rank_idx, file), color, piece);
                    file += 1;
                }
            }
        }

        match parts[1] {
            "w" => board.side_to_move = Color::White,
            "b" => board.side_to_move = Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        }

        let mut white_kingside = false;
        let mut white_queenside = false;
        let mut black_kingside = false;
        let mut black_queenside = false;
        for c in parts[2].chars() {
            match c {
                'K' => white_kingside = true,
                'Q' => white_queenside = true,
                'k' => black_kingside = true,
                'q' => black_queenside = true,
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }
        board.apply_castling_rights(Color::White, white_kingside, white_queenside);
        board.apply_castling_rights(Color::Black, black_kingside, black_queenside);

        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            let chars: Vec<char> = parts[3].chars().collect();
            if chars.len() == 2
                && ('a'..='h').contains(&chars[0])
                && ('1'..='8').contains(&chars[1])
            {
                let skipped = Square(rank_to_index(chars[1]), file_to_index(chars[0]));
                // The field names the skipped square; the pawn itself sits
                // one rank further along its own push direction.
                let pawn_color = board.side_to_move.opponent();
                let pawn_rank = skipped.rank() as isize + pawn_color.pawn_dir();
                let square = Square::new(pawn_rank as usize, skipped.file()).ok_or_else(|| {
                    FenError::InvalidEnPassant {
                        found: parts[3].to_string(),
                    }
                })?;
                Some(EnPassantTarget {
                    square,
                    color: pawn_color,
                })
            } else {
                return Err(FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                });
            }
        };

        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible
    /// parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Translate missing castling rights into moved-piece flags.
    fn apply_castling_rights(&mut self, color: Color, kingside: bool, queenside: bool) {
        let back = color.back_rank();
        if !kingside {
            self.mark_moved(Square(back, 7), color, Piece::Rook);
        }
        if !queenside {
            self.mark_moved(Square(back, 0), color, Piece::Rook);
        }
        if !kingside && !queenside {
            self.mark_moved(Square(back, 4), color, Piece::King);
        }
    }

    fn mark_moved(&mut self, sq: Square, color: Color, piece: Piece) {
        if let Some(p) = self.cells[sq.rank()][sq.file()].as_mut() {
            if p.color == color && p.piece == piece {
                p.has_moved = true;
            }
        }
    }

    /// The first four FEN fields: placement, side to move, castling
    /// availability, en-passant square.
    pub(crate) fn fen_fields(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.cells[rank][file] {
                    None => empty += 1,
                    Some(p) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        let c = match p.color {
                            Color::White => p.piece.to_char().to_ascii_uppercase(),
                            Color::Black => p.piece.to_char(),
                        };
                        row.push(c);
                    }
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let side = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        if self.castle_available(Color::White, true) {
            castling.push('K');
        }
        if self.castle_available(Color::White, false) {
            castling.push('Q');
        }
        if self.castle_available(Color::Black, true) {
            castling.push('k');
        }
        if self.castle_available(Color::Black, false) {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let en_passant = match self.en_passant_target {
            None => "-".to_string(),
            Some(target) => {
                let skipped_rank = (target.square.rank() as isize - target.color.pawn_dir()) as usize;
                Square(skipped_rank, target.square.file()).to_string()
            }
        };

        format!("{} {side} {castling} {en_passant}", rows.join("/"))
    }

    fn castle_available(&self, color: Color, kingside: bool) -> bool {
        let back = color.back_rank();
        let rook_file = if kingside { 7 } else { 0 };
        let king_ok = matches!(
            self.piece_at(Square(back, 4)),
            Some(p) if p.color == color && p.piece == Piece::King && !p.has_moved
        );
        let rook_ok = matches!(
            self.piece_at(Square(back, rook_file)),
            Some(p) if p.color == color && p.piece == Piece::Rook && !p.has_moved
        );
        king_ok && rook_ok
    }
}
