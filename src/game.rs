//! Game state: accepted-move bookkeeping and terminal classification.
//!
//! A `GameState` exclusively owns its board. Every public transition runs
//! to completion before the next; once a terminal outcome is produced the
//! state refuses further transitions.

use serde::{Deserialize, Serialize};

use crate::board::san::move_notation;
use crate::board::{Board, Color, FenError, Move, MoveError, MoveFlag, Square};
use crate::score::GameResult;

/// How a finished game ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Outcome {
    /// The named color delivered mate and wins.
    Checkmate(Color),
    /// Side to move has no legal move and is not in check.
    Stalemate,
    /// The named color wins by the opponent's resignation.
    Resignation(Color),
    /// Draw agreed by offer; no acceptance negotiation is modeled.
    DrawOffer,
}

impl Outcome {
    /// Winner of the game, if it has one.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        match self {
            Outcome::Checkmate(winner) | Outcome::Resignation(winner) => Some(*winner),
            Outcome::Stalemate | Outcome::DrawOffer => None,
        }
    }

    /// The counter-store key this outcome tallies under.
    #[must_use]
    pub fn result(&self) -> GameResult {
        match self.winner() {
            Some(Color::White) => GameResult::WhiteWins,
            Some(Color::Black) => GameResult::BlackWins,
            None => GameResult::Draw,
        }
    }
}

/// One full move of the game record: the move number with White's notation
/// and, once played, Black's reply.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub number: u32,
    pub white: String,
    pub black: Option<String>,
}

#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    fullmove_number: u32,
    history: Vec<HistoryEntry>,
    over: bool,
}

impl GameState {
    /// A fresh game from the standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            fullmove_number: 1,
            history: Vec::new(),
            over: false,
        }
    }

    /// A game continuing from a FEN position. The halfmove field is
    /// ignored (no clock is modeled); the fullmove field seeds the move
    /// number.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let board = Board::try_from_fen(fen)?;
        let fullmove_number = fen
            .split_whitespace()
            .nth(5)
            .and_then(|s| s.parse().ok())
            .unwrap_or(1);
        Ok(GameState {
            board,
            fullmove_number,
            history: Vec::new(),
            over: false,
        })
    }

    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible
    /// parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// FEN for the current position. The halfmove field is always 0.
    #[must_use]
    pub fn to_fen(&self) -> String {
        format!("{} 0 {}", self.board.fen_fields(), self.fullmove_number)
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Legal moves for the piece on `origin`. Empty when the game is over
    /// or the origin holds no piece of the side to move.
    #[must_use]
    pub fn legal_moves(&self, origin: Square) -> Vec<Move> {
        if self.over {
            return Vec::new();
        }
        self.board.legal_moves(origin)
    }

    /// Apply a move chosen from `legal_moves(origin)`.
    ///
    /// Returns the terminal outcome when this move ends the game:
    /// check and no reply is checkmate for the mover, no check and no
    /// reply is stalemate. Otherwise the side to move flips and `None` is
    /// returned.
    ///
    /// A pawn move onto the far rank must carry a chosen promotion kind
    /// (see [`Move::with_promotion`]); there is no silent default.
    pub fn apply_move(&mut self, origin: Square, mv: &Move) -> Result<Option<Outcome>, MoveError> {
        if self.over {
            return Err(MoveError::GameOver);
        }
        let placed = self
            .board
            .piece_at(origin)
            .filter(|p| p.color == self.board.side_to_move())
            .ok_or(MoveError::InvalidOrigin { square: origin })?;

        // Destinations are unique per origin, so the offered move is found
        // by destination; the caller's contribution beyond that is the
        // promotion choice.
        let offered = self
            .board
            .legal_moves(origin)
            .into_iter()
            .find(|m| m.to == mv.to)
            .ok_or(MoveError::IllegalMove {
                from: origin,
                to: mv.to,
            })?;

        let mut accepted = offered;
        if offered.requires_promotion() {
            match mv.promotion_piece() {
                Some(kind) => accepted.flag = MoveFlag::Promotion(Some(kind)),
                None => {
                    return Err(MoveError::PromotionRequired {
                        from: origin,
                        to: mv.to,
                    })
                }
            }
        }

        let mover = placed.color;
        self.board.apply_move(origin, &accepted);

        let opponent = mover.opponent();
        let in_check = self.board.is_in_check(opponent);
        let can_reply = self.board.has_any_legal_move(opponent);
        let outcome = match (in_check, can_reply) {
            (true, false) => Some(Outcome::Checkmate(mover)),
            (false, false) => Some(Outcome::Stalemate),
            _ => None,
        };

        let is_mate = matches!(outcome, Some(Outcome::Checkmate(_)));
        let notation = move_notation(placed.piece, origin, &accepted, in_check && !is_mate, is_mate);
        self.record(mover, notation);

        if outcome.is_some() {
            self.over = true;
        }
        Ok(outcome)
    }

    /// Resign on behalf of `color`; the opponent wins regardless of the
    /// position on the board.
    pub fn resign(&mut self, color: Color) -> Result<Outcome, MoveError> {
        if self.over {
            return Err(MoveError::GameOver);
        }
        self.over = true;
        Ok(Outcome::Resignation(color.opponent()))
    }

    /// End the game as an agreed draw.
    pub fn offer_draw(&mut self) -> Result<Outcome, MoveError> {
        if self.over {
            return Err(MoveError::GameOver);
        }
        self.over = true;
        Ok(Outcome::DrawOffer)
    }

    fn record(&mut self, mover: Color, notation: String) {
        match mover {
            Color::White => self.history.push(HistoryEntry {
                number: self.fullmove_number,
                white: notation,
                black: None,
            }),
            Color::Black => {
                if let Some(entry) = self.history.last_mut() {
                    entry.black = Some(notation);
                } else {
                    // A game seeded from a FEN with Black to move has no
                    // white half to pair with.
                    self.history.push(HistoryEntry {
                        number: self.fullmove_number,
                        white: "...".to_string(),
                        black: Some(notation),
                    });
                }
                self.fullmove_number += 1;
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
