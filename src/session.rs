//! Interactive session: one game wired to a score sink.
//!
//! The session owns the game state exclusively; callers drive it with
//! "selected square" queries and chosen moves. Terminal outcomes are
//! reported to the sink fire-and-forget: a failed report is logged and the
//! already-terminal game is returned unchanged.

use std::sync::Arc;

use crate::board::{Color, Move, MoveError, Square};
use crate::game::{GameState, Outcome};
use crate::score::{ScoreError, ScoreSink, ScoreSnapshot};

pub struct Session {
    game: GameState,
    sink: Arc<dyn ScoreSink + Send + Sync>,
}

impl Session {
    #[must_use]
    pub fn new(sink: Arc<dyn ScoreSink + Send + Sync>) -> Self {
        Session {
            game: GameState::new(),
            sink,
        }
    }

    #[inline]
    #[must_use]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Legal destinations for the piece on `origin`, for rendering.
    #[must_use]
    pub fn legal_moves(&self, origin: Square) -> Vec<Move> {
        self.game.legal_moves(origin)
    }

    /// Play a move; a terminal outcome is tallied with the sink.
    pub fn play(&mut self, origin: Square, mv: &Move) -> Result<Option<Outcome>, MoveError> {
        let outcome = self.game.apply_move(origin, mv)?;
        if let Some(outcome) = outcome {
            self.publish(outcome);
        }
        Ok(outcome)
    }

    pub fn resign(&mut self, color: Color) -> Result<Outcome, MoveError> {
        let outcome = self.game.resign(color)?;
        self.publish(outcome);
        Ok(outcome)
    }

    pub fn offer_draw(&mut self) -> Result<Outcome, MoveError> {
        let outcome = self.game.offer_draw()?;
        self.publish(outcome);
        Ok(outcome)
    }

    /// Current counters from the sink.
    pub fn scores(&self) -> Result<ScoreSnapshot, ScoreError> {
        self.sink.fetch()
    }

    /// Drop the finished (or abandoned) game and start a fresh one.
    pub fn reset(&mut self) {
        self.game = GameState::new();
    }

    fn publish(&self, outcome: Outcome) {
        match self.sink.report(outcome.result()) {
            Ok(snapshot) => log::debug!(
                "reported {} result, counters now {}/{}/{}",
                outcome.result(),
                snapshot.white_wins,
                snapshot.black_wins,
                snapshot.draws
            ),
            Err(err) => log::warn!("score report failed: {err}"),
        }
    }
}
