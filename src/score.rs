//! Score collaborator boundary: cumulative win/loss/draw counters.
//!
//! The engine treats the counter store as best-effort telemetry. A report
//! happens after the terminal classification is complete and a failure
//! never rolls it back; callers log and continue.

use std::fmt;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Terminal game result as the counter store keys it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    #[serde(rename = "white")]
    WhiteWins,
    #[serde(rename = "black")]
    BlackWins,
    Draw,
}

impl GameResult {
    /// The wire key for this result.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameResult::WhiteWins => "white",
            GameResult::BlackWins => "black",
            GameResult::Draw => "draw",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cumulative counters as exchanged with the store.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSnapshot {
    pub white_wins: u64,
    pub black_wins: u64,
    pub draws: u64,
}

/// Error type for counter-store failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// The store could not be reached or rejected the request
    Unavailable { reason: String },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::Unavailable { reason } => {
                write!(f, "Score store unavailable: {reason}")
            }
        }
    }
}

impl std::error::Error for ScoreError {}

/// An opaque key-value counter store for finished games.
pub trait ScoreSink {
    /// Tally one finished game and return the updated counters.
    fn report(&self, result: GameResult) -> Result<ScoreSnapshot, ScoreError>;

    /// Read the current counters without changing them.
    fn fetch(&self) -> Result<ScoreSnapshot, ScoreError>;
}

/// In-memory, lock-guarded counter store.
#[derive(Debug, Default)]
pub struct ScoreBoard {
    counts: Mutex<ScoreSnapshot>,
}

impl ScoreBoard {
    #[must_use]
    pub fn new() -> Self {
        ScoreBoard::default()
    }
}

impl ScoreSink for ScoreBoard {
    fn report(&self, result: GameResult) -> Result<ScoreSnapshot, ScoreError> {
        let mut counts = self.counts.lock();
        match result {
            GameResult::WhiteWins => counts.white_wins += 1,
            GameResult::BlackWins => counts.black_wins += 1,
            GameResult::Draw => counts.draws += 1,
        }
        Ok(*counts)
    }

    fn fetch(&self) -> Result<ScoreSnapshot, ScoreError> {
        Ok(*self.counts.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate_per_result() {
        let board = ScoreBoard::new();
        board.report(GameResult::WhiteWins).unwrap();
        board.report(GameResult::WhiteWins).unwrap();
        board.report(GameResult::Draw).unwrap();
        let snapshot = board.report(GameResult::BlackWins).unwrap();

        assert_eq!(snapshot.white_wins, 2);
        assert_eq!(snapshot.black_wins, 1);
        assert_eq!(snapshot.draws, 1);
        assert_eq!(board.fetch().unwrap(), snapshot);
    }

    #[test]
    fn snapshot_serializes_camel_case() {
        let snapshot = ScoreSnapshot {
            white_wins: 3,
            black_wins: 1,
            draws: 2,
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"{"whiteWins":3,"blackWins":1,"draws":2}"#);

        let parsed: ScoreSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn result_wire_keys() {
        assert_eq!(GameResult::WhiteWins.as_str(), "white");
        assert_eq!(GameResult::BlackWins.as_str(), "black");
        assert_eq!(GameResult::Draw.as_str(), "draw");
        assert_eq!(
            serde_json::to_string(&GameResult::WhiteWins).unwrap(),
            r#""white""#
        );
    }
}
