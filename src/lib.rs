pub mod board;
pub mod game;
pub mod score;
pub mod session;

pub use board::{Board, Color, Move, MoveError, MoveFlag, Piece, Square};
pub use game::{GameState, Outcome};
pub use score::{GameResult, ScoreBoard, ScoreError, ScoreSink, ScoreSnapshot};
pub use session::Session;
