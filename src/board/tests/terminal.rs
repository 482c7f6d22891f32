//! Terminal-state classification tests.

use super::sq;
use crate::board::{Color, MoveError, Square};
use crate::game::{GameState, Outcome};
use crate::score::GameResult;

fn play(game: &mut GameState, from: &str, to: &str) -> Option<Outcome> {
    let from: Square = sq(from);
    let to: Square = sq(to);
    let mv = game
        .legal_moves(from)
        .into_iter()
        .find(|m| m.to == to)
        .expect("move should be legal");
    game.apply_move(from, &mv).expect("move should apply")
}

#[test]
fn fools_mate_is_checkmate_for_black() {
    let mut game = GameState::new();
    assert_eq!(play(&mut game, "f2", "f3"), None);
    assert_eq!(play(&mut game, "e7", "e5"), None);
    assert_eq!(play(&mut game, "g2", "g4"), None);

    let outcome = play(&mut game, "d8", "h4");
    assert_eq!(outcome, Some(Outcome::Checkmate(Color::Black)));
    assert_eq!(outcome.unwrap().result(), GameResult::BlackWins);
    assert!(game.is_over());

    let last = game.history().last().unwrap();
    assert_eq!(last.number, 2);
    assert_eq!(last.black.as_deref(), Some("Qh4#"));
}

#[test]
fn no_transitions_accepted_after_mate() {
    let mut game = GameState::new();
    play(&mut game, "f2", "f3");
    play(&mut game, "e7", "e5");
    play(&mut game, "g2", "g4");
    play(&mut game, "d8", "h4");

    assert!(game.legal_moves(sq("e2")).is_empty());
    let mv = crate::board::Move::quiet(sq("e3"));
    assert_eq!(game.apply_move(sq("e2"), &mv), Err(MoveError::GameOver));
    assert_eq!(game.resign(Color::White), Err(MoveError::GameOver));
    assert_eq!(game.offer_draw(), Err(MoveError::GameOver));
}

#[test]
fn back_rank_mate_is_checkmate_for_white() {
    let mut game = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
    let outcome = play(&mut game, "a1", "a8");
    assert_eq!(outcome, Some(Outcome::Checkmate(Color::White)));
    assert_eq!(game.history()[0].white, "Ra8#");
}

#[test]
fn cornered_king_without_check_is_stalemate() {
    let mut game = GameState::from_fen("7k/8/8/6Q1/8/8/8/6K1 w - - 0 1");
    let outcome = play(&mut game, "g5", "g6");
    assert_eq!(outcome, Some(Outcome::Stalemate));
    assert_eq!(outcome.unwrap().result(), GameResult::Draw);
    assert!(game.is_over());
}

#[test]
fn check_with_an_escape_continues_the_game() {
    let mut game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
    let outcome = play(&mut game, "a1", "a8");
    assert_eq!(outcome, None);
    assert!(!game.is_over());
    assert_eq!(game.history()[0].white, "Ra8+");
    assert!(game.board().is_in_check(Color::Black));
}

#[test]
fn classification_is_exclusive_and_exhaustive() {
    // Mate: in check, no reply.
    let mate = GameState::from_fen("R3k3/8/4K3/8/8/8/8/8 b - - 0 1");
    assert!(mate.board().is_in_check(Color::Black));
    assert!(!mate.board().has_any_legal_move(Color::Black));

    // Stalemate: not in check, no reply.
    let stale = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(!stale.board().is_in_check(Color::Black));
    assert!(!stale.board().has_any_legal_move(Color::Black));

    // Ongoing: replies exist.
    let open = GameState::new();
    assert!(open.board().has_any_legal_move(Color::White));
}

#[test]
fn resignation_wins_for_the_opponent_on_any_board() {
    let mut game = GameState::new();
    let outcome = game.resign(Color::White).unwrap();
    assert_eq!(outcome, Outcome::Resignation(Color::Black));
    assert_eq!(outcome.result(), GameResult::BlackWins);
    assert!(game.is_over());

    let mut late = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
    assert_eq!(
        late.resign(Color::Black).unwrap(),
        Outcome::Resignation(Color::White)
    );
}

#[test]
fn draw_offer_ends_the_game_as_a_draw() {
    let mut game = GameState::new();
    let outcome = game.offer_draw().unwrap();
    assert_eq!(outcome, Outcome::DrawOffer);
    assert_eq!(outcome.result(), GameResult::Draw);
    assert!(game.is_over());
    assert_eq!(game.offer_draw(), Err(MoveError::GameOver));
}

#[test]
fn history_pairs_white_and_black_notation() {
    let mut game = GameState::new();
    play(&mut game, "e2", "e4");
    play(&mut game, "e7", "e5");
    play(&mut game, "g1", "f3");

    let history = game.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].number, 1);
    assert_eq!(history[0].white, "e4");
    assert_eq!(history[0].black.as_deref(), Some("e5"));
    assert_eq!(history[1].number, 2);
    assert_eq!(history[1].white, "Nf3");
    assert_eq!(history[1].black, None);
    assert_eq!(game.fullmove_number(), 2);
}

#[test]
fn capture_notation_marks_pawn_file_and_x() {
    let mut game = GameState::new();
    play(&mut game, "e2", "e4");
    play(&mut game, "d7", "d5");
    play(&mut game, "e4", "d5");

    assert_eq!(game.history()[1].white, "exd5");
}
