//! Attack oracle tests.

use super::sq;
use crate::board::{Board, Color};

#[test]
fn pawn_attacks_forward_diagonals_only() {
    let board = Board::from_fen("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1");

    assert!(board.is_square_attacked(sq("d5"), Color::White));
    assert!(board.is_square_attacked(sq("f5"), Color::White));
    assert!(!board.is_square_attacked(sq("e5"), Color::White));
    assert!(!board.is_square_attacked(sq("d3"), Color::White));
    assert!(!board.is_square_attacked(sq("f3"), Color::White));
}

#[test]
fn black_pawn_attacks_point_down_the_board() {
    let board = Board::from_fen("4k3/8/8/4p3/8/8/8/4K3 w - - 0 1");

    assert!(board.is_square_attacked(sq("d4"), Color::Black));
    assert!(board.is_square_attacked(sq("f4"), Color::Black));
    assert!(!board.is_square_attacked(sq("d6"), Color::Black));
}

#[test]
fn knight_attacks_ignore_occupancy_between() {
    let board = Board::from_fen("4k3/8/8/8/8/2N5/PPPP4/4K3 w - - 0 1");
    assert!(board.is_square_attacked(sq("b5"), Color::White));
    assert!(board.is_square_attacked(sq("d5"), Color::White));
    assert!(board.is_square_attacked(sq("e4"), Color::White));
    assert!(!board.is_square_attacked(sq("c4"), Color::White));
}

#[test]
fn slider_attack_is_blocked_by_first_occupant() {
    let board = Board::from_fen("4k3/8/8/8/3r4/3P4/8/3QK3 w - - 0 1");

    // The rook attacks down to the pawn but not through it.
    assert!(board.is_square_attacked(sq("d3"), Color::Black));
    assert!(!board.is_square_attacked(sq("d2"), Color::Black));
    assert!(!board.is_square_attacked(sq("d1"), Color::Black));

    // Same ray rules for the queen looking up.
    assert!(board.is_square_attacked(sq("d2"), Color::White));
    assert!(!board.is_square_attacked(sq("d4"), Color::White));
}

#[test]
fn queen_attacks_both_direction_sets() {
    let board = Board::from_fen("4k3/8/8/3Q4/8/8/8/4K3 w - - 0 1");
    assert!(board.is_square_attacked(sq("d8"), Color::White));
    assert!(board.is_square_attacked(sq("a5"), Color::White));
    assert!(board.is_square_attacked(sq("g8"), Color::White));
    assert!(board.is_square_attacked(sq("a2"), Color::White));
    assert!(!board.is_square_attacked(sq("c3"), Color::White));
}

#[test]
fn kings_attack_adjacent_squares() {
    let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    assert!(board.is_square_attacked(sq("d2"), Color::White));
    assert!(board.is_square_attacked(sq("f7"), Color::Black));
    assert!(!board.is_square_attacked(sq("e3"), Color::White));
}

#[test]
fn check_detection_finds_the_king() {
    let board = Board::from_fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1");
    assert!(board.is_in_check(Color::White));
    assert!(!board.is_in_check(Color::Black));
    assert_eq!(board.find_king(Color::White), Some(sq("e1")));
    assert_eq!(board.find_king(Color::Black), Some(sq("e8")));
}
