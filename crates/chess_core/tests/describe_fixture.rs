//! Narration of every move in the reference puzzle position.
//!
//! The position has no kings for black and a black pawn on the first rank,
//! so it is read through the lenient `Snapshot` rather than a rules board.

use chess_core::{describe, Snapshot};

const FIXTURE: &str = "1n5n/B1PPP1B1/1r1rN1N1/P1P5/8/1rb1PQK1/qQn5/1p2BRN1 w - -";

fn say(uci: &str) -> String {
    let board = Snapshot::from_fen(FIXTURE).unwrap();
    describe(&board, uci.parse().unwrap()).unwrap()
}

#[test]
fn test_queen_captures_each_piece_type() {
    assert_eq!(say("b2a2"), "queen takes queen");
    assert_eq!(say("b2b3"), "queen takes rook");
    assert_eq!(say("b2c3"), "queen takes bishop");
    assert_eq!(say("b2c2"), "queen takes knight");
    assert_eq!(say("b2b1"), "queen takes pawn");
}

#[test]
fn test_quiet_move_for_every_piece_type() {
    assert_eq!(say("e1d2"), "bishop to d2");
    assert_eq!(say("f1f2"), "rook to f2");
    assert_eq!(say("g1h3"), "knight to h3");
    assert_eq!(say("e3e4"), "pawn to e4");
    assert_eq!(say("f3f4"), "queen to f4");
    assert_eq!(say("g3g4"), "king to g4");
}

#[test]
fn test_two_pawns_attack_the_same_rook() {
    assert_eq!(say("a5b6"), "a5 takes rook");
}

#[test]
fn test_one_pawn_two_rooks() {
    assert_eq!(say("c5d6"), "pawn takes d6");
}

#[test]
fn test_attacker_and_victim_both_ambiguous() {
    assert_eq!(say("c5b6"), "c5 takes b6");
}

#[test]
fn test_two_knights_reach_the_same_square() {
    assert_eq!(say("e6f8"), "e6 to f8");
    assert_eq!(say("g6f8"), "g6 to f8");
}

#[test]
fn test_unrelated_bishop_captures() {
    assert_eq!(say("a7b8"), "a7 takes knight");
    assert_eq!(say("g7h8"), "g7 takes knight");
}

#[test]
fn test_neighbouring_pawns_push_unambiguously() {
    assert_eq!(say("d7d8"), "pawn to d8");
}

#[test]
fn test_empty_origin_fails() {
    let board = Snapshot::from_fen(FIXTURE).unwrap();
    let err = describe(&board, "a1a2".parse().unwrap()).unwrap_err();
    assert_eq!(err.to_string(), "invalid move: no piece on a1");
}
