use super::*;
use std::time::Duration;

fn board(fen: &str) -> Board {
    Board::from_fen(fen, false).unwrap()
}

fn unlimited() -> TimeControl {
    let tc = TimeControl::new(None);
    tc.start();
    tc
}

#[test]
fn test_pick_best_move_start_position() {
    let mut nodes = 0;
    let result = pick_best_move(&Board::default(), 3, &mut nodes, &unlimited());
    assert!(result.best_move.is_some());
    assert!(!result.stopped);
    assert!(nodes > 0);
}

#[test]
fn test_pick_best_move_finds_mate_in_one() {
    // Back-rank mate: Qe8#
    let pos = board("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1");
    let mut nodes = 0;
    let result = pick_best_move(&pos, 2, &mut nodes, &unlimited());
    let (mv, score) = result.best_move.unwrap();
    assert_eq!(mv, "e1e8".parse().unwrap());
    assert_eq!(score, MATE_SCORE);
}

#[test]
fn test_terminal_positions() {
    let mut nodes = 0;

    // Fool's mate, white to move and mated
    let mated = board("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    let result = pick_best_move(&mated, 3, &mut nodes, &unlimited());
    assert!(result.best_move.is_none());
    assert_eq!(result.score, -MATE_SCORE);

    let stalemate = board("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    let result = pick_best_move(&stalemate, 3, &mut nodes, &unlimited());
    assert!(result.best_move.is_none());
    assert_eq!(result.score, 0);
}

#[test]
fn test_expired_clock_still_returns_a_move() {
    let tc = TimeControl::new(Some(Duration::ZERO));
    tc.start();
    let mut nodes = 0;
    let result = pick_best_move(&Board::default(), 4, &mut nodes, &tc);
    assert!(result.stopped);
    assert!(result.best_move.is_some());
    assert_eq!(result.score, 0);
}
