//! Negamax search with alpha-beta pruning

use chess_core::{
    cozy_chess::{Board, Move},
    is_fifty_move_draw, is_insufficient_material, legal_moves, TimeControl,
};

use crate::eval::evaluate;

/// Score of being checkmated, from the loser's side.
pub const MATE_SCORE: i32 = 100_000;

/// Result from pick_best_move indicating whether search completed or was stopped.
pub struct SearchOutcome {
    /// Best move and its score (if any legal moves exist)
    pub best_move: Option<(Move, i32)>,
    /// Score of the searched position itself, from the side to move
    pub score: i32,
    /// True if search was stopped early due to time
    pub stopped: bool,
}

/// Searches the position and returns the best move with its score.
///
/// A position without legal moves scores `-MATE_SCORE` when in check and 0
/// otherwise. If the clock runs out before a single root move finishes, the
/// static evaluation stands in for the score.
pub fn pick_best_move(board: &Board, depth: u8, nodes: &mut u64, tc: &TimeControl) -> SearchOutcome {
    let moves = legal_moves(board);
    if moves.is_empty() {
        return SearchOutcome {
            best_move: None,
            score: terminal_score(board),
            stopped: false,
        };
    }

    let mut best: Option<(Move, i32)> = None;
    let mut stopped = false;

    let mut history = Vec::with_capacity(depth as usize + 1);
    history.push(board.hash());

    for mv in moves.iter().copied() {
        if tc.should_check_time(*nodes) && tc.check_time() {
            stopped = true;
            break;
        }

        let mut child = board.clone();
        child.play_unchecked(mv);
        history.push(child.hash());
        *nodes += 1;

        let (score, was_stopped) = negamax(
            &child,
            depth.saturating_sub(1),
            -MATE_SCORE * 2,
            MATE_SCORE * 2,
            &mut history,
            nodes,
            tc,
        );
        let score = -score;
        history.pop();

        if was_stopped {
            stopped = true;
            break;
        }
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((mv, score));
        }
    }

    // Out of time before any root move finished: fall back to the first move.
    let best = best.or_else(|| Some((moves[0], evaluate(board))));
    SearchOutcome {
        score: best.map_or(0, |(_, s)| s),
        best_move: best,
        stopped,
    }
}

fn terminal_score(board: &Board) -> i32 {
    if board.checkers().is_empty() {
        0
    } else {
        -MATE_SCORE
    }
}

/// Recursive negamax search with alpha-beta pruning.
///
/// Returns (score, stopped) where stopped indicates if search was aborted due to time.
fn negamax(
    board: &Board,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    history: &mut Vec<u64>,
    nodes: &mut u64,
    tc: &TimeControl,
) -> (i32, bool) {
    if tc.should_check_time(*nodes) && tc.check_time() {
        return (0, true);
    }

    let moves = legal_moves(board);
    if moves.is_empty() {
        return (terminal_score(board), false);
    }

    if is_fifty_move_draw(board) || is_insufficient_material(board) {
        return (0, false);
    }
    let key = board.hash();
    if history.iter().filter(|&&k| k == key).count() >= 3 {
        return (0, false);
    }

    if depth == 0 {
        return (evaluate(board), false);
    }

    let mut best = -MATE_SCORE * 2;
    for mv in moves {
        let mut child = board.clone();
        child.play_unchecked(mv);
        history.push(child.hash());
        *nodes += 1;

        let (score, stopped) = negamax(&child, depth - 1, -beta, -alpha, history, nodes, tc);
        let score = -score;
        history.pop();

        if stopped {
            return (best, true);
        }

        best = best.max(score);
        alpha = alpha.max(best);
        if alpha >= beta {
            break; // Beta cutoff
        }
    }

    (best, false)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
