//! The seam between the parlor and whatever scores positions.

use cozy_chess::{Board, Move};

use crate::{error::EvalError, notation::move_to_uci, time_control::SearchLimits};

/// Outcome of searching one position.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found (None if the side to move has no legal moves)
    pub best_move: Option<Move>,
    /// Centipawns from the side to move's point of view
    pub score: i32,
    /// Depth actually completed
    pub depth: u8,
    pub nodes: u64,
    /// Whether the deadline cut the search short
    pub stopped: bool,
}

/// Something that can judge chess positions.
///
/// Only [`search`](Evaluator::search) is required; scoring a single
/// candidate move searches the position after it and flips the sign.
pub trait Evaluator: Send {
    /// Search `board` within `limits`.
    fn search(&mut self, board: &Board, limits: &SearchLimits) -> Result<SearchResult, EvalError>;

    fn name(&self) -> &str;

    /// Forget anything remembered from a previous game.
    fn new_game(&mut self) {}

    /// Centipawn score of playing `mv`, from the mover's point of view.
    fn score_move(
        &mut self,
        board: &Board,
        mv: Move,
        limits: &SearchLimits,
    ) -> Result<i32, EvalError> {
        if !board.is_legal(mv) {
            return Err(EvalError::IllegalMove(move_to_uci(board, mv)));
        }
        let mut after = board.clone();
        after.play_unchecked(mv);
        let reply = self.search(&after, limits)?;
        Ok(-reply.score)
    }

    fn best_move(&mut self, board: &Board, limits: &SearchLimits) -> Result<Option<Move>, EvalError> {
        Ok(self.search(board, limits)?.best_move)
    }
}
