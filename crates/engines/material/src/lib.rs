//! Material Evaluator
//!
//! Alpha-beta search over cozy-chess boards with a material-only
//! evaluation. It lets the parlor's computer player think without an
//! external engine process.

mod eval;
mod search;

use chess_core::{cozy_chess::Board, EvalError, Evaluator, SearchLimits, SearchResult};
use tracing::debug;

pub use eval::{evaluate, PIECE_VALUES};
pub use search::MATE_SCORE;

/// Negamax evaluator with alpha-beta pruning and a material score.
///
/// - Checkmate scores `MATE_SCORE`, stalemate and other draws score 0
/// - Fifty-move rule, repetition and dead positions end a line early
/// - Respects the time control in [`SearchLimits`]
#[derive(Debug, Clone, Default)]
pub struct MaterialEvaluator {
    /// Node counter for statistics
    nodes: u64,
}

impl MaterialEvaluator {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Evaluator for MaterialEvaluator {
    fn search(&mut self, board: &Board, limits: &SearchLimits) -> Result<SearchResult, EvalError> {
        self.nodes = 0;
        limits.start();

        let outcome = search::pick_best_move(board, limits.depth, &mut self.nodes, &limits.time_control);
        debug!(
            nodes = self.nodes,
            score = outcome.score,
            stopped = outcome.stopped,
            "material search finished"
        );

        Ok(SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.score,
            depth: limits.depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
        })
    }

    fn name(&self) -> &str {
        "Material v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
