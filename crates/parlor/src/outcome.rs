//! How a game ended and what that means for each side.

use std::fmt;

use chess_core::{
    color_name,
    cozy_chess::{Board, Color},
    is_fifty_move_draw, is_insufficient_material, legal_moves, RepetitionHistory,
};
use serde::{Deserialize, Serialize};

/// Result of a single game for one player
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EndReason {
    Checkmate,
    Stalemate,
    FiftyMoveRule,
    Repetition,
    InsufficientMaterial,
    Resignation,
    /// The configured ply cap was reached.
    MoveLimit,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            EndReason::Checkmate => "checkmate",
            EndReason::Stalemate => "stalemate",
            EndReason::FiftyMoveRule => "fifty-move rule",
            EndReason::Repetition => "threefold repetition",
            EndReason::InsufficientMaterial => "insufficient material",
            EndReason::Resignation => "resignation",
            EndReason::MoveLimit => "move limit",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    /// None for a draw
    pub winner: Option<Color>,
    pub reason: EndReason,
}

impl GameOutcome {
    pub fn win(winner: Color, reason: EndReason) -> Self {
        Self {
            winner: Some(winner),
            reason,
        }
    }

    pub fn draw(reason: EndReason) -> Self {
        Self {
            winner: None,
            reason,
        }
    }

    pub fn result_for(&self, color: Color) -> GameResult {
        match self.winner {
            None => GameResult::Draw,
            Some(winner) if winner == color => GameResult::Win,
            Some(_) => GameResult::Loss,
        }
    }

    /// PGN-style score: "1-0", "0-1" or "1/2-1/2".
    pub fn score(&self) -> &'static str {
        match self.winner {
            Some(Color::White) => "1-0",
            Some(Color::Black) => "0-1",
            None => "1/2-1/2",
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner {
            Some(winner) => write!(f, "{} wins by {} ({})", color_name(winner), self.reason, self.score()),
            None => write!(f, "draw by {} ({})", self.reason, self.score()),
        }
    }
}

/// Decide whether the game in `board` is over by the rules.
///
/// Checks, in order: checkmate, stalemate, fifty-move rule, insufficient
/// material, threefold repetition. Resignation and the ply cap are the
/// referee's business.
pub fn adjudicate(board: &Board, history: &RepetitionHistory) -> Option<GameOutcome> {
    let to_move = board.side_to_move();
    if legal_moves(board).is_empty() {
        return Some(if board.checkers().is_empty() {
            GameOutcome::draw(EndReason::Stalemate)
        } else {
            GameOutcome::win(!to_move, EndReason::Checkmate)
        });
    }
    if is_fifty_move_draw(board) {
        return Some(GameOutcome::draw(EndReason::FiftyMoveRule));
    }
    if is_insufficient_material(board) {
        return Some(GameOutcome::draw(EndReason::InsufficientMaterial));
    }
    if history.is_threefold(board) {
        return Some(GameOutcome::draw(EndReason::Repetition));
    }
    None
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod outcome_tests;
