//! The computer opponent.

use chess_core::{
    cozy_chess::{Color, Move},
    legal_moves, move_to_uci, Evaluator, TurnBudget, NULL_MOVE_UCI,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::{
    difficulty::Difficulty,
    error::Result,
    outcome::{GameOutcome, GameResult},
    player::{Player, TurnView},
    save::SaveStore,
};

/// Resign when even the best move is worse than this many centipawns.
pub const DEFAULT_RESIGN_THRESHOLD: i32 = 2000;

const RESIGN_INPUT: &str = "*resign";

/// Plays by scoring every legal move and picking among the best.
///
/// The pool it picks from shrinks as [`Difficulty`] rises. Difficulty is read
/// from the save file when a game starts, unless one was set with
/// [`ComputerPlayer::with_difficulty`], and written back when it ends.
pub struct ComputerPlayer<E> {
    name: String,
    evaluator: E,
    difficulty: Difficulty,
    /// Set by `with_difficulty`; wins over the save file.
    fixed_difficulty: Option<Difficulty>,
    persist_difficulty: bool,
    budget: TurnBudget,
    resign_threshold: i32,
    rng: StdRng,
}

impl<E: Evaluator> ComputerPlayer<E> {
    pub fn new(name: impl Into<String>, evaluator: E, budget: TurnBudget) -> Self {
        Self {
            name: name.into(),
            evaluator,
            difficulty: Difficulty::default(),
            fixed_difficulty: None,
            persist_difficulty: true,
            budget,
            resign_threshold: DEFAULT_RESIGN_THRESHOLD,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_resign_threshold(mut self, centipawns: i32) -> Self {
        self.resign_threshold = centipawns;
        self
    }

    /// Start from `difficulty` instead of the save file's value.
    ///
    /// Results still move it between games.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self.fixed_difficulty = Some(difficulty);
        self
    }

    /// Whether `game_over` writes the adjusted difficulty to the save file.
    ///
    /// The save file holds a single difficulty, so when two computers share
    /// one only the one that persists keeps its adjustment.
    pub fn with_persistence(mut self, persist: bool) -> Self {
        self.persist_difficulty = persist;
        self
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Every legal move with its score, best first.
    ///
    /// Equal scores keep move generation order.
    pub fn ranked_moves(&mut self, view: &TurnView<'_>) -> Result<Vec<(Move, i32)>> {
        let moves = legal_moves(view.board);
        let fullmove = view.board.fullmove_number();
        let mut scored = Vec::with_capacity(moves.len());
        for mv in moves.iter().copied() {
            let limits = self.budget.per_move(fullmove, moves.len());
            let score = self.evaluator.score_move(view.board, mv, &limits)?;
            scored.push((mv, score));
        }
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(scored)
    }
}

impl<E: Evaluator> Player for ComputerPlayer<E> {
    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self, color: Color, store: &SaveStore) -> Result<()> {
        self.difficulty = self
            .fixed_difficulty
            .unwrap_or_else(|| Difficulty::new(store.data().difficulty));
        self.evaluator.new_game();
        info!(
            player = %self.name,
            ?color,
            difficulty = self.difficulty.value(),
            evaluator = self.evaluator.name(),
            "computer ready"
        );
        Ok(())
    }

    fn get_move(&mut self, view: &TurnView<'_>) -> Result<String> {
        let ranked = self.ranked_moves(view)?;
        let Some(&(best, best_score)) = ranked.first() else {
            return Ok(NULL_MOVE_UCI.to_string());
        };
        if best_score < -self.resign_threshold {
            info!(player = %self.name, best_score, "position is hopeless, resigning");
            return Ok(RESIGN_INPUT.to_string());
        }

        let pool = self.difficulty.candidate_pool(ranked.len()).min(ranked.len());
        let (choice, score) = ranked[self.rng.gen_range(0..pool)];
        debug!(
            best = %move_to_uci(view.board, best),
            best_score,
            chosen = %move_to_uci(view.board, choice),
            score,
            pool,
            "computer picked a move"
        );
        Ok(move_to_uci(view.board, choice))
    }

    fn hear(&mut self, _message: &str) -> Result<()> {
        Ok(())
    }

    fn game_over(
        &mut self,
        outcome: &GameOutcome,
        result: GameResult,
        store: &mut SaveStore,
    ) -> Result<()> {
        let before = self.difficulty;
        self.difficulty = before.after(result);
        if self.fixed_difficulty.is_some() {
            self.fixed_difficulty = Some(self.difficulty);
        }
        info!(
            player = %self.name,
            %outcome,
            from = before.value(),
            to = self.difficulty.value(),
            "difficulty adjusted"
        );
        if !self.persist_difficulty {
            return Ok(());
        }
        let value = self.difficulty.value();
        store.update(|data| data.difficulty = value)
    }
}

#[cfg(test)]
#[path = "computer_tests.rs"]
mod computer_tests;
