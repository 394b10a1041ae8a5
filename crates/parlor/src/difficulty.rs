//! How strong the computer plays, on a 0..=1 scale.
//!
//! At 1 the computer always plays its best-scored move; lower values widen
//! the pool of top moves it picks from at random.

use serde::{Deserialize, Serialize};

use crate::outcome::GameResult;

pub const DEFAULT_DIFFICULTY: f64 = 0.3;

/// Change applied after each decisive game.
pub const STEP: f64 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Difficulty(f64);

impl Difficulty {
    /// Clamp `value` into 0..=1; anything not finite becomes the default.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self(DEFAULT_DIFFICULTY)
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn harder(self) -> Self {
        Self::new(self.0 + STEP)
    }

    pub fn easier(self) -> Self {
        Self::new(self.0 - STEP)
    }

    /// Adjust after a game the computer played: winning makes it go easier
    /// on its opponent, losing makes it try harder.
    pub fn after(self, computer_result: GameResult) -> Self {
        match computer_result {
            GameResult::Win => self.easier(),
            GameResult::Loss => self.harder(),
            GameResult::Draw => self,
        }
    }

    /// Number of best-first moves to choose among out of `move_count`.
    ///
    /// `max(1, floor(move_count * (1 - difficulty)))`
    pub fn candidate_pool(self, move_count: usize) -> usize {
        let pool = (move_count as f64 * (1.0 - self.0)).floor() as usize;
        pool.max(1)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(DEFAULT_DIFFICULTY)
    }
}

#[cfg(test)]
#[path = "difficulty_tests.rs"]
mod difficulty_tests;
