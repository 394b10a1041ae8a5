//! Thinking-time limits for evaluators.
//!
//! A computer player spends its turn scoring every legal move, so the turn
//! budget is split across the moves and each evaluation gets its own
//! [`SearchLimits`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// The first move of a game never gets more than this, so play starts quickly.
pub const OPENING_TURN_CAP: Duration = Duration::from_secs(5);

/// Limits that bound one evaluation.
///
/// Evaluators stop at whichever of depth or time runs out first.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum search depth in plies
    pub depth: u8,
    /// Wall-clock allowance (None = unlimited)
    pub move_time: Option<Duration>,
    pub time_control: TimeControl,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
            time_control: TimeControl::new(None),
        }
    }

    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.time_control.is_stopped()
    }

    /// Start the clock. Call this when the evaluation begins.
    pub fn start(&self) {
        self.time_control.start();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(3)
    }
}

/// Shared stop flag plus a clock.
///
/// Cloning shares the flag, so a clone handed to another thread can stop the
/// evaluation early.
#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    start_time: Arc<Mutex<Option<Instant>>>,
    time_limit: Option<Duration>,
    /// Nodes between clock reads.
    check_interval: u64,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: Arc::new(Mutex::new(None)),
            time_limit,
            check_interval: 1024,
        }
    }

    fn started_at(&self) -> Option<Instant> {
        *self
            .start_time
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn start(&self) {
        *self
            .start_time
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(Instant::now());
        self.stopped.store(false, Ordering::SeqCst);
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Read the clock and raise the stop flag once the limit has passed.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }
        if let (Some(limit), Some(start)) = (self.time_limit, self.started_at()) {
            if start.elapsed() >= limit {
                self.stop();
                return true;
            }
        }
        false
    }

    #[inline]
    pub fn should_check_time(&self, nodes: u64) -> bool {
        nodes % self.check_interval == 0
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at()
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Time left before the limit (None if unlimited).
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        Some(limit.saturating_sub(self.elapsed()))
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

/// How long a computer player may think on one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnBudget {
    pub turn_time: Duration,
    pub depth: u8,
}

impl TurnBudget {
    pub fn new(turn_time: Duration, depth: u8) -> Self {
        Self { turn_time, depth }
    }

    /// Thinking time for the whole turn at `fullmove_number`.
    pub fn for_turn(&self, fullmove_number: u16) -> Duration {
        if fullmove_number <= 1 {
            self.turn_time.min(OPENING_TURN_CAP)
        } else {
            self.turn_time
        }
    }

    /// Limits for scoring one of `move_count` candidate moves.
    pub fn per_move(&self, fullmove_number: u16, move_count: usize) -> SearchLimits {
        let share = self.for_turn(fullmove_number) / move_count.max(1) as u32;
        SearchLimits::depth_and_time(self.depth, share)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
