pub mod attacks;
pub mod board;
pub mod describe;
pub mod draw;
pub mod error;
pub mod eval;
pub mod notation;
pub mod oracle;
pub mod time_control;
pub mod types;

// Re-export the rules library so downstream crates agree on one version
pub use cozy_chess;

pub use board::Snapshot;
pub use draw::{is_fifty_move_draw, is_insufficient_material, RepetitionHistory};
pub use describe::{describe, describe_ply, move_from_indices, NULL_MOVE_PHRASE};
pub use error::{DescribeError, EvalError, FenError, NotationError};
pub use eval::{Evaluator, SearchResult};
pub use notation::*;
pub use oracle::BoardOracle;
pub use time_control::*;
pub use types::*;
