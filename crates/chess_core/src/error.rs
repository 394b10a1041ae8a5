use thiserror::Error;

/// Why a move could not be put into words.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescribeError {
    /// The move claims to move a piece from an empty square.
    #[error("invalid move: no piece on {square}")]
    InvalidMove { square: String },
    /// Promotion to a pawn or king, or a square index outside the board.
    #[error("malformed move: {0}")]
    MalformedMove(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("FEN is missing the {0} field")]
    MissingField(&'static str),
    #[error("FEN rank {rank} is malformed: {reason}")]
    BadRank { rank: usize, reason: String },
    #[error("unknown piece character {0:?} in FEN")]
    BadPiece(char),
    #[error("invalid side to move {0:?}")]
    BadSide(String),
    #[error("invalid castling field {0:?}")]
    BadCastling(String),
    #[error("invalid en passant square {0:?}")]
    BadEnPassant(String),
    #[error("invalid move counter {0:?}")]
    BadCounter(String),
    /// Parses as FEN but is not a position the rules library accepts.
    #[error("position rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("expected UCI (e.g. \"a2b3\") or keypad digits (e.g. \"1223\"), got {0:?}")]
    Unrecognized(String),
    #[error("digit {digit} is not a file or rank (use 1-8)")]
    BadDigit { digit: char },
    #[error("piece id {0} cannot be promoted to")]
    BadPromotion(char),
    #[error("{0} is not a legal move here")]
    Illegal(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("{0} is not legal in the evaluated position")]
    IllegalMove(String),
    #[error("evaluator {name} failed: {reason}")]
    Engine { name: String, reason: String },
}
