use std::{io, path::PathBuf};

use chess_core::{DescribeError, EvalError, FenError, NotationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParlorError {
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
    #[error("save file {path} is corrupt: {source}")]
    CorruptSave {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not encode save data: {0}")]
    EncodeSave(#[source] serde_json::Error),
    #[error("config {path}: {reason}")]
    Config { path: PathBuf, reason: String },
    #[error("unknown code {0:?} (try *help)")]
    UnknownCode(String),
    #[error("code *{code} {reason}")]
    BadCodeArgument { code: &'static str, reason: String },
    /// A player ran out of input (closed terminal, exhausted script).
    #[error("{player} has no more input")]
    InputClosed { player: String },
    #[error(transparent)]
    Fen(#[from] FenError),
    #[error(transparent)]
    Notation(#[from] NotationError),
    #[error(transparent)]
    Describe(#[from] DescribeError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl ParlorError {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParlorError>;
