//! Special inputs that start with `*` instead of a move.
//!
//! A code is addressed by name (`*show`) or by its index in [`CODES`]
//! (`*1`). Anything after the first space is the code's argument.

use crate::error::{ParlorError, Result};

pub const CODE_PREFIX: char = '*';

/// Every code by name with its help line, in index order.
pub const CODES: [(&str, &str); 7] = [
    ("help", "show this help message"),
    ("show", "show ascii art of the board"),
    ("fen", "load a given fen, e.g. *fen 4k3/8/8/8/8/8/8/4K3 w - -"),
    ("prev", "list saved boards, or load one with *prev <n>"),
    ("resign", "resign, forfeiting the game"),
    ("pieces", "read out where every piece stands"),
    ("reset", "start the game over"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Code {
    Help,
    Show,
    Fen(String),
    Prev(Option<usize>),
    Resign,
    Pieces,
    Reset,
}

pub fn is_code(raw: &str) -> bool {
    raw.trim_start().starts_with(CODE_PREFIX)
}

impl Code {
    pub fn parse(raw: &str) -> Result<Self> {
        let body = raw
            .trim()
            .strip_prefix(CODE_PREFIX)
            .ok_or_else(|| ParlorError::UnknownCode(raw.to_string()))?;
        let (word, argument) = match body.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (body, ""),
        };

        let name = match word.parse::<usize>() {
            Ok(idx) => CODES
                .get(idx)
                .map(|(name, _)| *name)
                .ok_or_else(|| ParlorError::UnknownCode(raw.trim().to_string()))?,
            Err(_) => word,
        };

        let code = match name.to_ascii_lowercase().as_str() {
            "help" => Code::Help,
            "show" => Code::Show,
            "fen" if argument.is_empty() => {
                return Err(ParlorError::BadCodeArgument {
                    code: "fen",
                    reason: "needs a FEN to load".to_string(),
                })
            }
            "fen" => Code::Fen(argument.to_string()),
            "prev" if argument.is_empty() => Code::Prev(None),
            "prev" => {
                let n = argument.parse().map_err(|_| ParlorError::BadCodeArgument {
                    code: "prev",
                    reason: format!("expects a board number, got {argument:?}"),
                })?;
                Code::Prev(Some(n))
            }
            "resign" => Code::Resign,
            "pieces" => Code::Pieces,
            "reset" => Code::Reset,
            _ => return Err(ParlorError::UnknownCode(raw.trim().to_string())),
        };
        Ok(code)
    }
}

pub fn help_text() -> String {
    let mut text = String::from(
        "Chess moves are entered as UCI (e2e4) or keypad digits (5254). \
         Special codes start with an asterisk \"*\".\nCodes available:\n",
    );
    for (i, (name, description)) in CODES.iter().enumerate() {
        text.push_str(&format!("  (*{i}) *{name} - {description}\n"));
    }
    text
}

#[cfg(test)]
#[path = "codes_tests.rs"]
mod codes_tests;
