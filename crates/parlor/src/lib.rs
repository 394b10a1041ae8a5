//! Chess Parlor
//!
//! A referee that runs games between players who speak in raw input: UCI
//! moves, keypad digits or `*` codes. Moves are narrated in plain English,
//! the computer opponent adapts its difficulty between games and recent
//! positions are kept in a save file.

pub mod codes;
pub mod computer;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod outcome;
pub mod player;
pub mod referee;
pub mod save;

pub use codes::{help_text, is_code, Code, CODES, CODE_PREFIX};
pub use computer::{ComputerPlayer, DEFAULT_RESIGN_THRESHOLD};
pub use config::{ParlorConfig, PlayerKind};
pub use difficulty::{Difficulty, DEFAULT_DIFFICULTY};
pub use error::{ParlorError, Result};
pub use outcome::{adjudicate, EndReason, GameOutcome, GameResult};
pub use player::{LineSource, MoveReport, Player, ScriptedPlayer, StdinLines, TerminalPlayer, TurnView};
pub use referee::{piece_roll_call, Referee, RefereeConfig};
pub use save::{SaveData, SaveStore, KEPT_FENS};
