//! Settings for a parlor session, loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file) is a valid config:
//!
//! ```toml
//! turn_time = "10s"
//! save_path = "assets/save.json"
//! white = "computer"
//! black = "terminal"
//! ```

use std::{
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    computer::DEFAULT_RESIGN_THRESHOLD,
    error::{ParlorError, Result},
};

/// Who sits on one side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Computer,
    Terminal,
}

impl FromStr for PlayerKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "computer" | "cpu" => Ok(PlayerKind::Computer),
            "terminal" | "human" => Ok(PlayerKind::Terminal),
            other => Err(format!("unknown player kind {other:?} (expected computer or terminal)")),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlayerKind::Computer => "computer",
            PlayerKind::Terminal => "terminal",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParlorConfig {
    /// Thinking time the computer gets per turn, e.g. "10s", "1m 30s"
    #[serde(
        serialize_with = "serialize_duration",
        deserialize_with = "deserialize_duration"
    )]
    pub turn_time: Duration,
    pub save_path: PathBuf,
    /// Plies before a game is drawn (0 = no limit)
    pub max_plies: u32,
    /// Centipawns below which the computer resigns
    pub resign_threshold: i32,
    pub search_depth: u8,
    pub white: PlayerKind,
    pub black: PlayerKind,
    /// Games to play (0 = keep playing)
    pub games: u32,
    /// Fixed seed for the computer's move choice
    pub seed: Option<u64>,
}

impl Default for ParlorConfig {
    fn default() -> Self {
        Self {
            turn_time: Duration::from_secs(10),
            save_path: PathBuf::from("assets/save.json"),
            max_plies: 400,
            resign_threshold: DEFAULT_RESIGN_THRESHOLD,
            search_depth: 3,
            white: PlayerKind::Computer,
            black: PlayerKind::Terminal,
            games: 0,
            seed: None,
        }
    }
}

impl ParlorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| ParlorError::io(format!("failed to read config {}", path.display()), e))?;
        Self::parse(&text).map_err(|reason| ParlorError::Config {
            path: path.to_path_buf(),
            reason,
        })
    }

    pub fn parse(text: &str) -> std::result::Result<Self, String> {
        toml::from_str(text).map_err(|e| e.message().to_string())
    }
}

fn serialize_duration<S: Serializer>(value: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(&humantime::format_duration(*value))
}

fn deserialize_duration<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Duration, D::Error> {
    let text = String::deserialize(deserializer)?;
    humantime::parse_duration(&text).map_err(serde::de::Error::custom)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
