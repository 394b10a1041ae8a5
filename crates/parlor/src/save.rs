//! Progress kept between runs: computer difficulty and recent positions.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    difficulty::DEFAULT_DIFFICULTY,
    error::{ParlorError, Result},
};

/// How many recent positions are remembered for `*prev`.
pub const KEPT_FENS: usize = 4;

/// Contents of the save file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    #[serde(default = "default_difficulty")]
    pub difficulty: f64,
    /// Most recent first
    #[serde(default)]
    pub fens: Vec<String>,
}

fn default_difficulty() -> f64 {
    DEFAULT_DIFFICULTY
}

impl Default for SaveData {
    fn default() -> Self {
        Self {
            difficulty: DEFAULT_DIFFICULTY,
            fens: Vec::new(),
        }
    }
}

impl SaveData {
    /// Remember `fen` as the newest position, forgetting the oldest past [`KEPT_FENS`].
    pub fn push_fen(&mut self, fen: impl Into<String>) {
        self.fens.insert(0, fen.into());
        self.fens.truncate(KEPT_FENS);
    }
}

/// [`SaveData`] bound to the JSON file it lives in.
///
/// A store without a path keeps everything in memory.
#[derive(Debug, Clone, Default)]
pub struct SaveStore {
    path: Option<PathBuf>,
    data: SaveData,
}

impl SaveStore {
    /// Open the save file at `path`, starting fresh if it does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let data = Self::load(&path)?;
        Ok(Self {
            path: Some(path),
            data,
        })
    }

    pub fn in_memory(data: SaveData) -> Self {
        Self { path: None, data }
    }

    /// Read save data from `path`. A missing or empty file is the default.
    pub fn load(path: &Path) -> Result<SaveData> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(SaveData::default()),
            Err(e) => return Err(ParlorError::io(format!("failed to read {}", path.display()), e)),
        };
        if contents.trim().is_empty() {
            return Ok(SaveData::default());
        }
        serde_json::from_str(&contents).map_err(|source| ParlorError::CorruptSave {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the current data out (no-op for in-memory stores).
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .map_err(|e| ParlorError::io(format!("failed to create {}", dir.display()), e))?;
        }
        let json = serde_json::to_string_pretty(&self.data).map_err(ParlorError::EncodeSave)?;
        fs::write(path, json)
            .map_err(|e| ParlorError::io(format!("failed to write {}", path.display()), e))?;
        debug!(path = %path.display(), "save file written");
        Ok(())
    }

    /// Change the data and write it out.
    pub fn update(&mut self, change: impl FnOnce(&mut SaveData)) -> Result<()> {
        change(&mut self.data);
        self.save()
    }

    pub fn data(&self) -> &SaveData {
        &self.data
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[cfg(test)]
#[path = "save_tests.rs"]
mod save_tests;
