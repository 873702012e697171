use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::APP_DIR_NAME;
use crate::error::PersistenceError;

/// Best score seen so far. Never decreases.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct HighScore(u32);

impl HighScore {
    #[must_use]
    pub fn new(best: u32) -> Self {
        Self(best)
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Raises the best score when `score` beats it. Returns whether it changed.
    pub fn record(&mut self, score: u32) -> bool {
        let improved = score > self.0;
        self.0 = self.0.max(score);
        improved
    }
}

/// `{"snakeHighScore": n}`
#[derive(Debug, Serialize, Deserialize)]
struct StoredScore {
    #[serde(rename = "snakeHighScore")]
    best: u32,
}

/// High score kept in a small JSON document on disk.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    /// Store under the user's local data directory.
    #[must_use]
    pub fn in_data_dir() -> Self {
        Self::at(scores_path())
    }

    #[must_use]
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored high score. A missing file is a first run and reads as 0.
    pub fn load(&self) -> Result<u32, PersistenceError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                debug!("no high score at {}", self.path.display());
                return Ok(0);
            }
            Err(source) => {
                return Err(PersistenceError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let stored: StoredScore =
            serde_json::from_str(&raw).map_err(|source| PersistenceError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        Ok(stored.best)
    }

    /// Writes `best`, creating the parent directory first. Zero is never written.
    pub fn save(&self, best: u32) -> Result<(), PersistenceError> {
        if best == 0 {
            return Ok(());
        }

        let write_error = |source: io::Error| PersistenceError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(write_error)?;
        }
        let json = serde_json::to_string_pretty(&StoredScore { best })
            .map_err(|error| write_error(io::Error::other(error)))?;
        fs::write(&self.path, json).map_err(write_error)?;

        debug!("saved high score {best} to {}", self.path.display());
        Ok(())
    }
}

/// `<data_local_dir>/ex-snake/scores.json`, relative to the working
/// directory when the platform has no data directory.
#[must_use]
pub fn scores_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join("scores.json")
}
