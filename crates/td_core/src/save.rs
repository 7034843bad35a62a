//! Persistent progress records, one JSON file per difficulty.
//!
//! A missing, unreadable or corrupt file always degrades to the
//! default record; loading never fails. Writing reports I/O errors to
//! the caller, which logs and carries on; persistence problems must
//! never take down a session.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::Difficulty;
use crate::error::Result;

fn default_level() -> u32 {
    1
}

/// Progress persisted across sessions for one difficulty tier.
///
/// Unknown fields in the file are ignored and missing fields take
/// their defaults, so records written by newer builds still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    /// Level the player is currently on.
    #[serde(default = "default_level")]
    pub current_level: u32,
    /// Accumulated score.
    #[serde(default)]
    pub score: u32,
    /// Highest level selectable from the level-select screen.
    #[serde(default = "default_level")]
    pub unlocked_levels: u32,
    /// Lifetime currency gathered, from pickups and generators.
    #[serde(default)]
    pub total_sun_collected: u32,
    /// Lifetime attacker kills.
    #[serde(default)]
    pub total_zombies_killed: u32,
}

impl Default for SaveRecord {
    fn default() -> Self {
        Self {
            current_level: 1,
            score: 0,
            unlocked_levels: 1,
            total_sun_collected: 0,
            total_zombies_killed: 0,
        }
    }
}

/// File-backed store for [`SaveRecord`]s, keyed by difficulty.
#[derive(Debug, Clone)]
pub struct SaveStore {
    dir: PathBuf,
}

impl SaveStore {
    /// Store rooted at `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the record file for `difficulty`.
    #[must_use]
    pub fn path(&self, difficulty: Difficulty) -> PathBuf {
        self.dir.join(format!("game_save_{difficulty}.json"))
    }

    /// Load the record for `difficulty`, falling back to the default
    /// record if the file is missing or unreadable.
    #[must_use]
    pub fn load(&self, difficulty: Difficulty) -> SaveRecord {
        let path = self.path(difficulty);
        match read_record(&path) {
            Ok(Some(record)) => record,
            Ok(None) => SaveRecord::default(),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "unreadable save record, using defaults");
                SaveRecord::default()
            }
        }
    }

    /// Write the record for `difficulty`.
    pub fn save(&self, difficulty: Difficulty, record: &SaveRecord) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(record)?;
        fs::write(self.path(difficulty), json)?;
        Ok(())
    }
}

fn read_record(path: &Path) -> Result<Option<SaveRecord>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&contents)?))
}
