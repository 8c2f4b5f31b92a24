//! Session results log.
//!
//! Every finished round is appended to a JSON file in the platform data
//! directory. The menu reads it back for the "best" column. The log is
//! best-effort: a corrupt file is treated as empty rather than blocking play.

use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::games::SessionSummary;

/// One finished round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub game: String,
    pub difficulty: String,
    pub score: u32,
    pub won: bool,
    pub played_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Stamp a summary with the current time.
    pub fn from_summary(summary: &SessionSummary) -> Self {
        Self {
            game: summary.game.to_string(),
            difficulty: summary.difficulty.to_string(),
            score: summary.score,
            won: summary.won,
            played_at: Utc::now(),
        }
    }
}

/// Reads and appends the results file.
pub struct ScoreLog {
    path: PathBuf,
}

impl ScoreLog {
    /// Log at the platform data directory, e.g. `~/.local/share/parlor/results.json`.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "parlor").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "could not determine data directory")
        })?;
        let data_dir = project_dirs.data_dir();
        fs::create_dir_all(data_dir)?;
        Ok(Self {
            path: data_dir.join("results.json"),
        })
    }

    /// Log at an explicit path (used by tests).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// All recorded sessions, oldest first. A missing or unreadable file is
    /// an empty history.
    pub fn load(&self) -> Vec<SessionRecord> {
        let Ok(data) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&data).unwrap_or_default()
    }

    /// Append one record and rewrite the file.
    pub fn append(&self, record: &SessionRecord) -> io::Result<()> {
        let mut records = self.load();
        records.push(record.clone());
        let data = serde_json::to_string_pretty(&records)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, data)
    }
}

/// Best score recorded for a game, across difficulties.
pub fn best_score(records: &[SessionRecord], game: &str) -> Option<u32> {
    records
        .iter()
        .filter(|r| r.game == game)
        .map(|r| r.score)
        .max()
}

/// Number of wins recorded for a game.
pub fn win_count(records: &[SessionRecord], game: &str) -> usize {
    records.iter().filter(|r| r.game == game && r.won).count()
}
