// src/history/mod.rs
//
// Bounded record of recently generated passwords. The generator itself is
// stateless; the CLI and API feed this sink after each successful generation.

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::Utc;
use thiserror::Error;

use crate::models::HistoryEntry;

/// How many generated passwords are remembered before the oldest is evicted.
pub const HISTORY_CAPACITY: usize = 5;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HistoryError>;

pub struct PasswordHistory {
    entries: VecDeque<HistoryEntry>,
    file: Option<PathBuf>,
}

impl PasswordHistory {
    /// A history that is never persisted.
    pub fn in_memory() -> Self {
        Self {
            entries: VecDeque::new(),
            file: None,
        }
    }

    /// Load the history backing file, if it exists. A missing or unreadable
    /// file yields an empty history rather than a startup failure.
    pub fn load(file: PathBuf) -> Self {
        let entries = match fs::read_to_string(&file) {
            Ok(raw) => match serde_json::from_str::<VecDeque<HistoryEntry>>(&raw) {
                Ok(mut entries) => {
                    while entries.len() > HISTORY_CAPACITY {
                        entries.pop_front();
                    }
                    entries
                }
                Err(e) => {
                    log::warn!(
                        "Ignoring unreadable password history {}: {}",
                        file.display(),
                        e
                    );
                    VecDeque::new()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => VecDeque::new(),
            Err(e) => {
                log::warn!("Could not read password history {}: {}", file.display(), e);
                VecDeque::new()
            }
        };

        Self {
            entries,
            file: Some(file),
        }
    }

    /// Remember a generated password, evicting the oldest entry once the
    /// capacity is reached. Callers persist with [`save`](Self::save).
    pub fn record(&mut self, password: &str, strength: u8) {
        self.entries.push_back(HistoryEntry {
            password: password.to_string(),
            strength,
            created_at: Utc::now(),
        });

        while self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_front();
        }
    }

    /// Write the current entries to the backing file. A history without a
    /// backing file saves nowhere and succeeds.
    pub fn save(&self) -> Result<()> {
        if let Some(file) = &self.file {
            if let Some(parent) = file.parent() {
                if !parent.exists() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(file, serde_json::to_string_pretty(&self.entries)?)?;
        }
        Ok(())
    }

    /// Drop all entries, in memory and on disk.
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.save()
    }

    pub fn entries(&self) -> &VecDeque<HistoryEntry> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_the_most_recent_entries() {
        let mut history = PasswordHistory::in_memory();
        for i in 0..7 {
            history.record(&format!("password-{}", i), 4);
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.entries()[0].password, "password-2");
        assert_eq!(history.entries()[4].password, "password-6");
    }

    #[test]
    fn round_trips_through_the_backing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut history = PasswordHistory::load(path.clone());
        history.record("Abc123!", 4);
        history.record("weakpass", 1);
        history.save().unwrap();

        let reloaded = PasswordHistory::load(path);
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.entries()[0].password, "Abc123!");
        assert_eq!(reloaded.entries()[1].strength, 1);
    }

    #[test]
    fn missing_or_corrupt_files_load_as_empty() {
        let dir = tempfile::tempdir().unwrap();

        let missing = PasswordHistory::load(dir.path().join("nope.json"));
        assert!(missing.is_empty());

        let corrupt_path = dir.path().join("corrupt.json");
        fs::write(&corrupt_path, "not json at all").unwrap();
        let corrupt = PasswordHistory::load(corrupt_path);
        assert!(corrupt.is_empty());
    }

    #[test]
    fn clear_empties_memory_and_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut history = PasswordHistory::load(path.clone());
        history.record("something", 2);
        history.save().unwrap();
        history.clear().unwrap();

        assert!(history.is_empty());
        assert!(PasswordHistory::load(path).is_empty());
    }

    #[test]
    fn in_memory_history_saves_nowhere() {
        let mut history = PasswordHistory::in_memory();
        history.record("ephemeral", 1);
        history.save().unwrap();
        assert_eq!(history.len(), 1);
    }
}
