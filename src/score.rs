use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "classic-snake";
const SCORE_FILE_NAME: &str = "highscore.json";

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("score file i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("score file is not valid json: {0}")]
    Format(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// Reads and writes the persisted high score.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Store at the platform-correct data directory.
    #[must_use]
    pub fn at_default_location() -> Self {
        let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        base.push(APP_DIR_NAME);
        base.push(SCORE_FILE_NAME);
        Self { path: base }
    }

    /// Store backed by an explicit file path.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the high score from disk.
    ///
    /// Returns `Ok(0)` when the file does not yet exist (first run).
    /// Returns `Err` when the file exists but cannot be read or parsed, so
    /// the caller can surface a warning before entering raw terminal mode.
    pub fn load(&self) -> Result<u32, ScoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };

        let file: ScoreFile = serde_json::from_str(&raw)?;
        Ok(file.high_score)
    }

    /// Saves the high score to disk, creating parent directories when needed.
    pub fn save(&self, score: u32) -> Result<(), ScoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let payload = ScoreFile { high_score: score };
        let json = serde_json::to_string_pretty(&payload)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Folds a finished session into the persisted high score.
///
/// Writes only when the final score beats the old record. A failed write is
/// reported on stderr and the new record is still returned, so one bad disk
/// never takes the session down.
pub fn record_session_end(store: &HighScoreStore, high_score: u32, final_score: u32) -> u32 {
    if final_score <= high_score {
        return high_score;
    }

    if let Err(error) = store.save(final_score) {
        eprintln!("Failed to save high score: {error}");
    }
    final_score
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{HighScoreStore, record_session_end};

    #[test]
    fn score_serialization_round_trip() {
        let store = unique_test_store("round_trip");

        store.save(42).expect("score save should succeed");
        let loaded = store.load().expect("load should succeed");

        assert_eq!(loaded, 42);
        cleanup_test_store(&store);
    }

    #[test]
    fn missing_score_file_returns_zero() {
        let store = unique_test_store("missing");
        // Deliberately do not create the file.
        let loaded = store.load().expect("missing file should return Ok(0)");
        assert_eq!(loaded, 0);
    }

    #[test]
    fn malformed_score_file_returns_error() {
        let store = unique_test_store("malformed");
        if let Some(parent) = store.path().parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(store.path(), "not-json").expect("test file write should succeed");

        assert!(store.load().is_err(), "malformed file should return Err");

        cleanup_test_store(&store);
    }

    #[test]
    fn session_end_persists_a_beaten_record() {
        let store = unique_test_store("beaten");

        let record = record_session_end(&store, 50, 70);

        assert_eq!(record, 70);
        assert_eq!(store.load().expect("load should succeed"), 70);
        cleanup_test_store(&store);
    }

    #[test]
    fn session_end_keeps_an_unbeaten_record() {
        let store = unique_test_store("unbeaten");
        store.save(50).expect("score save should succeed");

        let record = record_session_end(&store, 50, 30);

        assert_eq!(record, 50);
        assert_eq!(store.load().expect("load should succeed"), 50);
        cleanup_test_store(&store);
    }

    fn unique_test_store(label: &str) -> HighScoreStore {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        let path: PathBuf = std::env::temp_dir()
            .join("classic-snake-score-tests")
            .join(format!("{label}-{nanos}.json"));
        HighScoreStore::at(path)
    }

    fn cleanup_test_store(store: &HighScoreStore) {
        let _ = fs::remove_file(store.path());
        if let Some(parent) = store.path().parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
