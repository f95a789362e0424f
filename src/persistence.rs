//! Score persistence.
//!
//! The score is stored as the JSON triple `[player_wins, computer_wins, ties]`.

use crate::Score;
use crate::collaborators::ScorePersistence;
use derive_more::{Display, Error};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Score storage error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Score error: {} at {}:{}", message, file, line)]
pub struct ScoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScoreError {
    /// Creates a new score error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<serde_json::Error> for ScoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Malformed score: {}", err))
    }
}

impl From<std::io::Error> for ScoreError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("Score file I/O failed: {}", err))
    }
}

/// Encodes a score as its JSON triple.
#[instrument]
pub fn encode_score(score: &Score) -> Result<String, ScoreError> {
    Ok(serde_json::to_string(score)?)
}

/// Decodes a score from its JSON triple.
#[instrument]
pub fn decode_score(encoded: &str) -> Result<Score, ScoreError> {
    let trimmed = encoded.trim();
    if !trimmed.starts_with('[') {
        return Err(ScoreError::new(format!("Expected a JSON array, got {:?}", trimmed)));
    }
    Ok(serde_json::from_str(trimmed)?)
}

/// Stores the score in a file.
///
/// A missing file reads as a zero score.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    /// Creates a store backed by `path`. The file is not touched yet.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScorePersistence for FileScoreStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&mut self) -> Result<Score, ScoreError> {
        if !self.path.exists() {
            info!("No stored score, starting from zero");
            return Ok(Score::default());
        }
        let content = std::fs::read_to_string(&self.path)?;
        let score = decode_score(&content)?;
        info!(%score, "Score loaded");
        Ok(score)
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn save(&mut self, score: Score) -> Result<(), ScoreError> {
        let encoded = encode_score(&score)?;
        std::fs::write(&self.path, encoded)?;
        debug!(%score, "Score saved");
        Ok(())
    }
}

/// Keeps the score in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    score: Score,
    saves: usize,
}

impl MemoryScoreStore {
    /// Creates a store holding `score`.
    pub fn new(score: Score) -> Self {
        Self { score, saves: 0 }
    }

    /// Last saved (or initial) score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Number of saves so far.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl ScorePersistence for MemoryScoreStore {
    fn load(&mut self) -> Result<Score, ScoreError> {
        Ok(self.score)
    }

    fn save(&mut self, score: Score) -> Result<(), ScoreError> {
        self.score = score;
        self.saves += 1;
        Ok(())
    }
}
