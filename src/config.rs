//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Timing, difficulty, and storage settings for a play session.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct GameConfig {
    /// Shortest computer "thinking" delay, in milliseconds (inclusive).
    think_delay_min_ms: u64,

    /// Longest computer "thinking" delay, in milliseconds (exclusive).
    think_delay_max_ms: u64,

    /// Extra pause before the computer's first move when it opens a round.
    opening_delay_ms: u64,

    /// How long a finished board stays up before the next round.
    round_end_delay_ms: u64,

    /// How long a message stays on screen.
    message_ttl_ms: u64,

    /// Whether smart mode is on at startup and after a hard reset.
    smart_by_default: bool,

    /// Where the score is stored between sessions.
    score_file: PathBuf,

    /// Ring the terminal bell for loud cues.
    terminal_bell: bool,

    /// Fixed RNG seed; entropy when absent.
    #[setters(strip_option)]
    seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            think_delay_min_ms: 1000,
            think_delay_max_ms: 2000,
            opening_delay_ms: 2000,
            round_end_delay_ms: 5000,
            message_ttl_ms: 4000,
            smart_by_default: true,
            score_file: PathBuf::from("strictly_versus_score.json"),
            terminal_bell: true,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks that the settings are usable.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.think_delay_min_ms >= self.think_delay_max_ms {
            return Err(ConfigError::new(format!(
                "think_delay_min_ms ({}) must be below think_delay_max_ms ({})",
                self.think_delay_min_ms, self.think_delay_max_ms
            )));
        }
        Ok(())
    }

    /// Round timing and difficulty derived from this config.
    pub fn round_settings(&self) -> RoundSettings {
        RoundSettings {
            think_delay_min: Duration::from_millis(self.think_delay_min_ms),
            think_delay_max: Duration::from_millis(self.think_delay_max_ms),
            opening_delay: Duration::from_millis(self.opening_delay_ms),
            round_end_delay: Duration::from_millis(self.round_end_delay_ms),
            smart_by_default: self.smart_by_default,
        }
    }

    /// Message lifetime as a duration.
    pub fn message_ttl(&self) -> Duration {
        Duration::from_millis(self.message_ttl_ms)
    }
}

/// Settings the round transitions read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct RoundSettings {
    /// Shortest thinking delay (inclusive).
    #[getter(copy)]
    think_delay_min: Duration,
    /// Longest thinking delay (exclusive).
    #[getter(copy)]
    think_delay_max: Duration,
    /// Extra pause before the computer opens a round.
    #[getter(copy)]
    opening_delay: Duration,
    /// Pause between a round ending and the next one starting.
    #[getter(copy)]
    round_end_delay: Duration,
    /// Smart mode at startup and after hard reset.
    #[getter(copy)]
    smart_by_default: bool,
}

impl Default for RoundSettings {
    fn default() -> Self {
        GameConfig::default().round_settings()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
