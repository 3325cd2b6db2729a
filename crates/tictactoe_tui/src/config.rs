//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tictactoe_core::{Mode, OpponentTrigger};
use tracing::{debug, info, instrument};

/// Longest opponent delay accepted from a config file.
pub const MAX_DELAY_MS: u64 = 10_000;

/// Delays before the opponent moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay when a round opens with the opponent to move.
    round_start_delay_ms: u64,
    /// Delay between a human move and the opponent's reply.
    reply_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            round_start_delay_ms: 300,
            reply_delay_ms: 350,
        }
    }
}

impl TimingConfig {
    /// Creates timing from explicit millisecond delays.
    pub fn new(round_start_delay_ms: u64, reply_delay_ms: u64) -> Self {
        Self {
            round_start_delay_ms,
            reply_delay_ms,
        }
    }

    /// Delay to wait for the given trigger.
    pub fn delay_for(&self, trigger: OpponentTrigger) -> Duration {
        let ms = match trigger {
            OpponentTrigger::RoundStart => self.round_start_delay_ms,
            OpponentTrigger::HumanMoved => self.reply_delay_ms,
        };
        Duration::from_millis(ms)
    }
}

/// Top-level configuration. Every field has a default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Mode the session opens in.
    default_mode: Mode,
    /// Seed for the opponent's tie-breaks; OS entropy when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    /// Opponent delays.
    timing: TimingConfig,
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(mode = %config.default_mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file when it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timing.round_start_delay_ms > MAX_DELAY_MS {
            return Err(ConfigError::new(format!(
                "timing.round_start_delay_ms must be <= {MAX_DELAY_MS}"
            )));
        }
        if self.timing.reply_delay_ms > MAX_DELAY_MS {
            return Err(ConfigError::new(format!(
                "timing.reply_delay_ms must be <= {MAX_DELAY_MS}"
            )));
        }
        Ok(())
    }

    /// Renders the defaults as TOML, for seeding a config file.
    pub fn default_toml() -> Result<String, ConfigError> {
        toml::to_string_pretty(&Self::default())
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Overrides the opening mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.default_mode = mode;
        self
    }

    /// Overrides the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the opponent delays.
    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
