//! Settings file for tictac.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Log file used when neither the settings file nor the CLI names one.
pub const DEFAULT_LOG_FILE: &str = "tictac.log";

/// User settings, read from TOML and overridable from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Display name for the X player.
    player_x: Option<String>,

    /// Display name for the O player.
    player_o: Option<String>,

    /// Where the terminal UI writes its log.
    log_file: Option<PathBuf>,
}

impl Settings {
    /// Creates settings from explicit values.
    pub fn new(
        player_x: Option<String>,
        player_o: Option<String>,
        log_file: Option<PathBuf>,
    ) -> Self {
        Self {
            player_x,
            player_o,
            log_file,
        }
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings if the file exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces every value that `overrides` sets.
    #[instrument(skip(self))]
    pub fn merge(self, overrides: Settings) -> Self {
        Self {
            player_x: overrides.player_x.or(self.player_x),
            player_o: overrides.player_o.or(self.player_o),
            log_file: overrides.log_file.or(self.log_file),
        }
    }

    /// Log file to use, falling back to [`DEFAULT_LOG_FILE`].
    pub fn log_file_or_default(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_overrides() {
        let file = Settings::new(Some("Alice".into()), Some("Bob".into()), None);
        let cli = Settings::new(None, Some("Carol".into()), Some("game.log".into()));

        let merged = file.merge(cli);
        assert_eq!(merged.player_x().as_deref(), Some("Alice"));
        assert_eq!(merged.player_o().as_deref(), Some("Carol"));
        assert_eq!(merged.log_file_or_default(), PathBuf::from("game.log"));
    }

    #[test]
    fn test_default_log_file() {
        assert_eq!(
            Settings::default().log_file_or_default(),
            PathBuf::from(DEFAULT_LOG_FILE)
        );
    }
}
