//! Application configuration.
//!
//! Layers, lowest first: built-in defaults, a TOML file, then command-line
//! overrides. `RUST_LOG` (optionally from `.env`) controls log verbosity.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "noughts.toml";

/// Log file used when the config does not name one.
pub const DEFAULT_LOG_FILE: &str = "noughts.log";

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Name for X. With `player_o`, skips the name form.
    player_x: Option<String>,

    /// Name for O.
    player_o: Option<String>,

    /// Ring the terminal bell on moves, wins and draws.
    sound: bool,

    /// Where tracing output goes while the terminal UI is up.
    log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            player_x: None,
            player_o: None,
            sound: true,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
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

        info!(sound = config.sound, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `explicit` if given, else the default file if present, else
    /// built-in defaults.
    ///
    /// A missing explicit file is an error; a missing default file is not.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(
        mut self,
        player_x: Option<String>,
        player_o: Option<String>,
        mute: bool,
    ) -> Self {
        if player_x.is_some() {
            self.player_x = player_x;
        }
        if player_o.is_some() {
            self.player_o = player_o;
        }
        if mute {
            self.sound = false;
        }
        self
    }

    /// Both names, when both are configured.
    pub fn preset_names(&self) -> Option<(&str, &str)> {
        match (&self.player_x, &self.player_o) {
            (Some(x), Some(o)) => Some((x.as_str(), o.as_str())),
            _ => None,
        }
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
