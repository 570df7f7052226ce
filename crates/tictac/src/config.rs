//! Game configuration loaded from TOML and command-line overrides.

use crate::cli::ConfigOverrides;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictac_engine::{Player, STANDARD_SIZE, StrategyKind};
use tracing::{debug, info, instrument};

/// Smallest supported board side.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest supported board side.
pub const MAX_BOARD_SIZE: usize = 10;

/// Settings for one game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Mark played by the computer.
    #[serde(default = "default_ai_player")]
    ai_player: Player,

    /// Search strategy used by the computer.
    #[serde(default)]
    strategy: StrategyKind,

    /// Minimax look-ahead in plies.
    #[serde(default = "default_depth")]
    depth: usize,

    /// Seed for random play; OS entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Log filter used when RUST_LOG is unset.
    #[serde(default = "default_log_level")]
    log_level: String,
}

#[instrument]
fn default_board_size() -> usize {
    STANDARD_SIZE
}

#[instrument]
fn default_ai_player() -> Player {
    Player::X
}

#[instrument]
fn default_depth() -> usize {
    5
}

#[instrument]
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            ai_player: default_ai_player(),
            strategy: StrategyKind::default(),
            depth: default_depth(),
            seed: None,
            log_level: default_log_level(),
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

        info!(strategy = %config.strategy, depth = config.depth, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if one is given, otherwise starts from defaults,
    /// then applies overrides and validates the result.
    #[instrument(skip(path, overrides))]
    pub fn load(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let config = config.with_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with every given override applied.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(ai_player) = overrides.ai_player {
            self.ai_player = ai_player;
        }
        if let Some(strategy) = overrides.strategy {
            self.strategy = strategy;
        }
        if let Some(depth) = overrides.depth {
            self.depth = depth;
        }
        if let Some(board_size) = overrides.board_size {
            self.board_size = board_size;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if let Some(log_level) = &overrides.log_level {
            self.log_level = log_level.clone();
        }
        self
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::new(format!(
                "board_size must be between {} and {}, got {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, self.board_size
            )));
        }
        if self.depth == 0 {
            return Err(ConfigError::new("depth must be at least 1".to_string()));
        }
        Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.board_size(), 3);
        assert_eq!(*config.ai_player(), Player::X);
        assert_eq!(*config.strategy(), StrategyKind::Minimax);
        assert_eq!(*config.depth(), 5);
        assert_eq!(*config.seed(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let file = write_config("ai_player = \"O\"\nstrategy = \"random\"\nseed = 9\n");
        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.ai_player(), Player::O);
        assert_eq!(*config.strategy(), StrategyKind::Random);
        assert_eq!(*config.seed(), Some(9));
        assert_eq!(*config.depth(), 5);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_overrides_win_over_file() {
        let file = write_config("depth = 2\nboard_size = 4\n");
        let overrides = ConfigOverrides {
            depth: Some(7),
            ..Default::default()
        };
        let config = GameConfig::load(Some(file.path()), &overrides).unwrap();
        assert_eq!(*config.depth(), 7);
        assert_eq!(*config.board_size(), 4);
    }

    #[test]
    fn test_invalid_toml_reports_location() {
        let file = write_config("depth = \"deep\"\n");
        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_missing_file_fails() {
        let err = GameConfig::from_file("/nonexistent/tictac.toml").unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }

    #[test]
    fn test_validate_rejects_small_board_and_zero_depth() {
        let small = ConfigOverrides {
            board_size: Some(2),
            ..Default::default()
        };
        assert!(GameConfig::load(None, &small).is_err());

        let shallow = ConfigOverrides {
            depth: Some(0),
            ..Default::default()
        };
        assert!(GameConfig::load(None, &shallow).is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_board() {
        let huge = ConfigOverrides {
            board_size: Some(100_000),
            ..Default::default()
        };
        let err = GameConfig::load(None, &huge).unwrap_err();
        assert!(err.message.contains("between 3 and 10"), "{}", err);

        let largest = ConfigOverrides {
            board_size: Some(MAX_BOARD_SIZE),
            ..Default::default()
        };
        assert!(GameConfig::load(None, &largest).is_ok());
    }
}
