//! Configuration system for the Hanoi solver.
//!
//! Load settings from TOML or YAML files to control input ranges, output
//! and invariant checking without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use hanoi_config::{EnvironmentMode, HanoiConfig};
//!
//! let config = HanoiConfig::from_toml_str(r#"
//!     environment_mode = "full_assert"
//!
//!     [display]
//!     show_moves = false
//!
//!     [puzzle]
//!     towers = 6
//!     disks = 15
//! "#).unwrap();
//!
//! assert_eq!(config.environment_mode, EnvironmentMode::FullAssert);
//! assert!(!config.display.show_moves);
//! assert_eq!(config.puzzle.unwrap().towers, 6);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use hanoi_config::HanoiConfig;
//!
//! let config = HanoiConfig::load("hanoi.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HanoiConfig {
    /// Environment mode controlling invariant checks during solving.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Accepted tower and disk count ranges.
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Board and move output.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Preset puzzle size; skips the interactive prompts when set.
    #[serde(default)]
    pub puzzle: Option<PuzzleConfig>,
}

impl HanoiConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// fails [`HanoiConfig::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Sets the preset puzzle size.
    pub fn with_puzzle(mut self, towers: usize, disks: usize) -> Self {
        self.puzzle = Some(PuzzleConfig { towers, disks });
        self
    }

    /// Enables or disables the per-move output line.
    pub fn with_show_moves(mut self, show_moves: bool) -> Self {
        self.display.show_moves = show_moves;
        self
    }

    /// Checks that the configured ranges are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for inverted ranges or fewer than
    /// three towers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = &self.limits;
        if limits.min_towers < 3 {
            return Err(ConfigError::Invalid(format!(
                "min_towers must be at least 3, got {}",
                limits.min_towers
            )));
        }
        if limits.min_towers > limits.max_towers {
            return Err(ConfigError::Invalid(format!(
                "min_towers ({}) exceeds max_towers ({})",
                limits.min_towers, limits.max_towers
            )));
        }
        if limits.min_disks > limits.max_disks {
            return Err(ConfigError::Invalid(format!(
                "min_disks ({}) exceeds max_disks ({})",
                limits.min_disks, limits.max_disks
            )));
        }
        Ok(())
    }
}

/// Environment mode affecting solver checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Only the per-move ordering check.
    #[default]
    Fast,

    /// Re-checks ordering and conservation across all towers after every move.
    FullAssert,
}

impl EnvironmentMode {
    /// Returns true if full invariant checks are enabled.
    pub fn is_asserting(self) -> bool {
        matches!(self, EnvironmentMode::FullAssert)
    }
}

/// Accepted input ranges.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct LimitsConfig {
    pub min_towers: usize,
    pub max_towers: usize,
    pub min_disks: usize,
    pub max_disks: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            min_towers: 5,
            max_towers: 10,
            min_disks: 3,
            max_disks: 40,
        }
    }
}

impl LimitsConfig {
    /// Accepted tower counts.
    pub fn tower_range(&self) -> RangeInclusive<usize> {
        self.min_towers..=self.max_towers
    }

    /// Accepted disk counts.
    pub fn disk_range(&self) -> RangeInclusive<usize> {
        self.min_disks..=self.max_disks
    }

    /// Returns true when both counts are inside their ranges.
    pub fn accepts(&self, towers: usize, disks: usize) -> bool {
        self.tower_range().contains(&towers) && self.disk_range().contains(&disks)
    }
}

/// Board and move output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct DisplayConfig {
    /// Print one line per applied move.
    pub show_moves: bool,

    /// Pad the before/after boards to the full disk count.
    pub max_height_padding: bool,

    /// Print the board after every move.
    pub show_board_each_move: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_moves: true,
            max_height_padding: true,
            show_board_each_move: false,
        }
    }
}

/// Preset puzzle size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PuzzleConfig {
    pub towers: usize,
    pub disks: usize,
}
