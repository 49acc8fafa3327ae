//! Configuration system for TeamForge.
//!
//! Load optimizer configuration from TOML or YAML files to control the
//! best-set cap and search termination without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use teamforge_config::SolverConfig;
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     max_results = 5
//!
//!     [termination]
//!     seconds_spent_limit = 30
//!     partition_count_limit = 1000000
//! "#).unwrap();
//!
//! assert_eq!(config.max_results, 5);
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! assert_eq!(config.partition_count_limit(), Some(1_000_000));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use teamforge_config::SolverConfig;
//!
//! let config = SolverConfig::load("teamforge.toml").unwrap_or_default();
//! assert_eq!(config.max_results, 10);
//! ```

use std::path::Path;
use std::time::Duration;

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

fn default_max_results() -> usize {
    10
}

/// Main optimizer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Maximum number of tied best assignments to keep.
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Termination configuration.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            termination: None,
        }
    }
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, as YAML for `.yaml`/`.yml` and
    /// TOML otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML,
    /// or fails [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_results == 0 {
            return Err(ConfigError::Invalid(
                "max_results must be at least 1".to_string(),
            ));
        }
        if let Some(termination) = &self.termination {
            if termination.partition_count_limit == Some(0) {
                return Err(ConfigError::Invalid(
                    "partition_count_limit must be at least 1".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Sets the best-set cap.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the partition budget.
    pub fn with_partition_count_limit(mut self, limit: u64) -> Self {
        self.termination = Some(TerminationConfig {
            partition_count_limit: Some(limit),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Returns the termination time limit, if configured.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Returns the partition budget, if configured.
    pub fn partition_count_limit(&self) -> Option<u64> {
        self.termination
            .as_ref()
            .and_then(|t| t.partition_count_limit)
    }
}

/// Termination configuration.
///
/// An absent section, or one with every limit unset, lets the search run
/// until the partition stream is exhausted. A time limit of zero is a real
/// limit, as with `TeamOptimizer::with_time_limit(Duration::ZERO)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend searching.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend searching, added to the seconds limit.
    pub millis_spent_limit: Option<u64>,

    /// Maximum number of canonical partitions to score.
    pub partition_count_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if either field is set.
    ///
    /// A limit set to zero stops the search before the first partition.
    /// Oversized values saturate at `Duration::MAX`.
    pub fn time_limit(&self) -> Option<Duration> {
        if self.seconds_spent_limit.is_none() && self.millis_spent_limit.is_none() {
            return None;
        }
        let secs = Duration::from_secs(self.seconds_spent_limit.unwrap_or(0));
        let millis = Duration::from_millis(self.millis_spent_limit.unwrap_or(0));
        Some(secs.saturating_add(millis))
    }
}
