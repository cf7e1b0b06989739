//! Configuration loading and typed config structure for a session.
//!
//! Sessions are configured from a small YAML document. Every field has a
//! default matching the classic interactive setup (a 50x50 grid stepped at
//! 10 generations per second), so an empty or partial document is valid.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A field value failed validation.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Session configuration.
///
/// All fields have sensible defaults; see the individual field docs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    /// Number of grid rows at startup.
    #[serde(default = "default_rows")]
    pub rows: usize,

    /// Number of grid columns at startup.
    #[serde(default = "default_cols")]
    pub cols: usize,

    /// Target generations per second; a pacing hint for the embedding UI.
    #[serde(default = "default_steps_per_second")]
    pub steps_per_second: u32,

    /// Seed for the session RNG. Random fills are reproducible per seed.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Number of recent grid hashes kept for cycle detection.
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,
}

impl SessionConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a field value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a field value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values for internal consistency.
    ///
    /// Zero-sized grids are allowed (the engine is total over them); the
    /// pacing hint and cycle-history depth must be at least 1.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps_per_second == 0 {
            return Err(ConfigError::Invalid {
                reason: "steps_per_second must be at least 1".to_owned(),
            });
        }
        if self.history_depth == 0 {
            return Err(ConfigError::Invalid {
                reason: "history_depth must be at least 1".to_owned(),
            });
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            steps_per_second: default_steps_per_second(),
            seed: default_seed(),
            history_depth: default_history_depth(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_rows() -> usize {
    50
}

const fn default_cols() -> usize {
    50
}

const fn default_steps_per_second() -> u32 {
    10
}

const fn default_seed() -> u64 {
    42
}

const fn default_history_depth() -> usize {
    10
}
