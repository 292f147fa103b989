// src/config/mod.rs
pub mod types;

pub use self::types::{Config, OutputConfig, RankConfig, WalkConfig};

use std::fs;
use std::path::Path;

use crate::error::{GraphError, Result};

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = "wordgraph.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `wordgraph.toml` from the working directory, or defaults if absent.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read, parsed or validated.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!("no {CONFIG_FILE}, using defaults");
            return Ok(Self::new());
        }
        Self::load_from(path)
    }

    /// Loads and validates a config file at an explicit path.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed or validated.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| GraphError::io(path, e))?;
        let config = Self::parse_toml(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parses and validates TOML text. Missing keys keep their defaults.
    ///
    /// # Errors
    /// Returns [`GraphError::Config`] on malformed TOML or out-of-range values.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns [`GraphError::Config`] naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        self.rank.validate()?;
        if self.walk.max_steps == Some(0) {
            return Err(GraphError::Config("walk.max_steps must be at least 1".into()));
        }
        Ok(())
    }
}

impl RankConfig {
    /// # Errors
    /// Returns [`GraphError::Config`] if a parameter is out of range.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(GraphError::Config(format!(
                "rank.damping must be within [0, 1], got {}",
                self.damping
            )));
        }
        if self.max_iter == 0 {
            return Err(GraphError::Config("rank.max_iter must be positive".into()));
        }
        if self.tol.is_nan() || self.tol <= 0.0 {
            return Err(GraphError::Config(format!(
                "rank.tol must be positive, got {}",
                self.tol
            )));
        }
        Ok(())
    }
}
