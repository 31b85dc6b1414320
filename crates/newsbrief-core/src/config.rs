//! Summarizer configuration for newsbrief
//!
//! Configuration lives in `config.toml` under the user config directory
//! (`~/.config/newsbrief/` on Linux). `NEWSBRIEF_CONFIG_DIR` overrides the
//! directory; a missing file yields the defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::bail_invalid;
use crate::error::{BriefError, Result};

pub use types::{SummarizerConfig, DEFAULT_TARGET_WORDS};

const CONFIG_DIR: &str = "newsbrief";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "NEWSBRIEF_CONFIG_DIR";

impl SummarizerConfig {
    /// Default location of the config file
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    BriefError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config_missing_using_defaults");
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|e| BriefError::config("read config", path, e))?;

        let config = Self::parse(&content).map_err(|e| match e {
            BriefError::Toml(err) => BriefError::config("parse config", path, err),
            other => other,
        })?;

        debug!(
            path = %path.display(),
            target_words = config.target_words,
            "config_loaded"
        );
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configured budgets are usable
    pub fn validate(&self) -> Result<()> {
        if self.target_words == 0 {
            bail_invalid!("target_words", "0 (must be at least 1)");
        }
        if let Some(low_yield) = self.low_yield_words {
            if low_yield > self.target_words {
                bail_invalid!(
                    "low_yield_words",
                    format!("{} (must not exceed target_words {})", low_yield, self.target_words)
                );
            }
        }
        Ok(())
    }

    /// Serialize to a TOML document
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| BriefError::Other(format!("failed to serialize config: {}", e)))
    }
}
