//! User configuration
//!
//! Optional `deepguard.toml` in the platform config directory. A missing
//! file (or missing fields) falls back to defaults; a malformed file is a
//! startup error rather than a silent reset.

use crate::error::{GuardError, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Which theme the application starts in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Theme at startup
    pub theme: ThemeChoice,
    /// Detection model selected at startup
    pub default_model: String,
    /// Initial window size
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Dark,
            default_model: "standard".to_string(),
            window_width: 420.0,
            window_height: 780.0,
        }
    }
}

impl Config {
    /// Path of the config file: `<config dir>/deepguard/deepguard.toml`
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("deepguard").join("deepguard.toml"))
    }

    /// Load from disk. A missing file yields defaults.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            debug!("No config directory available, using defaults");
            return Ok(Self::default());
        };
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| GuardError::Config(e.to_string()))
    }
}
