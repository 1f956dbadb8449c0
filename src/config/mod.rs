//! CLI preferences
//!
//! Only where inputs come from and how results are printed. Weights and
//! band thresholds are fixed and have no setting here.

use crate::report::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const STATE_ENV: &str = "AI_VERIFY_STATE";
pub const FORMAT_ENV: &str = "AI_VERIFY_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// State file used when no `--state` flag is given
    #[serde(default = "default_state_path")]
    pub state_path: Option<PathBuf>,
    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,
}

/// `~/.ai-verify`
pub fn config_dir() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_default();
    home.join(".ai-verify")
}

pub fn default_config_path() -> PathBuf {
    config_dir().join("config.yaml")
}

fn default_state_path() -> Option<PathBuf> {
    Some(config_dir().join("checklist.yaml"))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_path: default_state_path(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load from a YAML file; a missing file gives the defaults
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Apply `AI_VERIFY_STATE` / `AI_VERIFY_FORMAT` overrides
    pub fn apply_env<F>(mut self, var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(state) = var(STATE_ENV).filter(|s| !s.is_empty()) {
            self.state_path = Some(PathBuf::from(state));
        }
        if let Some(format) = var(FORMAT_ENV).filter(|s| !s.is_empty()) {
            match format.parse() {
                Ok(f) => self.format = f,
                Err(e) => warn!("Ignoring {}: {}", FORMAT_ENV, e),
            }
        }
        self
    }

    /// Default file, then process environment
    pub fn load() -> anyhow::Result<Self> {
        let config = Self::load_from_file(&default_config_path())?;
        Ok(config.apply_env(|k| std::env::var(k).ok()))
    }
}
