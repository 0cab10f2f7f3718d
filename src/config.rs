//! User configuration loaded from `~/.holocron/config.yaml`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{
    API_BASE_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_API_BASE, DEFAULT_LOG_FILE,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the character API, without the `/people/` suffix
    pub api_base: String,
    /// Page shown on startup
    pub start_page: u32,
    /// Per-request timeout; `None` leaves requests unbounded
    pub request_timeout_secs: Option<u64>,
    /// Log file path, relative paths resolve against the working directory
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base: String::from(DEFAULT_API_BASE),
            start_page: 1,
            request_timeout_secs: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
    }

    /// Load the user config and apply the environment override
    pub fn load() -> Result<Self> {
        let path = Self::config_dir().join(CONFIG_FILE_NAME);
        let mut config = Self::load_from(&path)?;
        if let Ok(base) = std::env::var(API_BASE_ENV) {
            config.apply_api_base(&base);
        }
        Ok(config)
    }

    /// Read a config file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let mut config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("parsing {}", path.display()))?
        };
        config.normalize();
        Ok(config)
    }

    fn apply_api_base(&mut self, base: &str) {
        let base = base.trim();
        if !base.is_empty() {
            self.api_base = base.to_string();
        }
        self.normalize();
    }

    fn normalize(&mut self) {
        self.start_page = self.start_page.max(1);
        let trimmed = self.api_base.trim_end_matches('/').len();
        self.api_base.truncate(trimmed);
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
