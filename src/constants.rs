//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Base URL of the public character API
pub const DEFAULT_API_BASE: &str = "https://swapi.dev/api";

/// Environment variable overriding the API base URL
pub const API_BASE_ENV: &str = "HOLOCRON_API_BASE";

/// Directory under the home directory holding the config file
pub const CONFIG_DIR_NAME: &str = ".holocron";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Default log file (written next to the working directory)
pub const DEFAULT_LOG_FILE: &str = "holocron.log";

/// Title shown above the grid
pub const APP_TITLE: &str = "Star Wars Characters";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
