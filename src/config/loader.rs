//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Default search service base URL.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Default autocomplete debounce delay in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

/// Default HTTP request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/sift/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Base URL of the search service.
    #[serde(default)]
    pub server_url: Option<String>,

    /// Autocomplete debounce delay in milliseconds.
    #[serde(default)]
    pub debounce_ms: Option<u64>,

    /// HTTP request timeout in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Path of the JSON key-value file holding history and theme.
    #[serde(default)]
    pub storage_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Base URL of the search service, without trailing slash.
    pub server_url: String,
    /// Autocomplete debounce delay in milliseconds.
    pub debounce_ms: u64,
    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Key-value storage file.
    pub storage_path: PathBuf,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            storage_path: default_storage_path(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/sift/sift.log` on Linux, or the appropriate
/// platform path elsewhere. Falls back to the current directory if no state
/// directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("sift").join("sift.log")
    } else {
        PathBuf::from("sift.log")
    }
}

/// Resolve default storage file path.
///
/// Returns `~/.local/share/sift/storage.json` on Linux, or the appropriate
/// platform path elsewhere. Falls back to the current directory.
pub fn default_storage_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_dir() {
        data_dir.join("sift").join("storage.json")
    } else {
        PathBuf::from("sift-storage.json")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/sift/config.toml` on Linux, appropriate path on other
/// platforms. Returns `None` if no config directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sift").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `SIFT_CONFIG` environment variable
/// 3. Default path `~/.config/sift/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("SIFT_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use
/// the default. A zero request timeout counts as unset.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        server_url: config
            .server_url
            .map(|url| normalize_server_url(&url))
            .unwrap_or(defaults.server_url),
        debounce_ms: config.debounce_ms.unwrap_or(defaults.debounce_ms),
        request_timeout_secs: config
            .request_timeout_secs
            .filter(|&secs| {
                if secs == 0 {
                    tracing::warn!("Ignoring request_timeout_secs = 0, using the default");
                }
                secs > 0
            })
            .unwrap_or(defaults.request_timeout_secs),
        storage_path: config.storage_path.unwrap_or(defaults.storage_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `SIFT_SERVER_URL`: Override server URL
/// - `SIFT_DEBOUNCE_MS`: Override debounce delay (ignored if not a number)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(url) = std::env::var("SIFT_SERVER_URL") {
        if !url.trim().is_empty() {
            config.server_url = normalize_server_url(&url);
        }
    }

    if let Ok(raw) = std::env::var("SIFT_DEBOUNCE_MS") {
        match raw.trim().parse::<u64>() {
            Ok(ms) => config.debounce_ms = ms,
            Err(_) => tracing::warn!(value = %raw, "Ignoring invalid SIFT_DEBOUNCE_MS"),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    server_override: Option<String>,
    storage_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(url) = server_override {
        config.server_url = normalize_server_url(&url);
    }

    if let Some(path) = storage_override {
        config.storage_path = path;
    }

    config
}

/// Strip surrounding whitespace and trailing slashes from a base URL.
fn normalize_server_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
