//! Configuration file loading with precedence handling.

use super::{BrowserConfig, INITIAL_REVEAL, PAGE_LIMIT, PAGE_SIZE, REVEAL_DELAY, REVEAL_STEP};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Env var naming an explicit config file.
pub const CONFIG_ENV: &str = "RECVIEW_CONFIG";
/// Env var naming the records file.
pub const DATA_ENV: &str = "RECVIEW_DATA";
/// Env var overriding the page size.
pub const PAGE_SIZE_ENV: &str = "RECVIEW_PAGE_SIZE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
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
/// Corresponds to `~/.config/recview/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Records file to browse.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Records per page.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Rows shown when a page first loads.
    #[serde(default)]
    pub initial_reveal: Option<usize>,

    /// Rows added per reveal.
    #[serde(default)]
    pub reveal_step: Option<usize>,

    /// Reveal delay in milliseconds.
    #[serde(default)]
    pub reveal_delay_ms: Option<u64>,

    /// Number of pages the pager allows.
    #[serde(default)]
    pub page_limit: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Records file, if any source named one.
    pub data_file: Option<PathBuf>,
    /// Records per page.
    pub page_size: usize,
    /// Rows shown before the first reveal.
    pub initial_reveal: usize,
    /// Rows added by each reveal.
    pub reveal_step: usize,
    /// Delay between sentinel visibility and the reveal.
    pub reveal_delay: Duration,
    /// Number of pages the pager allows.
    pub page_limit: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            page_size: PAGE_SIZE,
            initial_reveal: INITIAL_REVEAL,
            reveal_step: REVEAL_STEP,
            reveal_delay: REVEAL_DELAY,
            page_limit: PAGE_LIMIT,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Settings for the view-state controller.
    ///
    /// Page size, reveal step and page limit are floored at 1.
    pub fn browser(&self) -> BrowserConfig {
        BrowserConfig {
            page_size: self.page_size.max(1),
            initial_reveal: self.initial_reveal,
            reveal_step: self.reveal_step.max(1),
            reveal_delay: self.reveal_delay,
            page_limit: self.page_limit.max(1),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/recview/recview.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("recview").join("recview.log")
    } else {
        PathBuf::from("recview.log")
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
/// Returns `~/.config/recview/config.toml` on Unix, appropriate path on other platforms.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("recview").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `RECVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/recview/config.toml`
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

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        data_file: config.data_file.or(defaults.data_file),
        page_size: config.page_size.unwrap_or(defaults.page_size),
        initial_reveal: config.initial_reveal.unwrap_or(defaults.initial_reveal),
        reveal_step: config.reveal_step.unwrap_or(defaults.reveal_step),
        reveal_delay: config
            .reveal_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.reveal_delay),
        page_limit: config.page_limit.unwrap_or(defaults.page_limit),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `RECVIEW_DATA`: Override records file
/// - `RECVIEW_PAGE_SIZE`: Override page size (ignored unless a positive integer)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(data) = std::env::var(DATA_ENV) {
        if !data.is_empty() {
            config.data_file = Some(PathBuf::from(data));
        }
    }

    if let Some(size) = std::env::var(PAGE_SIZE_ENV)
        .ok()
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|&size| size > 0)
    {
        config.page_size = size;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    data_file_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(data_file) = data_file_override {
        config.data_file = Some(data_file);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
