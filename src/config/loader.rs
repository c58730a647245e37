//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::layout::LayoutState;
use crate::model::Size;
use crate::source::{SettingKey, SettingsSource};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "RADIO_OVERLAY_CONFIG";

/// Environment variable overriding `taskbar_hide`.
pub const TASKBAR_HIDE_ENV_VAR: &str = "RADIO_OVERLAY_TASKBAR_HIDE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A geometry value is zero, negative or not finite.
    #[error("Invalid geometry: {field} must be a positive finite number, got {value}")]
    InvalidGeometry {
        /// Config key of the offending value.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/radio-overlay/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Design-time minimum width; also the scale reference width.
    #[serde(default)]
    pub min_width: Option<f64>,

    /// Minimum height with four or fewer radios.
    #[serde(default)]
    pub base_min_height: Option<f64>,

    /// Height added per extra radio row.
    #[serde(default)]
    pub radio_row_height: Option<f64>,

    /// Window width when first shown.
    #[serde(default)]
    pub initial_width: Option<f64>,

    /// Window height when first shown.
    #[serde(default)]
    pub initial_height: Option<f64>,

    /// Close instead of minimise (overlay hidden from taskbar).
    #[serde(default)]
    pub taskbar_hide: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Overlay geometry constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    /// Design-time minimum width; also the scale reference width.
    pub min_width: f64,
    /// Minimum height with four or fewer radios.
    pub base_min_height: f64,
    /// Height added per extra radio row.
    pub radio_row_height: f64,
    /// Window width when first shown.
    pub initial_width: f64,
    /// Window height when first shown.
    pub initial_height: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            min_width: 600.0,
            base_min_height: 300.0,
            radio_row_height: 50.0,
            initial_width: 600.0,
            initial_height: 300.0,
        }
    }
}

impl GeometryConfig {
    /// Check that every value is positive and finite.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidGeometry`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("min_width", self.min_width),
            ("base_min_height", self.base_min_height),
            ("radio_row_height", self.radio_row_height),
            ("initial_width", self.initial_width),
            ("initial_height", self.initial_height),
        ];
        for (field, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidGeometry { field, value });
            }
        }
        Ok(())
    }

    /// Layout state at the base tier.
    pub fn layout_state(&self) -> LayoutState {
        LayoutState::new(self.min_width, self.base_min_height, self.radio_row_height)
    }

    /// Requested size for the first layout pass.
    pub fn initial_size(&self) -> Size {
        Size::new(self.initial_width, self.initial_height)
    }
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Geometry constants.
    pub geometry: GeometryConfig,
    /// Close instead of minimise.
    pub taskbar_hide: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            geometry: GeometryConfig::default(),
            taskbar_hide: false,
            log_file_path: default_log_path(),
        }
    }
}

impl SettingsSource for ResolvedConfig {
    fn get_bool(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::RadioOverlayTaskbarHide => self.taskbar_hide,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/radio-overlay/radio-overlay.log` on Unix-like
/// systems, or the appropriate platform path elsewhere.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("radio-overlay").join("radio-overlay.log")
    } else {
        PathBuf::from("radio-overlay.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
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
/// Returns `~/.config/radio-overlay/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if the config directory cannot be
/// determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("radio-overlay").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `RADIO_OVERLAY_CONFIG` environment variable
/// 3. Default path `~/.config/radio-overlay/config.toml`
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

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Parse a boolean flag as commonly written in environment variables.
pub fn parse_bool_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `RADIO_OVERLAY_TASKBAR_HIDE`: Override `taskbar_hide`
///
/// Unparseable values are ignored with a warning.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(TASKBAR_HIDE_ENV_VAR) {
        match parse_bool_flag(&raw) {
            Some(value) => config.taskbar_hide = value,
            None => tracing::warn!(
                var = TASKBAR_HIDE_ENV_VAR,
                value = %raw,
                "ignoring unparseable boolean"
            ),
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let geometry = GeometryConfig {
        min_width: config.min_width.unwrap_or(defaults.geometry.min_width),
        base_min_height: config
            .base_min_height
            .unwrap_or(defaults.geometry.base_min_height),
        radio_row_height: config
            .radio_row_height
            .unwrap_or(defaults.geometry.radio_row_height),
        initial_width: config
            .initial_width
            .unwrap_or(defaults.geometry.initial_width),
        initial_height: config
            .initial_height
            .unwrap_or(defaults.geometry.initial_height),
    };

    ResolvedConfig {
        geometry,
        taskbar_hide: config.taskbar_hide.unwrap_or(defaults.taskbar_hide),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    taskbar_hide_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(taskbar_hide) = taskbar_hide_override {
        config.taskbar_hide = taskbar_hide;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
