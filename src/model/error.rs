//! Error types for the radio-overlay binary.
//!
//! The geometry core itself is infallible: NaN scales are substituted, stale
//! radio data selects the base tier, and degenerate aspect ratios are skipped
//! with a warning. Errors only exist at the process edges (configuration,
//! logging setup, replay scripts).
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from the binary
//!   - [`ConfigError`] - Config file read/parse failures and invalid geometry
//!   - [`LoggingError`] - Tracing subscriber setup failures
//!   - [`ScriptError`] - Replay script read/parse failures

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::logging::LoggingError;

/// Top-level application error encompassing all failure modes.
///
/// Domain errors convert via `From`, so `main` can use `?` throughout.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or resolved.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Log output could not be initialised.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// The replay script could not be loaded.
    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    /// Writing the replay report failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors encountered when loading a replay script.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The script file could not be read.
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use radio_overlay::model::error::ScriptError;
    ///
    /// let err = ScriptError::Read {
    ///     path: PathBuf::from("/tmp/missing.json"),
    ///     source: std::io::Error::from(std::io::ErrorKind::NotFound),
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("Failed to read script {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The script file is not a valid replay script.
    #[error("Invalid script {path}: {source}")]
    Parse {
        /// Path with invalid content.
        path: PathBuf,
        /// JSON error with line and column.
        #[source]
        source: serde_json::Error,
    },
}
