//! # App Error Type
//!
//! Unified error type for the terminal app.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Config file ── io / toml errors ───────────┐                           │
//! │                                             │                           │
//! │  Env / file values ── InvalidConfig ────────┼──► AppError ──► main()    │
//! │                                             │        exit code 1        │
//! │  stdout / --json ── io / serde_json ────────┘                           │
//! │                                                                         │
//! │  Session input ── InvalidCommand ──► printed as a hint, session goes on │
//! │                                                                         │
//! │  A bad COST is never an error: the core shows a $0.00 tip.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use tiptime_core::CoreError;

/// Errors raised by the terminal app.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading the config file or writing to the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for [`crate::config::AppConfig`].
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A config value parsed but is not acceptable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A session line could not be understood.
    #[error("{0}")]
    InvalidCommand(String),

    /// Serializing `--json` output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from the tip core (rate or locale lookups).
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
