//! Core error types for lickety-core.
//!
//! Two error kinds matter to the session engine: a malformed task duration
//! (a programming/config error, caught at construction) and an out-of-order
//! operation on a session (a harmless duplicate UI event). Everything else
//! is the usual config/IO plumbing.

use std::path::PathBuf;
use thiserror::Error;

use crate::timer::SessionStatus;

/// Core error type for lickety-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Task duration must be a positive number of minutes.
    #[error("invalid task duration: {minutes} minutes")]
    InvalidDuration { minutes: u64 },

    /// Operation is not legal in the session's current state.
    ///
    /// Only arises from duplicate or late UI events (double-pressing the
    /// action button, a tick arriving after completion). Callers are
    /// expected to ignore it.
    #[error("invalid transition: cannot {op} while {status}")]
    InvalidTransition {
        op: &'static str,
        status: SessionStatus,
    },

    /// Configuration-related errors
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// True for rejections that reflect duplicate/late input rather than
    /// a real fault.
    pub fn is_benign(&self) -> bool {
        matches!(self, CoreError::InvalidTransition { .. })
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
