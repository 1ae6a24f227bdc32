//! Error types for configuration handling.
//!
//! The interaction core absorbs invalid requests as no-ops; only the
//! configuration edges (shelf dimensions, settings files) can fail.

use thiserror::Error;

/// Errors from validating a `ShelfConfig`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A dimension is zero, negative or not finite
    #[error("invalid {name}: {value} (must be a positive number)")]
    InvalidDimension { name: &'static str, value: f64 },

    /// Material thickness leaves no interior
    #[error("material thickness {thickness} must be below {limit} (half of the smaller outer dimension)")]
    ThicknessTooLarge { thickness: f64, limit: f64 },
}

/// Errors from loading `InteractionSettings`
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A setting parsed but is out of range
    #[error("invalid setting {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
