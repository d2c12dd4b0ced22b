//! Error types for brgrid

use thiserror::Error;

/// Core error type for brgrid operations
///
/// Engine interactions never fail; rejected gestures are no-ops. Only
/// configuration parsing and loading produce errors.
#[derive(Error, Debug)]
pub enum GridError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unknown UI mode: {0}")]
    UnknownMode(String),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias for brgrid operations
pub type Result<T> = std::result::Result<T, GridError>;
