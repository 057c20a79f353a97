//! Common error types for Amuse

use thiserror::Error;

/// Common result type for Amuse operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the Amuse crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed TOML configuration file
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Player state could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The state provider failed to produce a player state
    #[error("Provider error: {0}")]
    Provider(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
