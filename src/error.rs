//! Error types for the fallible edges (config, CLI input, server)
//!
//! The engine itself never fails; these only cover I/O around it.

use thiserror::Error;

/// Result alias for fallible operations outside the engine
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// File or socket I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON input could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML config could not be parsed
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Bind address did not parse
    #[error("Invalid bind address '{addr}': {source}")]
    InvalidAddr {
        addr: String,
        source: std::net::AddrParseError,
    },

    /// Input file had neither `responses` nor `raw_input.responses`
    #[error("Input error: {0}")]
    Input(String),
}
