//! Error types for the freightprint_core library.

use std::io;
use std::path::PathBuf;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for freightprint_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input resource does not exist
    #[error("Input not found: {0}")]
    NotFound(PathBuf),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Malformed row in the input resource
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric parse failure while aggregating emissions
    #[error("Computation error: {0}")]
    Computation(String),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
