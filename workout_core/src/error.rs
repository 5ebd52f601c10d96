//! Error types for the workout_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for workout_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Activity code is not one of the recognized codes
    #[error("Unknown activity kind: {0:?}")]
    UnknownActivityKind(String),

    /// Raw argument list does not match the activity's arity
    #[error("Argument count mismatch for {code}: expected {expected}, got {actual}")]
    ArgumentCountMismatch {
        code: String,
        expected: usize,
        actual: usize,
    },

    /// A raw sensor value is out of range (non-positive, non-finite, fractional count)
    #[error("Invalid measurement: {field} = {value}: {reason}")]
    InvalidMeasurement {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
