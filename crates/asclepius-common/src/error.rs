//! Application error types for Asclepius services.

use thiserror::Error;

/// Main application error type used across the Asclepius services.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed rule configuration: missing required keys, unsupported
    /// condition shapes, or invalid range bounds. Raised while the engine is
    /// being built; no partial rule set survives it.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Malformed appointment record batch (unreadable or unparsable input).
    #[error("Record load error: {0}")]
    RecordLoadError(String),
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
