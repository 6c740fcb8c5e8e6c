//! Errors reported by `vmodet` subcommands.

use thiserror::Error;
use vmode_lex::ModeConfigError;

/// Anything that stops a subcommand. `main` prints it and exits non-zero.
#[derive(Error, Debug)]
pub enum VmodetError {
    /// Error when the configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when the source to highlight cannot be used.
    #[error("Input error: {0}")]
    Input(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when the mode settings are rejected.
    #[error("Mode error: {0}")]
    Mode(#[from] ModeConfigError),
}

/// Shorthand used by every subcommand.
pub type Result<T> = std::result::Result<T, VmodetError>;
