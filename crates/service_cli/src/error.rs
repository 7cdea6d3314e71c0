//! Error types for the roots CLI.

use roots_core::EquationError;
use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Equation could not be built or solved
    #[error(transparent)]
    Equation(#[from] EquationError),

    /// A coefficient token is not a real number
    #[error("Not a number: '{token}'")]
    Parse {
        /// The offending token
        token: String,
    },

    /// Input ended while a coefficient was still expected
    #[error("Unexpected end of input")]
    UnexpectedEof,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create a parse error for `token`
    pub fn parse(token: impl Into<String>) -> Self {
        Self::Parse {
            token: token.into(),
        }
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
