//! Error handling module for the sonic CLI.
//!
//! Structured error types using `thiserror`; the CLI's error type wraps
//! the library's rather than duplicating its lexical error kinds.

use thiserror::Error;

/// Main error type for the sonic CLI application.
#[derive(Error, Debug)]
pub enum CliError {
    /// Error when IO operations fail (reading source, stdin).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when a required configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A lexical error surfaced from `sonic-lex`.
    #[error("Lex error: {0}")]
    Lex(#[from] sonic_lex::LexError),

    /// Error when JSON rendering of the token stream fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using `CliError`.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = CliError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cli_err: CliError = io_err.into();
        assert!(matches!(cli_err, CliError::Io(_)));
    }

    #[test]
    fn test_lex_error_conversion() {
        let lex_err = sonic_lex::lex("\"oops").unwrap_err();
        let cli_err: CliError = lex_err.into();
        assert!(matches!(cli_err, CliError::Lex(_)));
    }
}
