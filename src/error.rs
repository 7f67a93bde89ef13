//! Error types for sqlindent

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for sqlindent operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for sqlindent
///
/// Formatting itself never fails: malformed SQL degrades to a best-effort
/// layout. Errors only come from rejected arguments and from loading the
/// indentation config.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("indent width must not be negative, got {width}")]
    #[diagnostic(
        code(sqlindent::invalid_indent),
        help("pass a width of zero or more")
    )]
    InvalidIndent { width: i64 },

    #[error("Config error: {message}")]
    #[diagnostic(code(sqlindent::config_error))]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    #[diagnostic(code(sqlindent::io_error))]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigError {
            message: err.to_string(),
        }
    }
}
