use std::io;
use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
///
/// The rule-based reply engine itself never fails; these variants exist for the
/// surrounding plumbing (configuration, terminal I/O) and for the optional
/// remote backend.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents transport-level errors from the remote reply backend.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Represents a remote backend that answered but not with a usable reply
    /// (non-success status, missing or malformed payload).
    #[error("Backend error: {0}")]
    Backend(String),

    /// Represents configuration-related errors (e.g., an invalid backend URL).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Config(format!("URL parse error: {}", err))
    }
}
