//! Error types for covbadge-core

use thiserror::Error as ThisError;

/// Result type alias for covbadge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for covbadge operations
#[derive(Debug, ThisError)]
pub enum Error {
    /// Coverage string is not a number
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport failure talking to the badge service
    #[error("HTTP error: {0}")]
    Http(String),

    /// Badge service answered with a non-success status
    #[error("HTTP status error: {0}")]
    Status(String),

    /// Response body is not valid UTF-8
    #[error("Decode error: {0}")]
    Decode(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Runtime error (Tokio)
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<tempfile::PersistError> for Error {
    fn from(err: tempfile::PersistError) -> Self {
        Error::Io(err.error)
    }
}

/// Fieldless error category for zero-cost pattern matching.
///
/// Single byte representation (`#[repr(u8)]`), `Copy`, no allocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorKind {
    /// Coverage parse error
    Parse,
    /// Configuration error
    Config,
    /// HTTP transport error
    Http,
    /// Non-success HTTP status
    Status,
    /// Body decoding error
    Decode,
    /// I/O operation error
    Io,
    /// Runtime error
    Runtime,
}

impl Error {
    /// Get the error kind — zero allocation, returns a Copy enum.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse(_) => ErrorKind::Parse,
            Error::Config(_) => ErrorKind::Config,
            Error::Http(_) => ErrorKind::Http,
            Error::Status(_) => ErrorKind::Status,
            Error::Decode(_) => ErrorKind::Decode,
            Error::Io(_) => ErrorKind::Io,
            Error::Runtime(_) => ErrorKind::Runtime,
        }
    }

    /// Borrow the error message — zero allocation.
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Error::Parse(msg)
            | Error::Config(msg)
            | Error::Http(msg)
            | Error::Status(msg)
            | Error::Decode(msg)
            | Error::Runtime(msg) => msg,
            Error::Io(_) => "I/O error",
        }
    }
}
