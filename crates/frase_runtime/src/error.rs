//! Error types for the runtime.
//!
//! Analysis itself never fails; these cover terminal, file and output
//! problems around it.

use thiserror::Error;

/// The main error type for runtime operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a usage error.
    #[must_use]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Usage(message.into()))
    }

    /// Creates a line editor error.
    #[must_use]
    pub fn editor(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Editor(message.into()))
    }
}

/// Categorized error kinds.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Reading input files or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The line editor failed.
    #[error("line editor error: {0}")]
    Editor(String),

    /// Bad command-line arguments.
    #[error("{0}")]
    Usage(String),

    /// JSON output failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::new(ErrorKind::Serialize(err))
    }
}

/// Result type for runtime operations.
pub type Result<T> = std::result::Result<T, Error>;
