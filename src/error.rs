//! Error types for coordkit

use std::fmt;
use std::io;

/// Result type for coordkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in coordkit operations
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(io::Error),

    /// CSV read or write error
    Csv(csv::Error),

    /// JSON serialization error
    Json(serde_json::Error),

    /// Coordinate with a component count other than 2 or 3
    InvalidArity(usize),

    /// Token that should have been a float
    InvalidNumber(String),

    /// Operation needs at least one point
    EmptySequence,

    /// Malformed degrees-minutes-seconds value
    InvalidDms(String),

    /// Error tied to a specific input line
    Line { line: u64, source: Box<Error> },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Csv(e) => write!(f, "{}", e),
            Error::Json(e) => write!(f, "JSON error: {}", e),
            Error::InvalidArity(count) => {
                write!(f, "Invalid arity: expected 2 or 3 components, got {}", count)
            }
            Error::InvalidNumber(token) => write!(f, "Invalid number: {:?}", token),
            Error::EmptySequence => write!(f, "Empty coordinate sequence"),
            Error::InvalidDms(value) => write!(f, "Invalid degrees-minutes-seconds: {:?}", value),
            Error::Line { line, source } => write!(f, "line {}: {}", line, source),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Csv(e) => Some(e),
            Error::Json(e) => Some(e),
            Error::Line { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Error::Csv(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json(error)
    }
}
