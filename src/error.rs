use std::fmt;

/// Error types for instance handling and solving
#[derive(Debug)]
pub enum Error {
    /// Input text or configuration could not be parsed
    InvalidInput(String),
    /// No trial produced a region meeting the coverage target
    Infeasible(String),
    /// Underlying I/O failure while reading an instance or a config file
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            Error::Infeasible(msg) => write!(f, "infeasible instance: {}", msg),
            Error::Io(err) => write!(f, "i/o error: {}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// Result type alias for solver operations
pub type Result<T> = std::result::Result<T, Error>;
