//! CLI error types.

use std::fmt;

use calcat_sources::SourceError;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur while running `calcat`.
#[derive(Debug)]
pub enum CliError {
    /// Configuration error.
    Config(String),
    /// A source could not be read or decoded.
    Source(SourceError),
    /// Writing the output failed.
    Io(std::io::Error),
    /// The async runtime or logging could not be set up.
    Runtime(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {}", msg),
            Self::Source(err) => write!(f, "{}", err),
            Self::Io(err) => write!(f, "IO error: {}", err),
            Self::Runtime(msg) => write!(f, "runtime error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Source(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<SourceError> for CliError {
    fn from(err: SourceError) -> Self {
        Self::Source(err)
    }
}

impl From<calcat_core::TracingError> for CliError {
    fn from(err: calcat_core::TracingError) -> Self {
        Self::Runtime(err.to_string())
    }
}
