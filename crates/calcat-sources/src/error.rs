//! Error types for reading and decoding calendar sources.
//!
//! Both kinds of failure abort the whole run: a partially merged calendar
//! would misrepresent availability.

use std::fmt;
use thiserror::Error;

/// The category of a source error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceErrorCode {
    /// The location could not be reached or opened.
    SourceUnavailable,
    /// The source text is not a decodable calendar.
    MalformedCalendar,
}

impl SourceErrorCode {
    /// Returns a stable name for this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SourceUnavailable => "source_unavailable",
            Self::MalformedCalendar => "malformed_calendar",
        }
    }
}

impl fmt::Display for SourceErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An error that occurred while reading or decoding one source.
#[derive(Debug, Error)]
pub struct SourceError {
    /// The error code categorizing this error.
    code: SourceErrorCode,
    /// A human-readable message describing the error.
    message: String,
    /// The offending location, as given by the caller.
    location: Option<String>,
    /// The underlying cause of this error, if any.
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SourceError {
    /// Creates a new source error with the given code and message.
    pub fn new(code: SourceErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            location: None,
            source: None,
        }
    }

    /// Creates a `SourceUnavailable` error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(SourceErrorCode::SourceUnavailable, message)
    }

    /// Creates a `MalformedCalendar` error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(SourceErrorCode::MalformedCalendar, message)
    }

    /// Sets the location this error refers to.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the source error for this error.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the error code.
    pub fn code(&self) -> SourceErrorCode {
        self.code
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending location, if set.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref location) = self.location {
            write!(f, "{}: ", location)?;
        }
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// A specialized Result type for source operations.
pub type SourceResult<T> = Result<T, SourceError>;
