//! Log subscriber setup.
//!
//! Logs go to stderr; stdout is reserved for the calendar or description
//! lines.

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Failure to install the log subscriber.
#[derive(Debug, Error)]
pub enum TracingError {
    #[error("failed to set global tracing subscriber: {0}")]
    SetGlobalSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),

    #[error("failed to parse log filter: {0}")]
    EnvFilter(#[from] tracing_subscriber::filter::ParseError),
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TracingOutputFormat {
    #[default]
    Compact,
    Json,
}

/// How `calcat` logs.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Level for `calcat` crates when neither `env_filter` nor `RUST_LOG` is set.
    pub default_level: Level,
    pub output_format: TracingOutputFormat,
    /// Adds file, line and target to each record.
    pub include_location: bool,
    /// Explicit filter directive; takes precedence over `RUST_LOG`.
    pub env_filter: Option<String>,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_level: Level::WARN,
            output_format: TracingOutputFormat::Compact,
            include_location: false,
            env_filter: None,
        }
    }
}

impl TracingConfig {
    /// Settings for `--debug`.
    #[must_use]
    pub fn cli_debug() -> Self {
        Self {
            default_level: Level::DEBUG,
            include_location: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: TracingOutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    fn filter(&self) -> Result<EnvFilter, TracingError> {
        match self.env_filter {
            Some(ref directive) => Ok(EnvFilter::try_new(directive)?),
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("calcat={}", self.default_level)))),
        }
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Fails on an invalid filter directive or when a subscriber is already set.
pub fn init_tracing(config: TracingConfig) -> Result<(), TracingError> {
    let filter = config.filter()?;
    let location = config.include_location;

    match config.output_format {
        TracingOutputFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .without_time()
                .with_writer(std::io::stderr)
                .with_file(location)
                .with_line_number(location)
                .with_target(location);
            tracing::subscriber::set_global_default(
                tracing_subscriber::registry().with(filter).with(layer),
            )?;
        }
        TracingOutputFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_file(location)
                .with_line_number(location)
                .with_target(location);
            tracing::subscriber::set_global_default(
                tracing_subscriber::registry().with(filter).with(layer),
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_quiet_compact_logs() {
        let config = TracingConfig::default();
        assert_eq!(config.default_level, Level::WARN);
        assert_eq!(config.output_format, TracingOutputFormat::Compact);
        assert!(!config.include_location);
        assert!(config.env_filter.is_none());
    }

    #[test]
    fn debug_preset() {
        let config = TracingConfig::cli_debug().with_format(TracingOutputFormat::Json);
        assert_eq!(config.default_level, Level::DEBUG);
        assert_eq!(config.output_format, TracingOutputFormat::Json);
        assert!(config.include_location);
    }

    #[test]
    fn explicit_filter_is_parsed() {
        let config = TracingConfig::default().with_env_filter("calcat_sources=trace");
        assert_eq!(config.env_filter.as_deref(), Some("calcat_sources=trace"));
        assert!(config.filter().is_ok());
    }

    #[test]
    fn invalid_filter_is_rejected() {
        let config = TracingConfig::default().with_env_filter("calcat=notalevel");
        assert!(matches!(
            init_tracing(config),
            Err(TracingError::EnvFilter(_))
        ));
    }
}
