//! CLI configuration.
//!
//! Settings live in `~/.config/calcat/config.toml` by default. A missing
//! file means defaults; command-line flags override file values.

use std::path::{Path, PathBuf};
use std::time::Duration;

use calcat_core::{FieldWhitelist, TracingOutputFormat};
use calcat_sources::ReaderConfig;
use serde::{Deserialize, Serialize};

/// Configuration for the calcat CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Debug logging.
    pub debug: bool,

    /// Log output format.
    pub log_format: LogFormat,

    /// Log filter directive such as `calcat_sources=trace`; overrides `RUST_LOG`.
    pub log_filter: Option<String>,

    /// Source fetching settings.
    pub fetch: FetchSettings,

    /// Redaction settings.
    pub opaque: OpaqueSettings,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Single-line human-readable logs.
    #[default]
    Compact,
    /// One JSON object per line.
    Json,
}

impl From<LogFormat> for TracingOutputFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Compact => Self::Compact,
            LogFormat::Json => Self::Json,
        }
    }
}

/// Source fetching settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchSettings {
    /// Network timeout in seconds.
    pub timeout_secs: u64,

    /// Maximum number of sources fetched at once.
    pub concurrency: usize,

    /// User agent sent with HTTP requests.
    pub user_agent: Option<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout_secs: ReaderConfig::DEFAULT_TIMEOUT_SECS,
            concurrency: 4,
            user_agent: None,
        }
    }
}

/// Redaction settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OpaqueSettings {
    /// Fields kept in addition to DTSTART, DTEND and UID.
    pub keep_fields: Vec<String>,
}

impl CliConfig {
    /// Loads configuration from the default path.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse {}: {}", path.display(), e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("calcat")
            .join("config.toml")
    }

    /// Builds the network reader settings.
    pub fn reader_config(&self) -> ReaderConfig {
        let config =
            ReaderConfig::default().with_timeout(Duration::from_secs(self.fetch.timeout_secs));
        match self.fetch.user_agent {
            Some(ref agent) => config.with_user_agent(agent),
            None => config,
        }
    }

    /// Builds the redaction whitelist.
    pub fn whitelist(&self) -> FieldWhitelist {
        let mut whitelist = FieldWhitelist::default();
        whitelist.extend(&self.opaque.keep_fields);
        whitelist
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = CliConfig::default();
        assert!(!config.debug);
        assert_eq!(config.log_format, LogFormat::Compact);
        assert!(config.log_filter.is_none());
        assert_eq!(config.fetch.timeout_secs, 30);
        assert_eq!(config.fetch.concurrency, 4);
        assert_eq!(config.whitelist(), FieldWhitelist::default());
    }

    #[test]
    fn parses_full_file() {
        let toml_content = r#"
debug = true
log_format = "json"
log_filter = "calcat_sources=trace"

[fetch]
timeout_secs = 5
concurrency = 2
user_agent = "my-agent"

[opaque]
keep_fields = ["summary", "LOCATION"]
"#;
        let config: CliConfig = toml::from_str(toml_content).unwrap();
        assert!(config.debug);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_filter.as_deref(), Some("calcat_sources=trace"));
        assert_eq!(config.fetch.concurrency, 2);

        let reader = config.reader_config();
        assert_eq!(reader.timeout, Duration::from_secs(5));
        assert_eq!(reader.user_agent, "my-agent");

        assert_eq!(
            config.whitelist().iter().collect::<Vec<_>>(),
            vec!["DTSTART", "DTEND", "UID", "SUMMARY", "LOCATION"]
        );
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config: CliConfig = toml::from_str("[fetch]\ntimeout_secs = 10\n").unwrap();
        assert_eq!(config.fetch.timeout_secs, 10);
        assert_eq!(config.fetch.concurrency, 4);
        assert!(config.opaque.keep_fields.is_empty());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[opaque]\nkeep_fields = [\"CATEGORIES\"]").unwrap();

        let config = CliConfig::load_from(file.path()).unwrap();
        assert!(config.whitelist().contains("CATEGORIES"));
    }

    #[test]
    fn load_from_invalid_file_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "fetch = \"not a table\"").unwrap();

        let err = CliConfig::load_from(file.path()).unwrap_err();
        assert!(err.contains("failed to parse"));
    }

    #[test]
    fn default_path_ends_with_calcat() {
        assert!(CliConfig::default_path().ends_with("calcat/config.toml"));
    }
}
