//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

use crate::pipeline::OutputMode;

/// calcat - concatenate, anonymize or describe calendars
///
/// Reads each SOURCE (a file path or an http/https/webcal URL) in order and
/// writes the merged events to stdout.
#[derive(Debug, Parser)]
#[command(name = "calcat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Calendar files or URLs, merged left to right
    #[arg(value_name = "SOURCE")]
    pub sources: Vec<String>,

    /// Keep only DTSTART, DTEND and UID on every event
    #[arg(long, short)]
    pub opaque: bool,

    /// Print one line per event instead of a calendar
    #[arg(long, short)]
    pub describe: bool,

    /// Extra field kept by --opaque (can be repeated)
    #[arg(long = "keep", value_name = "FIELD", action = clap::ArgAction::Append)]
    pub keep_fields: Vec<String>,

    /// Network timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Maximum number of sources fetched at once
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Path to configuration file
    #[arg(long, env = "CALCAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,
}

impl Cli {
    /// Returns the output mode selected by the flags.
    pub fn output_mode(&self) -> OutputMode {
        if self.describe {
            OutputMode::Describe
        } else {
            OutputMode::Calendar
        }
    }
}
