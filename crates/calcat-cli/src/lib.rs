//! CLI, configuration and the read/merge/render pipeline
//!
//! This crate provides the `calcat` command-line interface.

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;

pub use cli::Cli;
pub use config::CliConfig;
pub use error::{CliError, CliResult};
pub use pipeline::{OutputMode, Pipeline, PipelineOptions, render_calendars};
