//! Orchestration: read, merge, optionally redact, then encode or describe.
//!
//! Output is rendered fully in memory before anything is written, so a
//! failing source never leaves a partial calendar on stdout.

use std::io::Write;

use calcat_core::{FieldWhitelist, build_calendar, describe_at, merge_events, redact_all};
use calcat_sources::{Location, SourceReader, codec, load_calendars};
use chrono::{DateTime, Utc};
use icalendar::{Calendar, Event};
use tracing::{debug, info};

use crate::error::CliResult;

/// The terminal output of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// A merged iCalendar document.
    #[default]
    Calendar,
    /// One human-readable line per event.
    Describe,
}

/// Options for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Redact events before output.
    pub opaque: bool,
    /// Which output to produce.
    pub mode: OutputMode,
    /// Fields kept when `opaque` is set.
    pub whitelist: FieldWhitelist,
    /// Maximum number of sources fetched at once.
    pub concurrency: usize,
    /// Reference time for descriptions; the current time if unset.
    pub now: Option<DateTime<Utc>>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            opaque: false,
            mode: OutputMode::Calendar,
            whitelist: FieldWhitelist::default(),
            concurrency: 4,
            now: None,
        }
    }
}

impl PipelineOptions {
    /// Builder method to enable redaction.
    pub fn with_opaque(mut self, opaque: bool) -> Self {
        self.opaque = opaque;
        self
    }

    /// Builder method to set the output mode.
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder method to set the redaction whitelist.
    pub fn with_whitelist(mut self, whitelist: FieldWhitelist) -> Self {
        self.whitelist = whitelist;
        self
    }

    /// Builder method to set fetch concurrency.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Builder method to pin the reference time.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }
}

/// A configured run over a [`SourceReader`].
pub struct Pipeline<R> {
    reader: R,
    options: PipelineOptions,
}

impl<R: SourceReader> Pipeline<R> {
    /// Creates a new pipeline.
    pub fn new(reader: R, options: PipelineOptions) -> Self {
        Self { reader, options }
    }

    /// Reads every location and renders the output in memory.
    ///
    /// # Errors
    ///
    /// Returns the first read or decode failure.
    pub async fn render(&self, locations: &[Location]) -> CliResult<Vec<u8>> {
        let calendars =
            load_calendars(&self.reader, locations, self.options.concurrency).await?;
        info!(sources = calendars.len(), "Read all sources");
        Ok(render_calendars(calendars, &self.options))
    }

    /// Reads every location and writes the output to `out`.
    ///
    /// Nothing is written unless every source was read and decoded.
    pub async fn run<W: Write>(&self, locations: &[Location], out: &mut W) -> CliResult<()> {
        let output = self.render(locations).await?;
        out.write_all(&output)?;
        out.flush()?;
        Ok(())
    }
}

/// Merges `calendars` and renders them according to `options`.
pub fn render_calendars(calendars: Vec<Calendar>, options: &PipelineOptions) -> Vec<u8> {
    let merged = merge_events(calendars);
    let events: Box<dyn Iterator<Item = Event> + '_> = if options.opaque {
        debug!(fields = ?options.whitelist, "Redacting events");
        Box::new(redact_all(merged, &options.whitelist))
    } else {
        Box::new(merged)
    };

    match options.mode {
        OutputMode::Calendar => {
            let calendar = build_calendar(events);
            debug!(events = calendar.components.len(), "Encoding merged calendar");
            codec::encode(&calendar)
        }
        OutputMode::Describe => {
            let now = options.now.unwrap_or_else(Utc::now);
            let mut output = String::new();
            for line in describe_at(events, now) {
                output.push_str(&line);
                output.push('\n');
            }
            output.into_bytes()
        }
    }
}
