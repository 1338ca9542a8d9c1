//! Event pipeline: extraction, merge, redaction, description
//!
//! The stages operate on the `icalendar` component model:
//!
//! ```text
//! Calendar ─┐
//! Calendar ─┼─ merge_events() ─▶ [redact_all()] ─┬─▶ build_calendar() ─▶ Calendar
//! Calendar ─┘                                    └─▶ describe()       ─▶ lines
//! ```
//!
//! Every stage produces new values; decoded calendars are never mutated.

pub mod build;
pub mod describe;
pub mod extract;
pub mod humanize;
pub mod merge;
pub mod redact;
pub mod time;
pub mod tracing;

#[cfg(test)]
mod test_support;

pub use build::build_calendar;
pub use describe::{describe, describe_at, describe_event};
pub use extract::{extract_events, into_events};
pub use humanize::relative_phrase;
pub use merge::{merge_events, try_merge_events};
pub use redact::{DEFAULT_FIELDS, FieldWhitelist, redact, redact_all, redact_default};
pub use time::EventTime;
pub use self::tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
