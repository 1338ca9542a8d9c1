//! Source locations, file/HTTP reading and the iCalendar codec.
//!
//! - [`Location`] - a file path or URL, with `webcal` normalized to `http`
//! - [`SourceReader`] - the trait that turns a location into text
//! - [`codec`] - decoding text to [`icalendar::Calendar`] and back
//! - [`load_calendars`] - read and decode a list of sources in order
//!
//! ```text
//! "webcal://…"  ──▶ Location ──▶ SourceReader::read ──▶ codec::decode ──▶ Calendar
//! "./work.ics"  ──┘
//! ```

pub mod codec;
pub mod error;
pub mod loader;
pub mod location;
pub mod reader;

pub use error::{SourceError, SourceErrorCode, SourceResult};
pub use loader::{load_calendar, load_calendars};
pub use location::{Location, LocationKind, normalize_scheme};
pub use reader::{BoxFuture, DefaultReader, FileReader, HttpReader, ReaderConfig, SourceReader};
