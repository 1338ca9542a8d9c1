//! Time values read from event properties.
//!
//! [`EventTime`] mirrors the shapes an iCalendar `DTSTART`/`DTEND` can take
//! and resolves them to a single UTC instant for relative rendering.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
use icalendar::{CalendarDateTime, DatePerhapsTime};
use tracing::warn;

/// Longest forward transition bridged when a wall-clock time is skipped.
const MAX_GAP_HOURS: i64 = 24;

/// The time of an event endpoint as it appears in the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventTime {
    /// A datetime pinned to UTC (`...Z`).
    Utc(DateTime<Utc>),
    /// A datetime with a `TZID` parameter.
    Zoned {
        /// Wall-clock time in the named zone.
        date_time: NaiveDateTime,
        /// IANA zone identifier as written in the calendar.
        tzid: String,
    },
    /// A floating datetime, interpreted in the reader's local zone.
    Floating(NaiveDateTime),
    /// An all-day date.
    AllDay(NaiveDate),
}

impl EventTime {
    /// Resolves this time to a UTC instant.
    ///
    /// Floating times and all-day dates (at midnight) are placed in `local`.
    /// A `TZID` that `chrono-tz` does not know also falls back to `local`.
    /// Wall-clock times inside a DST gap resolve with the pre-gap offset.
    pub fn to_instant<Tz: TimeZone>(&self, local: &Tz) -> Option<DateTime<Utc>> {
        match self {
            Self::Utc(dt) => Some(*dt),
            Self::Zoned { date_time, tzid } => match tzid.parse::<chrono_tz::Tz>() {
                Ok(tz) => in_zone(date_time, &tz),
                Err(_) => {
                    warn!(tzid = %tzid, "Unknown TZID, using local time zone");
                    in_zone(date_time, local)
                }
            },
            Self::Floating(naive) => in_zone(naive, local),
            Self::AllDay(date) => in_zone(&date.and_hms_opt(0, 0, 0)?, local),
        }
    }
}

impl From<DatePerhapsTime> for EventTime {
    fn from(value: DatePerhapsTime) -> Self {
        match value {
            DatePerhapsTime::Date(date) => Self::AllDay(date),
            DatePerhapsTime::DateTime(CalendarDateTime::Utc(dt)) => Self::Utc(dt),
            DatePerhapsTime::DateTime(CalendarDateTime::Floating(naive)) => Self::Floating(naive),
            DatePerhapsTime::DateTime(CalendarDateTime::WithTimezone { date_time, tzid }) => {
                Self::Zoned { date_time, tzid }
            }
        }
    }
}

/// Places a wall-clock time in `tz`.
///
/// Ambiguous times take the earlier instant. Times skipped by a forward
/// transition use the offset in effect before the gap, so 02:30 on a
/// 02:00 to 03:00 spring-forward day lands on 03:30.
fn in_zone<Tz: TimeZone>(naive: &NaiveDateTime, tz: &Tz) -> Option<DateTime<Utc>> {
    if let Some(dt) = tz.from_local_datetime(naive).earliest() {
        return Some(dt.with_timezone(&Utc));
    }
    (1..=MAX_GAP_HOURS).find_map(|hours| {
        let shift = TimeDelta::hours(hours);
        let before = tz.from_local_datetime(&naive.checked_sub_signed(shift)?).earliest()?;
        Some(before.with_timezone(&Utc) + shift)
    })
}
