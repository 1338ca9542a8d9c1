//! Merging events from several calendars into one sequence.
//!
//! Merging is plain concatenation: every event of the first calendar, then
//! every event of the second, and so on. Events that share a `UID` across
//! calendars are all kept.

use icalendar::{Calendar, Event};

use crate::extract::into_events;

/// Concatenates the events of `calendars`, preserving calendar order.
///
/// The next calendar is only pulled once the previous one is exhausted.
pub fn merge_events<I>(calendars: I) -> impl Iterator<Item = Event>
where
    I: IntoIterator<Item = Calendar>,
{
    calendars.into_iter().flat_map(into_events)
}

/// Merges calendars that may have failed to load.
///
/// Events of every successfully loaded calendar before a failure are yielded
/// first, followed by the failure itself. Collecting into
/// `Result<Vec<_>, _>` stops at the first error.
pub fn try_merge_events<I, E>(calendars: I) -> impl Iterator<Item = Result<Event, E>>
where
    I: IntoIterator<Item = Result<Calendar, E>>,
{
    calendars.into_iter().flat_map(|calendar| {
        let (events, error): (_, Option<Result<Event, E>>) = match calendar {
            Ok(calendar) => (Some(into_events(calendar)), None),
            Err(e) => (None, Some(Err(e))),
        };
        events.into_iter().flatten().map(Ok).chain(error)
    })
}
