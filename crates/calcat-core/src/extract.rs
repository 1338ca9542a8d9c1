//! Event extraction from decoded calendars.

use icalendar::{Calendar, CalendarComponent, Event};
use tracing::trace;

/// Yields the events that are direct children of `calendar`, in order.
///
/// Other component kinds (to-dos, venues, time zones, ...) are skipped.
/// The calendar is left untouched; each event is cloned out.
pub fn extract_events(calendar: &Calendar) -> impl Iterator<Item = Event> + '_ {
    calendar.components.iter().filter_map(|component| match component {
        CalendarComponent::Event(event) => Some(event.clone()),
        _ => {
            trace!("Skipping non-event component");
            None
        }
    })
}

/// Like [`extract_events`], but consumes the calendar instead of cloning.
pub fn into_events(calendar: Calendar) -> impl Iterator<Item = Event> {
    calendar
        .components
        .into_iter()
        .filter_map(|component| match component {
            CalendarComponent::Event(event) => Some(event),
            _ => {
                trace!("Skipping non-event component");
                None
            }
        })
}
