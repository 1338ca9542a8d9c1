//! Wrapping events back into a calendar.

use icalendar::{Calendar, Event};

/// Creates a new calendar holding `events` as direct children, in order.
///
/// Calendar-level properties are left to the codec's defaults.
pub fn build_calendar<I>(events: I) -> Calendar
where
    I: IntoIterator<Item = Event>,
{
    let mut calendar = Calendar::new();
    for event in events {
        calendar.push(event);
    }
    calendar
}
