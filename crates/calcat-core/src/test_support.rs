//! Shared fixtures for unit tests.

use chrono::{DateTime, TimeZone, Utc};
use icalendar::{Calendar, Component, Event, EventLike, Todo};

pub(crate) fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

/// An event carrying the usual fields plus metadata that must not leak.
pub(crate) fn meeting(uid: &str, summary: &str) -> Event {
    Event::new()
        .uid(uid)
        .summary(summary)
        .description("Agenda: quarterly numbers")
        .location("Room 4")
        .starts(utc(2025, 2, 5, 10, 0))
        .ends(utc(2025, 2, 5, 11, 0))
        .done()
}

pub(crate) fn calendar_of(events: &[Event]) -> Calendar {
    let mut calendar = Calendar::new();
    for event in events {
        calendar.push(event.clone());
    }
    calendar
}

/// A calendar that mixes events with a to-do.
pub(crate) fn mixed_calendar(uids: &[&str]) -> Calendar {
    let mut calendar = Calendar::new();
    calendar.push(Todo::new().summary("Buy milk").done());
    for uid in uids {
        calendar.push(meeting(uid, &format!("Meeting {}", uid)));
    }
    calendar.push(Todo::new().summary("Call back").done());
    calendar
}

pub(crate) fn uids(events: &[Event]) -> Vec<&str> {
    events.iter().filter_map(|e| e.get_uid()).collect()
}
