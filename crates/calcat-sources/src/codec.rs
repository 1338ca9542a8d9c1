//! iCalendar codec.
//!
//! Decoding wraps the `icalendar` parser and maps failures to
//! [`SourceErrorCode::MalformedCalendar`](crate::SourceErrorCode).
//!
//! Encoding writes exactly the properties and components present in the
//! tree, so the same calendar always encodes to the same bytes. Unlike the
//! `Display` impl of `icalendar`, no `DTSTAMP` or `UID` is made up for
//! components that lack one.

use icalendar::{Calendar, CalendarComponent, Component, Property, ValueType};
use tracing::debug;

use crate::error::{SourceError, SourceResult};

const CALENDAR_HEADER: &str = "BEGIN:VCALENDAR";

/// Maximum content line length in octets, excluding the line break.
const MAX_LINE_OCTETS: usize = 75;

/// Text properties whose commas separate list items.
const TEXT_LISTS: [&str; 2] = ["CATEGORIES", "RESOURCES"];

/// Decodes iCalendar text.
///
/// The text must open with a `BEGIN:VCALENDAR` line (a UTF-8 byte order
/// mark and leading whitespace are ignored).
pub fn decode(text: &str) -> SourceResult<Calendar> {
    let text = text.trim_start_matches('\u{feff}').trim_start();

    let opens_calendar = text
        .get(..CALENDAR_HEADER.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(CALENDAR_HEADER));
    if !opens_calendar {
        return Err(SourceError::malformed("document does not start with BEGIN:VCALENDAR"));
    }

    let calendar = text
        .parse::<Calendar>()
        .map_err(|e| SourceError::malformed(format!("failed to parse calendar: {}", e)))?;

    debug!(components = calendar.components.len(), "Decoded calendar");
    Ok(calendar)
}

/// Encodes a calendar as iCalendar bytes.
pub fn encode(calendar: &Calendar) -> Vec<u8> {
    let mut out = String::new();
    push_line("BEGIN:VCALENDAR", &mut out);
    for property in &calendar.properties {
        write_property(property, &mut out);
    }
    for component in &calendar.components {
        match component {
            CalendarComponent::Event(event) => write_component(event, &mut out),
            CalendarComponent::Todo(todo) => write_component(todo, &mut out),
            CalendarComponent::Venue(venue) => write_component(venue, &mut out),
            CalendarComponent::Other(other) => write_component(other, &mut out),
            unknown => debug!(?unknown, "Skipping unsupported component"),
        }
    }
    push_line("END:VCALENDAR", &mut out);
    out.into_bytes()
}

fn write_component<C: Component>(component: &C, out: &mut String) {
    let kind = component.component_kind();
    push_line(&format!("BEGIN:{}", kind), out);
    for property in component.properties().values() {
        write_property(property, out);
    }
    for property in component.multi_properties().values().flatten() {
        write_property(property, out);
    }
    for child in component.components() {
        write_component(child, out);
    }
    push_line(&format!("END:{}", kind), out);
}

fn write_property(property: &Property, out: &mut String) {
    let mut line = String::from(property.key());

    let mut params: Vec<_> = property.params().values().collect();
    params.sort_by(|a, b| a.key().cmp(b.key()));
    for param in params {
        line.push(';');
        line.push_str(param.key());
        line.push('=');
        if param.value().contains([':', ';']) {
            line.push('"');
            line.push_str(param.value());
            line.push('"');
        } else {
            line.push_str(param.value());
        }
    }

    line.push(':');
    match property.value_type() {
        Some(ValueType::Text) => {
            let is_list = TEXT_LISTS.contains(&property.key());
            push_escaped_text(property.value(), is_list, &mut line);
        }
        _ => line.push_str(property.value()),
    }
    push_line(&line, out);
}

fn push_escaped_text(value: &str, is_list: bool, out: &mut String) {
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' if !is_list => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            c => out.push(c),
        }
    }
}

/// Appends `line` folded at 75 octets on character boundaries, then CRLF.
fn push_line(line: &str, out: &mut String) {
    let mut current = 0;
    for c in line.chars() {
        if current + c.len_utf8() > MAX_LINE_OCTETS {
            out.push_str("\r\n ");
            current = 1;
        }
        out.push(c);
        current += c.len_utf8();
    }
    out.push_str("\r\n");
}
