//! Field redaction ("opaque" events).
//!
//! A redacted event carries only whitelisted properties, so a calendar can be
//! shared for busy/free purposes without leaking titles, attendees,
//! locations or descriptions.

use icalendar::{Component, Event};

/// Fields kept by default: the time range and the identifier.
pub const DEFAULT_FIELDS: [&str; 3] = ["DTSTART", "DTEND", "UID"];

/// Ordered set of property names that survive redaction.
///
/// Names are compared upper-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWhitelist {
    fields: Vec<String>,
}

impl Default for FieldWhitelist {
    fn default() -> Self {
        Self::new(DEFAULT_FIELDS)
    }
}

impl FieldWhitelist {
    /// Creates a whitelist with exactly the given fields.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut whitelist = Self { fields: Vec::new() };
        whitelist.extend(fields);
        whitelist
    }

    /// Adds fields to the whitelist, ignoring duplicates.
    pub fn extend<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for field in fields {
            let name = field.as_ref().trim().to_ascii_uppercase();
            if !name.is_empty() && !self.fields.contains(&name) {
                self.fields.push(name);
            }
        }
    }

    /// Builder method to add a single field.
    #[must_use]
    pub fn with_field(mut self, field: impl AsRef<str>) -> Self {
        self.extend([field]);
        self
    }

    /// Returns `true` if `field` survives redaction.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.eq_ignore_ascii_case(field))
    }

    /// Iterates over the whitelisted names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }
}

/// Builds a fresh event holding only the whitelisted properties of `event`.
///
/// Properties are copied verbatim, parameters included, and repeatable
/// fields such as `ATTENDEE` keep every occurrence. Whitelisted fields
/// missing from `event` are simply missing from the result.
pub fn redact(event: &Event, whitelist: &FieldWhitelist) -> Event {
    let mut redacted = Event::new();
    for name in whitelist.iter() {
        if let Some(property) = event.properties().get(name) {
            redacted.append_property(property.clone());
        }
        for property in event.multi_properties().get(name).into_iter().flatten() {
            redacted.append_multi_property(property.clone());
        }
    }
    redacted
}

/// [`redact`] with the default whitelist.
pub fn redact_default(event: &Event) -> Event {
    redact(event, &FieldWhitelist::default())
}

/// Redacts every event of a sequence.
pub fn redact_all<'a, I>(events: I, whitelist: &'a FieldWhitelist) -> impl Iterator<Item = Event> + 'a
where
    I: IntoIterator<Item = Event>,
    I::IntoIter: 'a,
{
    events.into_iter().map(move |event| redact(&event, whitelist))
}
