//! Human-readable event summaries.
//!
//! Each event with both a start and an end becomes one line:
//!
//! ```text
//! * 3 days ago to 2 days ago: Offsite
//! * in 1 hour to in 2 hours
//! ```
//!
//! Lines follow the input order; nothing is sorted here.

use chrono::{DateTime, Local, TimeZone, Utc};
use icalendar::{Component, Event};
use tracing::debug;

use crate::humanize::relative_phrase;
use crate::time::EventTime;

/// Describes events relative to the current time.
pub fn describe<I>(events: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = Event>,
{
    describe_at(events, Utc::now())
}

/// Describes events relative to `now`, resolving floating times locally.
pub fn describe_at<I>(events: I, now: DateTime<Utc>) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = Event>,
{
    events
        .into_iter()
        .filter_map(move |event| describe_event(&event, now, &Local))
}

/// Describes a single event, or returns `None` if it has no usable time range.
pub fn describe_event<Tz: TimeZone>(event: &Event, now: DateTime<Utc>, local: &Tz) -> Option<String> {
    let (Some(start), Some(end)) = (event.get_start(), event.get_end()) else {
        debug!(uid = ?event.get_uid(), "Skipping event without DTSTART/DTEND");
        return None;
    };

    let (Some(start), Some(end)) = (
        EventTime::from(start).to_instant(local),
        EventTime::from(end).to_instant(local),
    ) else {
        debug!(uid = ?event.get_uid(), "Skipping event with unresolvable times");
        return None;
    };

    let mut line = format!(
        "* {} to {}",
        relative_phrase(start, now),
        relative_phrase(end, now)
    );
    if let Some(summary) = event.get_summary() {
        line.push_str(": ");
        line.push_str(summary);
    }
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redact::redact_default;
    use crate::test_support::utc;
    use chrono::Duration;
    use icalendar::EventLike;

    fn now() -> DateTime<Utc> {
        utc(2025, 2, 5, 12, 0)
    }

    fn timed(start: DateTime<Utc>, end: DateTime<Utc>) -> Event {
        Event::new().uid("evt").starts(start).ends(end).done()
    }

    fn lines(events: Vec<Event>) -> Vec<String> {
        events
            .iter()
            .filter_map(|e| describe_event(e, now(), &Utc))
            .collect()
    }

    #[test]
    fn past_to_future_with_summary() {
        let event = Event::new()
            .summary("Standup")
            .starts(now() - Duration::hours(1))
            .ends(now() + Duration::hours(1))
            .done();

        insta::assert_snapshot!(lines(vec![event]).join("\n"), @"* 1 hour ago to in 1 hour: Standup");
    }

    #[test]
    fn no_summary_has_no_suffix() {
        let event = timed(now() + Duration::days(2), now() + Duration::days(3));
        let described = lines(vec![event]);
        assert_eq!(described, vec!["* in 2 days to in 3 days"]);
        assert!(!described[0].contains(':'));
    }

    #[test]
    fn skips_events_without_both_times() {
        let qualifying = timed(now() - Duration::days(3), now() - Duration::days(2));
        let no_end = Event::new()
            .summary("Open-ended")
            .starts(now())
            .done();
        let no_start = Event::new().summary("Deadline").ends(now()).done();

        assert_eq!(lines(vec![no_end, qualifying, no_start]).len(), 1);
    }

    #[test]
    fn keeps_input_order() {
        let later = Event::new()
            .summary("Later")
            .starts(now() + Duration::days(5))
            .ends(now() + Duration::days(6))
            .done();
        let earlier = Event::new()
            .summary("Earlier")
            .starts(now() - Duration::days(5))
            .ends(now() - Duration::days(4))
            .done();

        insta::assert_snapshot!(lines(vec![later, earlier]).join("\n"), @r"
        * in 5 days to in 6 days: Later
        * 5 days ago to 4 days ago: Earlier
        ");
    }

    #[test]
    fn redacted_events_hide_summary() {
        let event = Event::new()
            .summary("Secret project")
            .starts(now() + Duration::minutes(30))
            .ends(now() + Duration::minutes(90))
            .done();

        let described = lines(vec![redact_default(&event)]);
        assert_eq!(described, vec!["* in 30 minutes to in 2 hours"]);
        assert!(!described[0].contains("Secret project"));
    }

    #[test]
    fn all_day_events_are_described() {
        let ics = "BEGIN:VCALENDAR\r\n\
                   BEGIN:VEVENT\r\n\
                   UID:holiday\r\n\
                   DTSTART;VALUE=DATE:20250210\r\n\
                   DTEND;VALUE=DATE:20250211\r\n\
                   SUMMARY:Company Holiday\r\n\
                   END:VEVENT\r\n\
                   END:VCALENDAR\r\n";
        let calendar: icalendar::Calendar = ics.parse().unwrap();
        let events: Vec<Event> = crate::extract::into_events(calendar).collect();

        assert_eq!(
            lines(events),
            vec!["* in 5 days to in 6 days: Company Holiday"]
        );
    }

    #[test]
    fn event_starting_in_dst_gap_is_described() {
        let ics = "BEGIN:VCALENDAR\r\n\
                   BEGIN:VEVENT\r\n\
                   UID:early-call\r\n\
                   DTSTART;TZID=America/New_York:20250309T023000\r\n\
                   DTEND;TZID=America/New_York:20250309T043000\r\n\
                   SUMMARY:Early call\r\n\
                   END:VEVENT\r\n\
                   END:VCALENDAR\r\n";
        let calendar: icalendar::Calendar = ics.parse().unwrap();
        let events: Vec<Event> = crate::extract::into_events(calendar).collect();
        let now = utc(2025, 3, 9, 6, 30);

        // 02:30 is skipped in New York and resolves to 07:30 UTC; 04:30 EDT is 08:30 UTC.
        let described: Vec<String> = events
            .iter()
            .filter_map(|e| describe_event(e, now, &Utc))
            .collect();
        assert_eq!(described, vec!["* in 1 hour to in 2 hours: Early call"]);
    }

    #[test]
    fn describe_at_uses_given_now() {
        let event = timed(now() + Duration::hours(2), now() + Duration::hours(3));
        let described: Vec<String> = describe_at(vec![event], now()).collect();
        assert_eq!(described, vec!["* in 2 hours to in 3 hours"]);
    }
}
