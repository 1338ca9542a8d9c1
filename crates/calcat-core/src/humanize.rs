//! Relative time phrases ("3 days ago", "in 2 hours").

use chrono::{DateTime, Utc};

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const MONTH: u64 = 30 * DAY;
const YEAR: u64 = 365 * DAY;

/// Renders `instant` relative to `now`.
///
/// Picks the largest unit that fits and rounds to the nearest whole unit.
/// Anything within 45 seconds of `now` is rendered as `"now"`.
pub fn relative_phrase(instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = (instant - now).num_seconds();
    let secs = delta.unsigned_abs();
    if secs < 45 {
        return "now".to_string();
    }

    let (count, unit) = magnitude(secs);
    let plural = if count != 1 { "s" } else { "" };
    if delta > 0 {
        format!("in {} {}{}", count, unit, plural)
    } else {
        format!("{} {}{} ago", count, unit, plural)
    }
}

fn magnitude(secs: u64) -> (u64, &'static str) {
    if secs < 45 * MINUTE {
        (rounded(secs, MINUTE), "minute")
    } else if secs < 22 * HOUR {
        (rounded(secs, HOUR), "hour")
    } else if secs < 26 * DAY {
        (rounded(secs, DAY), "day")
    } else if secs < 320 * DAY {
        (rounded(secs, MONTH), "month")
    } else {
        (rounded(secs, YEAR), "year")
    }
}

fn rounded(secs: u64, unit: u64) -> u64 {
    ((secs + unit / 2) / unit).max(1)
}
