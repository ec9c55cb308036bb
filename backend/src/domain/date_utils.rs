//! Date parsing and display helpers shared by the calendar, history and
//! dashboard logic.
//!
//! Meeting timestamps arrive as loosely formatted strings from the
//! recruiting API (sometimes RFC 3339, sometimes a naive `YYYY-MM-DDTHH:MM`),
//! so everything that needs an instant goes through [`parse_instant`].
//! Instants are wall-clock `NaiveDateTime`s in the service's local zone, the
//! same zone the clock reports "now" in. A timestamp carrying an offset is an
//! absolute instant and is converted into that zone.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Naive timestamp layouts accepted after RFC 3339 fails
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a meeting timestamp into a local wall-clock instant.
///
/// Accepts RFC 3339, the naive layouts in `NAIVE_FORMATS`, or a bare
/// `YYYY-MM-DD` which resolves to midnight.
pub fn parse_instant(value: &str) -> Option<NaiveDateTime> {
    parse_instant_in(value, &Local)
}

/// [`parse_instant`] with an explicit target zone for offset-bearing input.
/// Naive input is already wall-clock time and is taken as is.
pub fn parse_instant_in<Tz: TimeZone>(value: &str, zone: &Tz) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Some(date_time.with_timezone(zone).naive_local());
    }

    parse_naive(value)
}

fn parse_naive(value: &str) -> Option<NaiveDateTime> {
    for format in NAIVE_FORMATS {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(value, format) {
            return Some(date_time);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Calendar date as written, for date-only facts such as holidays. An
/// offset, when present, does not move the date.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Some(date_time.date_naive());
    }
    parse_naive(value).map(|date_time| date_time.date())
}

/// Get the human-readable name for a month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "Invalid Month",
    }
}

/// "June 2025"
pub fn month_label(year: i32, month: u32) -> String {
    format!("{} {}", month_name(month), year)
}

/// "June 13, 2025"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "Jun 13, 2025"
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// "Friday, June 13, 2025"
pub fn format_day_heading(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// "9:05 AM"
pub fn format_time(date_time: NaiveDateTime) -> String {
    date_time.format("%-I:%M %p").to_string()
}

/// ISO calendar date, used as the wire format for dates
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// "1 hour", "1.5 hours", "0.5 hours"
pub fn duration_label(hours: f64) -> String {
    if (hours - 1.0).abs() < f64::EPSILON {
        "1 hour".to_string()
    } else {
        format!("{} hours", hours)
    }
}

/// Confidence in [0,1] as a whole percentage
pub fn confidence_percent(score: f64) -> u32 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u32
}

/// Up to two upper-case initials from a display name
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}
