//! Merges meetings and holidays into one kind-tagged event collection and
//! answers "what is on day X" queries for the calendar.
//!
//! Aggregation never drops anything. Meetings whose timestamp cannot be
//! parsed stay in the aggregated list (and in the raw history lists) but are
//! left out of every date lookup.

use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;
use tracing::debug;

use super::models::{CalendarEvent, EventKind, HolidayEvent, MeetingEvent};

/// Concatenate meetings (fetch order) and holidays into one collection.
///
/// Either side may be empty. No dedup, no sorting.
pub fn aggregate(meetings: Vec<MeetingEvent>, holidays: Vec<HolidayEvent>) -> Vec<CalendarEvent> {
    debug!(
        "Aggregating {} meetings and {} holidays",
        meetings.len(),
        holidays.len()
    );

    let mut events = Vec::with_capacity(meetings.len() + holidays.len());
    events.extend(meetings.into_iter().map(CalendarEvent::Meeting));
    events.extend(holidays.into_iter().map(CalendarEvent::Holiday));
    events
}

/// Events whose projected calendar date equals `date`, in insertion order
pub fn events_on_date(events: &[CalendarEvent], date: NaiveDate) -> Vec<&CalendarEvent> {
    events
        .iter()
        .filter(|event| placed_date(event) == Some(date))
        .collect()
}

/// Whether any of `events` is of the given kind
pub fn has_kind<'a, I>(events: I, kind: EventKind) -> bool
where
    I: IntoIterator<Item = &'a CalendarEvent>,
{
    events.into_iter().any(|event| event.kind() == kind)
}

/// Group the events falling in `year`/`month` by day of month.
///
/// Agrees with [`events_on_date`] for every day of the month and keeps the
/// same insertion order inside each day.
pub fn group_by_day(
    events: &[CalendarEvent],
    year: i32,
    month: u32,
) -> HashMap<u32, Vec<&CalendarEvent>> {
    let mut events_by_day: HashMap<u32, Vec<&CalendarEvent>> = HashMap::new();

    for event in events {
        if let Some(date) = placed_date(event) {
            if date.year() == year && date.month() == month {
                events_by_day.entry(date.day()).or_default().push(event);
            }
        }
    }

    events_by_day
}

/// Calendar date of an event, or `None` for malformed meetings. Those are
/// reported once when the meeting is ingested.
fn placed_date(event: &CalendarEvent) -> Option<NaiveDate> {
    match event.calendar_date() {
        Ok(date) => Some(date),
        Err(e) => {
            debug!("Skipping event in calendar placement: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn meeting(id: &str, date_time: &str) -> MeetingEvent {
        MeetingEvent::new(id, format!("Meeting {}", id), Some(date_time))
    }

    #[test]
    fn test_aggregate_keeps_every_event_in_order() {
        let meetings = vec![
            meeting("m1", "2025-04-12T10:00:00"),
            meeting("m2", "not-a-date"),
        ];
        let holidays = vec![
            HolidayEvent::new("Republic Day", date(2025, 1, 26)),
            HolidayEvent::new("Diwali", date(2025, 10, 20)),
        ];

        let events = aggregate(meetings, holidays);

        assert_eq!(events.len(), 4);
        let keys: Vec<&str> = events.iter().map(|e| e.key()).collect();
        assert_eq!(keys, vec!["m1", "m2", "Republic Day", "Diwali"]);
        assert_eq!(events[0].kind(), EventKind::Meeting);
        assert_eq!(events[3].kind(), EventKind::Holiday);
    }

    #[test]
    fn test_aggregate_with_empty_sources() {
        assert!(aggregate(Vec::new(), Vec::new()).is_empty());

        let only_holidays = aggregate(Vec::new(), vec![HolidayEvent::new("Holi", date(2025, 3, 14))]);
        assert_eq!(only_holidays.len(), 1);

        let only_meetings = aggregate(vec![meeting("m1", "2025-03-14T09:00")], Vec::new());
        assert_eq!(only_meetings.len(), 1);
    }

    #[test]
    fn test_events_on_date_ignores_time_of_day() {
        let events = aggregate(
            vec![
                meeting("morning", "2025-04-12T00:00:00"),
                meeting("night", "2025-04-12T23:59:59"),
                meeting("next", "2025-04-13T00:00:00"),
            ],
            vec![HolidayEvent::new("Holiday", date(2025, 4, 12))],
        );

        let on_day = events_on_date(&events, date(2025, 4, 12));
        let keys: Vec<&str> = on_day.iter().map(|e| e.key()).collect();
        assert_eq!(keys, vec!["morning", "night", "Holiday"]);
    }

    #[test]
    fn test_events_on_date_across_year_boundary() {
        let events = aggregate(
            vec![meeting("eve", "2024-12-31T18:00"), meeting("new", "2025-01-01T09:00")],
            vec![HolidayEvent::new("New Year", date(2025, 1, 1))],
        );

        let dec_31 = events_on_date(&events, date(2024, 12, 31));
        assert_eq!(dec_31.len(), 1);
        assert_eq!(dec_31[0].key(), "eve");

        let jan_1 = events_on_date(&events, date(2025, 1, 1));
        assert_eq!(jan_1.len(), 2);
        assert!(jan_1.iter().all(|e| e.calendar_date().unwrap() == date(2025, 1, 1)));
    }

    #[test]
    fn test_events_on_leap_day() {
        let events = aggregate(
            vec![
                meeting("leap", "2024-02-29T10:00"),
                meeting("march", "2024-03-01T10:00"),
            ],
            vec![HolidayEvent::new("March Holiday", date(2024, 3, 1))],
        );

        let leap_day = events_on_date(&events, date(2024, 2, 29));
        assert_eq!(leap_day.len(), 1);
        assert_eq!(leap_day[0].key(), "leap");
    }

    #[test]
    fn test_malformed_meetings_are_skipped_not_fatal() {
        let events = aggregate(
            vec![meeting("bad", "not-a-date"), meeting("good", "2025-04-12T10:00")],
            Vec::new(),
        );

        assert_eq!(events.len(), 2);
        let on_day = events_on_date(&events, date(2025, 4, 12));
        assert_eq!(on_day.len(), 1);
        assert_eq!(on_day[0].key(), "good");
    }

    #[test]
    fn test_has_kind_allows_both_kinds_on_one_day() {
        let events = aggregate(
            vec![meeting("m1", "2025-08-15T11:00")],
            vec![HolidayEvent::new("Independence Day", date(2025, 8, 15))],
        );

        let on_day = events_on_date(&events, date(2025, 8, 15));
        assert!(has_kind(on_day.iter().copied(), EventKind::Meeting));
        assert!(has_kind(on_day.iter().copied(), EventKind::Holiday));

        let empty = events_on_date(&events, date(2025, 8, 16));
        assert!(!has_kind(empty.iter().copied(), EventKind::Meeting));
        assert!(!has_kind(empty.iter().copied(), EventKind::Holiday));
    }

    #[test]
    fn test_group_by_day_agrees_with_events_on_date() {
        let events = aggregate(
            vec![
                meeting("a", "2025-06-01T09:00"),
                meeting("b", "2025-06-01T15:00"),
                meeting("c", "2025-06-15T12:00"),
                meeting("d", "2025-05-30T12:00"),
                meeting("e", "broken"),
            ],
            vec![HolidayEvent::new("Mid June", date(2025, 6, 15))],
        );

        let grouped = group_by_day(&events, 2025, 6);
        assert!(grouped.get(&30).is_none());

        for day in 1..=30 {
            let expected = events_on_date(&events, date(2025, 6, day));
            let actual = grouped.get(&day).cloned().unwrap_or_default();
            assert_eq!(actual, expected, "day {}", day);
        }
    }
}
