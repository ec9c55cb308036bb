//! # Session State
//!
//! What the running service remembers between requests: the latest loaded
//! data ([`PageSnapshot`]) and the clock that supplies "now". The calendar
//! view state itself lives in the domain layer.

use chrono::{Local, NaiveDate, NaiveDateTime};
use shared::LoadNotice;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::domain::event_aggregator;
use crate::domain::models::{CalendarEvent, HolidayEvent, MeetingEvent};
use crate::domain::InterviewerDirectory;
use crate::io::PageData;

/// Source of the current wall-clock time
#[derive(Clone)]
pub struct Clock(Arc<dyn Fn() -> NaiveDateTime + Send + Sync>);

impl Clock {
    pub fn system() -> Self {
        Clock(Arc::new(|| Local::now().naive_local()))
    }

    /// Always reports `now`
    pub fn fixed(now: NaiveDateTime) -> Self {
        Clock(Arc::new(move || now))
    }

    pub fn now(&self) -> NaiveDateTime {
        (self.0)()
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

impl fmt::Debug for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Clock({})", self.now())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("No event with id '{0}'")]
    UnknownEvent(String),
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Month navigation is only available in month view")]
    NotInMonthView,
}

/// Latest committed results of the data sources
#[derive(Debug, Clone, Default)]
pub struct PageSnapshot {
    pub meetings: Vec<MeetingEvent>,
    /// Holidays per calendar year; a failed fetch is cached as an empty set
    pub holidays: BTreeMap<i32, Vec<HolidayEvent>>,
    pub directory: InterviewerDirectory,
    /// Notices from the most recent load
    pub notices: Vec<LoadNotice>,
}

impl PageSnapshot {
    /// Replace the snapshot contents with a freshly settled load. Cached
    /// holidays of other years are dropped along with the old data.
    pub fn apply(&mut self, data: PageData) {
        self.meetings = data.meetings;
        self.directory = InterviewerDirectory::flatten(&data.teams);
        self.holidays.clear();
        self.holidays
            .insert(data.holiday_year, data.holidays.unwrap_or_default());
        self.notices = data.notices;
    }

    pub fn has_holidays_for(&self, year: i32) -> bool {
        self.holidays.contains_key(&year)
    }

    pub fn cache_holidays(&mut self, year: i32, holidays: Vec<HolidayEvent>) {
        debug!("Caching {} holidays for {}", holidays.len(), year);
        self.holidays.insert(year, holidays);
    }

    pub fn holiday_count(&self) -> usize {
        self.holidays.values().map(Vec::len).sum()
    }

    /// Meetings plus the cached holidays of `year`
    pub fn events_for_year(&self, year: i32) -> Vec<CalendarEvent> {
        let holidays = self.holidays.get(&year).cloned().unwrap_or_default();
        event_aggregator::aggregate(self.meetings.clone(), holidays)
    }

    /// Look up an event by meeting id, falling back to holiday name
    pub fn find_event(&self, key: &str) -> Option<CalendarEvent> {
        if let Some(meeting) = self.meetings.iter().find(|m| m.id == key) {
            return Some(CalendarEvent::Meeting(meeting.clone()));
        }
        self.holidays
            .values()
            .flatten()
            .find(|holiday| holiday.name == key)
            .map(|holiday| CalendarEvent::Holiday(holiday.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::EventKind;
    use crate::test_utils::{fixed_now, sample_holidays, sample_meetings, sample_teams};
    use shared::DataSource;

    fn loaded() -> PageSnapshot {
        let mut snapshot = PageSnapshot::default();
        snapshot.apply(PageData {
            meetings: sample_meetings(),
            holiday_year: 2025,
            holidays: Some(sample_holidays(2025)),
            teams: sample_teams(),
            notices: Vec::new(),
        });
        snapshot
    }

    #[test]
    fn test_fixed_clock() {
        let clock = Clock::fixed(fixed_now());
        assert_eq!(clock.now(), fixed_now());
        assert_eq!(clock.today(), fixed_now().date());
    }

    #[test]
    fn test_apply_replaces_holiday_cache() {
        let mut snapshot = loaded();
        snapshot.cache_holidays(2026, sample_holidays(2026));
        assert!(snapshot.has_holidays_for(2026));

        snapshot.apply(PageData {
            holiday_year: 2025,
            holidays: None,
            notices: vec![LoadNotice {
                source: DataSource::Holidays,
                message: "down".into(),
            }],
            ..PageData::default()
        });

        assert!(!snapshot.has_holidays_for(2026));
        assert!(snapshot.has_holidays_for(2025));
        assert_eq!(snapshot.holiday_count(), 0);
        assert!(snapshot.meetings.is_empty());
        assert_eq!(snapshot.notices.len(), 1);
    }

    #[test]
    fn test_events_for_year_only_includes_that_years_holidays() {
        let mut snapshot = loaded();
        snapshot.cache_holidays(2026, sample_holidays(2026));

        let events = snapshot.events_for_year(2025);
        let holidays: Vec<_> = events
            .iter()
            .filter(|e| e.kind() == EventKind::Holiday)
            .collect();
        assert_eq!(holidays.len(), 2);
        assert_eq!(events.len(), sample_meetings().len() + 2);
    }

    #[test]
    fn test_find_event_by_meeting_id_or_holiday_name() {
        let snapshot = loaded();

        assert_eq!(snapshot.find_event("m2").unwrap().title(), "Backend Interview");
        assert_eq!(
            snapshot.find_event("Republic Day").unwrap().kind(),
            EventKind::Holiday
        );
        assert!(snapshot.find_event("nope").is_none());
        assert_eq!(snapshot.directory.len(), 2);
    }
}
