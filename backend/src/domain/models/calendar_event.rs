use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::holiday::HolidayEvent;
use super::meeting::{MalformedEventError, MeetingEvent};

/// Discriminant of a [`CalendarEvent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Meeting,
    Holiday,
}

/// Anything that can be placed on the calendar grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CalendarEvent {
    Meeting(MeetingEvent),
    Holiday(HolidayEvent),
}

impl CalendarEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            CalendarEvent::Meeting(_) => EventKind::Meeting,
            CalendarEvent::Holiday(_) => EventKind::Holiday,
        }
    }

    /// Label shown on the grid chip
    pub fn title(&self) -> &str {
        match self {
            CalendarEvent::Meeting(meeting) => &meeting.title,
            CalendarEvent::Holiday(holiday) => &holiday.name,
        }
    }

    /// Identifier used to select the event: meeting id or holiday name
    pub fn key(&self) -> &str {
        match self {
            CalendarEvent::Meeting(meeting) => &meeting.id,
            CalendarEvent::Holiday(holiday) => &holiday.name,
        }
    }

    /// Project the event onto exactly one calendar date
    pub fn calendar_date(&self) -> Result<NaiveDate, MalformedEventError> {
        match self {
            CalendarEvent::Meeting(meeting) => meeting.calendar_date(),
            CalendarEvent::Holiday(holiday) => Ok(holiday.date),
        }
    }
}

impl From<MeetingEvent> for CalendarEvent {
    fn from(meeting: MeetingEvent) -> Self {
        CalendarEvent::Meeting(meeting)
    }
}

impl From<HolidayEvent> for CalendarEvent {
    fn from(holiday: HolidayEvent) -> Self {
        CalendarEvent::Holiday(holiday)
    }
}
