//! Overview counters for the dashboard page

use chrono::NaiveDateTime;

use super::meeting_categorizer;
use super::models::MeetingEvent;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_meetings: usize,
    /// Sum of meeting durations in hours
    pub total_hours: f64,
    pub interviewer_count: usize,
    /// Soonest scheduled meetings first
    pub upcoming: Vec<MeetingEvent>,
}

pub fn summarize(
    meetings: &[MeetingEvent],
    interviewer_count: usize,
    now: NaiveDateTime,
    upcoming_limit: usize,
) -> DashboardSummary {
    let total_hours: f64 = meetings.iter().map(|meeting| meeting.duration_hours).sum();

    let mut upcoming = meeting_categorizer::categorize(meetings, now, None).scheduled;
    // Scheduled meetings always carry a parseable instant
    upcoming.sort_by_key(|meeting| meeting.instant().ok());
    upcoming.truncate(upcoming_limit);

    DashboardSummary {
        total_meetings: meetings.len(),
        total_hours,
        interviewer_count,
        upcoming,
    }
}
