use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::date_utils;

/// Status stored on a meeting record by the recruiting API.
///
/// This is the explicit field only. The history buckets are derived
/// separately by the categorizer and never written back here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeetingStatus {
    Scheduled,
    Completed,
    Canceled,
    Unset,
}

impl MeetingStatus {
    /// Case-insensitive parse; unknown or missing values are `Unset`
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("scheduled") => MeetingStatus::Scheduled,
            Some("completed") => MeetingStatus::Completed,
            Some("canceled") => MeetingStatus::Canceled,
            _ => MeetingStatus::Unset,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingStatus::Scheduled => "scheduled",
            MeetingStatus::Completed => "completed",
            MeetingStatus::Canceled => "canceled",
            MeetingStatus::Unset => "unset",
        }
    }
}

/// A meeting whose `date_time` could not be turned into an instant
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Meeting {meeting_id} has an unparseable date_time: {value:?}")]
pub struct MalformedEventError {
    pub meeting_id: String,
    pub value: Option<String>,
}

/// Domain meeting. Identifiers are already normalized to plain strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub meeting_description: String,
    /// Raw combined timestamp; authoritative for ordering and categorization
    pub date_time: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub duration_hours: f64,
    pub participants: Vec<String>,
    pub is_calendar_event: bool,
    pub confidence_score: Option<f64>,
    pub status: MeetingStatus,
    pub calendar_link: Option<String>,
    pub location: Option<String>,
}

impl MeetingEvent {
    /// Default duration when the record carries none (or a non-positive one)
    pub const DEFAULT_DURATION_HOURS: f64 = 1.0;

    /// Minimal meeting, mostly useful for building fixtures
    pub fn new(id: impl Into<String>, title: impl Into<String>, date_time: Option<&str>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            meeting_description: String::new(),
            date_time: date_time.map(str::to_string),
            start_time: None,
            end_time: None,
            duration_hours: Self::DEFAULT_DURATION_HOURS,
            participants: Vec::new(),
            is_calendar_event: false,
            confidence_score: None,
            status: MeetingStatus::Unset,
            calendar_link: None,
            location: None,
        }
    }

    /// Parsed `date_time`
    pub fn instant(&self) -> Result<NaiveDateTime, MalformedEventError> {
        self.date_time
            .as_deref()
            .and_then(date_utils::parse_instant)
            .ok_or_else(|| MalformedEventError {
                meeting_id: self.id.clone(),
                value: self.date_time.clone(),
            })
    }

    /// Calendar date used for grid placement
    pub fn calendar_date(&self) -> Result<NaiveDate, MalformedEventError> {
        self.instant().map(|instant| instant.date())
    }

    /// Start/end pair with `end >= start` enforced.
    ///
    /// An inverted range is clamped to a zero-length range at `start`.
    pub fn time_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let start = self.start_time?;
        let end = self.end_time?;
        if end < start {
            warn!(
                "Meeting {} ends ({}) before it starts ({}), clamping end to start",
                self.id, end, start
            );
            return Some((start, start));
        }
        Some((start, end))
    }

    /// Title, both descriptions and the joined participant list, lower-cased
    pub fn search_haystack(&self) -> String {
        format!(
            "{}\n{}\n{}\n{}",
            self.title,
            self.description,
            self.meeting_description,
            self.participants.join(", ")
        )
        .to_lowercase()
    }
}
