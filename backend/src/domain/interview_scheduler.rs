//! Turns an interview request from the scheduling form into a meeting plan.
//!
//! Slots are entered on a 12-hour clock ("2:30 PM"). A slot without an
//! AM/PM suffix is read as 24-hour time. The plan's instants are wall-clock
//! times in the service's local zone.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use super::date_utils;
use super::models::MeetingEvent;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid interview date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Invalid time slot '{0}', expected h:mm AM/PM")]
    InvalidTime(String),
    #[error("Duration must be between 0 and 24 hours, got {0}")]
    InvalidDuration(f64),
}

/// Raw form input, as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterviewRequest {
    pub date: String,
    pub time: String,
    pub duration_hours: Option<f64>,
    pub candidate_name: String,
    pub candidate_email: String,
    pub interviewer_name: String,
    pub interviewer_email: String,
    pub description: Option<String>,
}

/// Validated interview, ready to be sent to the recruiting API
#[derive(Debug, Clone, PartialEq)]
pub struct InterviewPlan {
    pub title: String,
    pub date: NaiveDate,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_hours: f64,
    /// Candidate first, then the interviewer
    pub participants: Vec<String>,
    pub description: String,
    /// Slot as shown back to the user, e.g. "2:30 PM"
    pub time_label: String,
    pub confirmation_message: String,
}

impl InterviewPlan {
    pub const LOCATION: &'static str = "Virtual Meeting";
    pub const CONFIDENCE_SCORE: f64 = 0.95;
    pub const MAX_DURATION_HOURS: f64 = 24.0;
}

/// Validate `request` and derive the meeting it describes
pub fn plan_interview(request: &InterviewRequest) -> Result<InterviewPlan, ScheduleError> {
    let date = required(&request.date, "date")?;
    let slot = required(&request.time, "time")?;
    let interviewer_name = required(&request.interviewer_name, "interviewer name")?;
    let interviewer_email = required(&request.interviewer_email, "interviewer email")?;
    let candidate_name = required(&request.candidate_name, "candidate name")?;
    let candidate_email = required(&request.candidate_email, "candidate email")?;

    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| ScheduleError::InvalidDate(date.to_string()))?;
    let start = date.and_time(parse_time_slot(slot)?);

    let duration_hours = match request.duration_hours {
        None => MeetingEvent::DEFAULT_DURATION_HOURS,
        Some(hours) if hours > 0.0 && hours <= InterviewPlan::MAX_DURATION_HOURS => hours,
        Some(hours) => return Err(ScheduleError::InvalidDuration(hours)),
    };
    let end = start
        .checked_add_signed(Duration::milliseconds((duration_hours * 3_600_000.0).round() as i64))
        .ok_or(ScheduleError::InvalidDuration(duration_hours))?;

    let description = request
        .description
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Interview for {}", candidate_name));

    let time_label = date_utils::format_time(start);
    let confirmation_message = format!(
        "You are scheduled for an interview on {} at {}.",
        date_utils::format_long_date(date),
        time_label
    );

    debug!(
        "Planned interview of {} with {} at {}",
        candidate_email, interviewer_name, start
    );

    Ok(InterviewPlan {
        title: format!("Interview with {}", candidate_name),
        date,
        start,
        end,
        duration_hours,
        participants: vec![candidate_email.to_string(), interviewer_email.to_string()],
        description,
        time_label,
        confirmation_message,
    })
}

/// "2:30 PM" → 14:30, "12:00 AM" → 00:00, "12:15 PM" → 12:15, "14:00" → 14:00
pub fn parse_time_slot(slot: &str) -> Result<NaiveTime, ScheduleError> {
    let invalid = || ScheduleError::InvalidTime(slot.to_string());

    let normalized = slot.trim().to_uppercase();
    let (clock, afternoon) = if let Some(rest) = normalized.strip_suffix("PM") {
        (rest.trim_end(), Some(true))
    } else if let Some(rest) = normalized.strip_suffix("AM") {
        (rest.trim_end(), Some(false))
    } else {
        (normalized.as_str(), None)
    };

    let (hours, minutes) = clock.split_once(':').ok_or_else(invalid)?;
    let hour: u32 = hours.trim().parse().map_err(|_| invalid())?;
    let minute: u32 = minutes.trim().parse().map_err(|_| invalid())?;

    let hour = match afternoon {
        Some(_) if !(1..=12).contains(&hour) => return Err(invalid()),
        Some(true) if hour < 12 => hour + 12,
        Some(false) if hour == 12 => 0,
        _ => hour,
    };

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ScheduleError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ScheduleError::MissingField(field));
    }
    Ok(value)
}
