use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Records as delivered by the recruiting API
// ---------------------------------------------------------------------------

/// Identifier as stored by the recruiting API: either a plain string or a
/// Mongo-style `{"$oid": "..."}` wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Plain(String),
    ObjectId {
        #[serde(rename = "$oid")]
        oid: String,
    },
}

impl RecordId {
    /// Collapse the wrapper into the plain identifier string
    pub fn into_string(self) -> String {
        match self {
            RecordId::Plain(id) => id,
            RecordId::ObjectId { oid } => oid,
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Plain(id) => write!(f, "{}", id),
            RecordId::ObjectId { oid } => write!(f, "{}", oid),
        }
    }
}

/// A meeting as returned by `GET /get_meetings`. Every field is optional on
/// the wire; the backend mapper decides on defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeetingRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub meeting_description: Option<String>,
    /// Combined date and time, usually ISO 8601
    #[serde(default)]
    pub datetime: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    /// Duration in hours, fractional values allowed (0.5, 1.5)
    #[serde(default)]
    pub duration_of_meeting: Option<f64>,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub is_calendar_event: bool,
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub confirmation_message: Option<String>,
    #[serde(default)]
    pub calendar_link: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Meeting body sent to `POST /schedule_meeting`, wrapped as a JSON string
/// in a `{"text": ...}` envelope. Instants are UTC with millisecond precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMeetingRecord {
    pub title: String,
    pub datetime: String,
    pub duration_of_meeting: f64,
    pub participants: Vec<String>,
    pub description: String,
    pub meeting_description: String,
    pub location: String,
    pub is_calendar_event: bool,
    pub confidence_score: f64,
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
    /// Slot as entered, e.g. "2:30 PM"
    pub time: String,
    pub confirmation_message: String,
    pub calendar_link: Option<String>,
    pub start: String,
    pub end: String,
}

/// Member of an interview sub-team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubTeam {
    pub name: String,
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

/// Top level of the nested interviewer structure returned by `GET /get_interviewers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    #[serde(default)]
    pub sub_teams: Vec<SubTeam>,
}

// ---------------------------------------------------------------------------
// Calendar DTOs
// ---------------------------------------------------------------------------

/// Which month a grid cell belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CalendarCellType {
    /// Trailing day of the previous month shown before the 1st
    PreviousMonth,
    /// Actual day within the visible month
    CurrentMonth,
    /// Leading day of the next month filling the last row
    NextMonth,
}

/// A calendar event ready for display, discriminated by `type`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CalendarEventDto {
    Meeting(MeetingDto),
    Holiday(HolidayDto),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeetingDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub meeting_description: String,
    pub date_time: Option<String>,
    pub formatted_date: Option<String>,
    pub formatted_time: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub duration_hours: f64,
    pub duration_label: String,
    pub participants: Vec<String>,
    pub is_calendar_event: bool,
    pub confidence_percent: Option<u32>,
    pub status: String,
    pub calendar_link: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HolidayDto {
    pub name: String,
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
    pub formatted_date: String,
    pub description: Option<String>,
}

/// One cell of the month grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarCell {
    pub day: u32,
    /// Calendar date of the cell (YYYY-MM-DD)
    pub date: String,
    pub cell_type: CalendarCellType,
    pub is_today: bool,
    pub selectable: bool,
    pub has_meeting: bool,
    pub has_holiday: bool,
    pub events: Vec<CalendarEventDto>,
}

/// Month grid with its cells, always a multiple of seven long
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonthResponse {
    pub month: u32,
    pub year: i32,
    pub label: String,
    pub weekdays: Vec<String>,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
    pub days_in_month: u32,
    pub cells: Vec<CalendarCell>,
    pub notices: Vec<LoadNotice>,
}

/// Events on a single date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDayResponse {
    pub date: String,
    pub heading: String,
    pub events: Vec<CalendarEventDto>,
}

/// Month/year pair the calendar is focused on
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarFocusDate {
    pub month: u32,
    pub year: i32,
}

/// Primary calendar mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CalendarViewMode {
    Month,
    Day,
}

/// Snapshot of the calendar state machine for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarViewResponse {
    pub mode: CalendarViewMode,
    pub focus: CalendarFocusDate,
    pub selected_date: Option<String>,
    pub selected_event: Option<CalendarEventDto>,
    /// Present in month mode
    pub month: Option<CalendarMonthResponse>,
    /// Present in day mode
    pub day: Option<CalendarDayResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewDateRequest {
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectEventRequest {
    /// Meeting id, or holiday name for holidays
    pub id: String,
}

// ---------------------------------------------------------------------------
// History, directory and dashboard DTOs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeetingHistoryResponse {
    pub scheduled: Vec<MeetingDto>,
    pub completed: Vec<MeetingDto>,
    pub canceled: Vec<MeetingDto>,
    pub other: Vec<MeetingDto>,
    /// scheduled ++ completed ++ canceled ++ other
    pub all: Vec<MeetingDto>,
    pub search: Option<String>,
    pub notices: Vec<LoadNotice>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InterviewerDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub team: String,
    pub sub_team: String,
    pub initials: String,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InterviewerListResponse {
    pub interviewers: Vec<InterviewerDto>,
    pub notices: Vec<LoadNotice>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardResponse {
    pub total_meetings: usize,
    pub total_hours: f64,
    pub interviewer_count: usize,
    pub upcoming: Vec<MeetingDto>,
    pub notices: Vec<LoadNotice>,
}

/// Interview scheduling form. Missing fields deserialize as empty so the
/// backend can report which one is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScheduleInterviewRequest {
    /// YYYY-MM-DD
    #[serde(default)]
    pub date: String,
    /// 12-hour slot, e.g. "2:30 PM"
    #[serde(default)]
    pub time: String,
    /// Hours; defaults to 1
    #[serde(default)]
    pub duration_hours: Option<f64>,
    #[serde(default)]
    pub candidate_name: String,
    #[serde(default)]
    pub candidate_email: String,
    #[serde(default)]
    pub interviewer_name: String,
    #[serde(default)]
    pub interviewer_email: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// External source a page depends on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Meetings,
    Holidays,
    Interviewers,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Meetings => write!(f, "meetings"),
            DataSource::Holidays => write!(f, "holidays"),
            DataSource::Interviewers => write!(f, "interviewers"),
        }
    }
}

/// Non-blocking notice that one source failed while the others loaded
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoadNotice {
    pub source: DataSource,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefreshResponse {
    pub meetings: usize,
    pub holidays: usize,
    pub interviewers: usize,
    pub notices: Vec<LoadNotice>,
}

/// Error body returned by the REST layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default)]
    pub notices: Vec<LoadNotice>,
}
