use shared::{MeetingDto, MeetingRecord, RecordId};
use tracing::warn;

use crate::domain::date_utils;
use crate::domain::models::{MeetingEvent, MeetingStatus};

pub struct MeetingMapper;

impl MeetingMapper {
    /// Convert a wire record into a domain meeting, normalizing the id and
    /// applying defaults for missing or out-of-range values
    pub fn to_domain(record: MeetingRecord) -> MeetingEvent {
        let id = record.id.map(RecordId::into_string).unwrap_or_default();

        let duration_hours = match record.duration_of_meeting {
            Some(hours) if hours.is_finite() && hours > 0.0 => hours,
            Some(hours) => {
                warn!("Meeting {} has invalid duration {}, using default", id, hours);
                MeetingEvent::DEFAULT_DURATION_HOURS
            }
            None => MeetingEvent::DEFAULT_DURATION_HOURS,
        };

        let confidence_score = record
            .confidence_score
            .filter(|score| score.is_finite())
            .map(|score| score.clamp(0.0, 1.0));

        MeetingEvent {
            title: record.title.unwrap_or_default(),
            description: record.description.unwrap_or_default(),
            meeting_description: record.meeting_description.unwrap_or_default(),
            date_time: non_empty(record.datetime),
            start_time: record.start.as_deref().and_then(date_utils::parse_instant),
            end_time: record.end.as_deref().and_then(date_utils::parse_instant),
            duration_hours,
            participants: record.participants,
            is_calendar_event: record.is_calendar_event,
            confidence_score,
            status: MeetingStatus::parse(record.status.as_deref()),
            calendar_link: non_empty(record.calendar_link),
            location: non_empty(record.location),
            id,
        }
    }

    /// Convert a fetched list. Records without an id get a positional one so
    /// every meeting stays addressable. Meetings with an unusable timestamp
    /// are kept but reported here, once per fetch.
    pub fn to_domain_list(records: Vec<MeetingRecord>) -> Vec<MeetingEvent> {
        let meetings: Vec<MeetingEvent> = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let mut meeting = Self::to_domain(record);
                if meeting.id.is_empty() {
                    meeting.id = format!("meeting::{}", index);
                }
                meeting
            })
            .collect();

        for meeting in &meetings {
            if let Err(e) = meeting.instant() {
                warn!("{}; it stays in history but not on the calendar", e);
            }
        }
        meetings
    }

    pub fn to_dto(meeting: &MeetingEvent) -> MeetingDto {
        let instant = meeting.instant().ok();
        let time_range = meeting.time_range();

        MeetingDto {
            id: meeting.id.clone(),
            title: meeting.title.clone(),
            description: meeting.description.clone(),
            meeting_description: meeting.meeting_description.clone(),
            date_time: meeting.date_time.clone(),
            formatted_date: instant.map(|i| date_utils::format_short_date(i.date())),
            formatted_time: instant.map(date_utils::format_time),
            start_time: time_range.map(|(start, _)| date_utils::format_time(start)),
            end_time: time_range.map(|(_, end)| date_utils::format_time(end)),
            duration_hours: meeting.duration_hours,
            duration_label: date_utils::duration_label(meeting.duration_hours),
            participants: meeting.participants.clone(),
            is_calendar_event: meeting.is_calendar_event,
            confidence_percent: meeting.confidence_score.map(date_utils::confidence_percent),
            status: meeting.status.as_str().to_string(),
            calendar_link: meeting.calendar_link.clone(),
            location: meeting.location.clone(),
        }
    }

    pub fn to_dto_list<'a, I>(meetings: I) -> Vec<MeetingDto>
    where
        I: IntoIterator<Item = &'a MeetingEvent>,
    {
        meetings.into_iter().map(Self::to_dto).collect()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
