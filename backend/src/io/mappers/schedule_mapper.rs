use chrono::{Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use shared::{NewMeetingRecord, ScheduleInterviewRequest};
use tracing::warn;

use crate::domain::date_utils;
use crate::domain::{InterviewPlan, InterviewRequest};

pub struct ScheduleMapper;

impl ScheduleMapper {
    pub fn to_domain(request: ScheduleInterviewRequest) -> InterviewRequest {
        InterviewRequest {
            date: request.date,
            time: request.time,
            duration_hours: request.duration_hours,
            candidate_name: request.candidate_name,
            candidate_email: request.candidate_email,
            interviewer_name: request.interviewer_name,
            interviewer_email: request.interviewer_email,
            description: request.description,
        }
    }

    /// Wire record for a plan whose times are in the service's local zone
    pub fn to_record(plan: &InterviewPlan) -> NewMeetingRecord {
        Self::to_record_in(plan, &Local)
    }

    /// Wire record for a plan whose times are wall-clock times in `zone`
    pub fn to_record_in<Tz: TimeZone>(plan: &InterviewPlan, zone: &Tz) -> NewMeetingRecord {
        let start = to_utc_string(plan.start, zone);

        NewMeetingRecord {
            title: plan.title.clone(),
            datetime: start.clone(),
            duration_of_meeting: plan.duration_hours,
            participants: plan.participants.clone(),
            description: plan.description.clone(),
            meeting_description: plan.description.clone(),
            location: InterviewPlan::LOCATION.to_string(),
            is_calendar_event: false,
            confidence_score: InterviewPlan::CONFIDENCE_SCORE,
            date: date_utils::format_iso_date(plan.date),
            time: plan.time_label.clone(),
            confirmation_message: plan.confirmation_message.clone(),
            calendar_link: None,
            start,
            end: to_utc_string(plan.end, zone),
        }
    }
}

/// "2025-06-20T09:00:00.000Z". A wall-clock time skipped by a DST change is
/// read as UTC.
fn to_utc_string<Tz: TimeZone>(wall_clock: NaiveDateTime, zone: &Tz) -> String {
    let instant = match zone.from_local_datetime(&wall_clock).earliest() {
        Some(local) => local.with_timezone(&Utc),
        None => {
            warn!("{} does not exist in the local zone, sending it as UTC", wall_clock);
            Utc.from_utc_datetime(&wall_clock)
        }
    };
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plan_interview;
    use chrono::FixedOffset;

    fn plan() -> InterviewPlan {
        plan_interview(&ScheduleMapper::to_domain(ScheduleInterviewRequest {
            date: "2025-06-20".into(),
            time: "2:30 PM".into(),
            duration_hours: Some(1.5),
            candidate_name: "Priya Nair".into(),
            candidate_email: "priya@example.com".into(),
            interviewer_name: "Asha Rao".into(),
            interviewer_email: "asha@example.com".into(),
            description: None,
        }))
        .unwrap()
    }

    #[test]
    fn test_to_record_in_utc() {
        let record = ScheduleMapper::to_record_in(&plan(), &Utc);

        assert_eq!(record.title, "Interview with Priya Nair");
        assert_eq!(record.datetime, "2025-06-20T14:30:00.000Z");
        assert_eq!(record.start, record.datetime);
        assert_eq!(record.end, "2025-06-20T16:00:00.000Z");
        assert_eq!(record.duration_of_meeting, 1.5);
        assert_eq!(record.participants, vec!["priya@example.com", "asha@example.com"]);
        assert_eq!(record.description, "Interview for Priya Nair");
        assert_eq!(record.meeting_description, record.description);
        assert_eq!(record.location, "Virtual Meeting");
        assert!(!record.is_calendar_event);
        assert_eq!(record.confidence_score, 0.95);
        assert_eq!(record.date, "2025-06-20");
        assert_eq!(record.time, "2:30 PM");
        assert_eq!(record.calendar_link, None);
    }

    #[test]
    fn test_local_slot_is_sent_as_utc_instant() {
        let india = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        let record = ScheduleMapper::to_record_in(&plan(), &india);

        assert_eq!(record.datetime, "2025-06-20T09:00:00.000Z");
        assert_eq!(record.end, "2025-06-20T10:30:00.000Z");
        // Reading it back in the same zone gives the slot that was entered
        assert_eq!(
            date_utils::parse_instant_in(&record.datetime, &india),
            Some(plan().start)
        );
    }

    #[test]
    fn test_calendar_link_serializes_as_null() {
        let json = serde_json::to_value(ScheduleMapper::to_record_in(&plan(), &Utc)).unwrap();
        assert!(json["calendar_link"].is_null());
        assert_eq!(json["confidence_score"], 0.95);
    }
}
