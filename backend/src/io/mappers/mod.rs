//! Conversions between the `shared` wire/DTO types and domain types.
//! The domain never sees a wire record; the REST layer never sees a domain
//! type.

pub mod calendar_mapper;
pub mod interviewer_mapper;
pub mod meeting_mapper;
pub mod schedule_mapper;

pub use calendar_mapper::CalendarMapper;
pub use interviewer_mapper::InterviewerMapper;
pub use meeting_mapper::MeetingMapper;
pub use schedule_mapper::ScheduleMapper;
