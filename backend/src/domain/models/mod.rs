pub mod calendar_event;
pub mod holiday;
pub mod interviewer;
pub mod meeting;

pub use calendar_event::{CalendarEvent, EventKind};
pub use holiday::HolidayEvent;
pub use interviewer::Interviewer;
pub use meeting::{MalformedEventError, MeetingEvent, MeetingStatus};
