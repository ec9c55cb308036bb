//! # External Sources
//!
//! Traits for the collaborators the calendar depends on, plus their HTTP
//! implementations. The traits let the page loader and the REST layer run
//! against in-memory sources in tests.

pub mod holiday_api;
pub mod recruit_api;

use anyhow::Result;
use async_trait::async_trait;
use shared::{NewMeetingRecord, Team};

use crate::domain::models::{HolidayEvent, MeetingEvent};

pub use holiday_api::HolidayApiClient;
pub use recruit_api::RecruitApiClient;

/// Source of scheduled meetings. Identifiers are normalized before return.
#[async_trait]
pub trait MeetingSource: Send + Sync {
    async fn fetch_meetings(&self) -> Result<Vec<MeetingEvent>>;
}

/// Source of public holidays for a calendar year
#[async_trait]
pub trait HolidaySource: Send + Sync {
    async fn fetch_holidays(&self, year: i32) -> Result<Vec<HolidayEvent>>;
}

/// Source of the nested interviewer hierarchy
#[async_trait]
pub trait InterviewerSource: Send + Sync {
    async fn fetch_teams(&self) -> Result<Vec<Team>>;
}

/// Books meetings with the recruiting API
#[async_trait]
pub trait MeetingScheduler: Send + Sync {
    /// Returns the meeting as stored, with its assigned id
    async fn schedule_meeting(&self, meeting: &NewMeetingRecord) -> Result<MeetingEvent>;
}
