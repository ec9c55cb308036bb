//! In-memory sources and fixtures shared by the loader and REST tests

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use shared::{DataSource, NewMeetingRecord, SubTeam, Team, TeamMember};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::models::{HolidayEvent, MeetingEvent, MeetingStatus};
use crate::io::clients::{HolidaySource, InterviewerSource, MeetingScheduler, MeetingSource};
use crate::io::PageLoader;
use crate::session::Clock;
use crate::AppState;

/// 2025-06-13 09:00, a Friday
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 13)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

pub fn sample_meetings() -> Vec<MeetingEvent> {
    let mut canceled = MeetingEvent::new("m3", "Client Meeting", Some("2025-06-20T15:00:00"));
    canceled.status = MeetingStatus::Canceled;

    let mut interview = MeetingEvent::new("m2", "Backend Interview", Some("2025-06-13T14:00:00"));
    interview.participants = vec!["candidate@example.com".into(), "asha@example.com".into()];
    interview.duration_hours = 1.5;

    vec![
        MeetingEvent::new("m1", "Team Sync", Some("2025-06-02T10:00:00")),
        interview,
        canceled,
        MeetingEvent::new("m4", "Undated Chat", None),
    ]
}

pub fn sample_holidays(year: i32) -> Vec<HolidayEvent> {
    vec![
        HolidayEvent::new("Republic Day", NaiveDate::from_ymd_opt(year, 1, 26).unwrap()),
        HolidayEvent::new("Company Offsite", NaiveDate::from_ymd_opt(year, 6, 13).unwrap()),
    ]
}

pub fn sample_teams() -> Vec<Team> {
    vec![Team {
        name: "Engineering".into(),
        sub_teams: vec![SubTeam {
            name: "Backend".into(),
            members: vec![
                TeamMember {
                    name: "Asha Rao".into(),
                    email: "asha@example.com".into(),
                },
                TeamMember {
                    name: "Vikram Shah".into(),
                    email: "vikram@example.com".into(),
                },
            ],
        }],
    }]
}

/// Fixture-backed implementation of every source, with switchable failures
#[derive(Clone, Default)]
pub struct StaticSources {
    failing: HashSet<DataSource>,
    delay: Option<Duration>,
}

impl StaticSources {
    pub fn healthy() -> Self {
        Self::default()
    }

    pub fn failing(mut self, source: DataSource) -> Self {
        self.failing.insert(source);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn loader(&self) -> PageLoader {
        let sources = Arc::new(self.clone());
        PageLoader::new(sources.clone(), sources.clone(), sources)
    }

    /// Application state backed by these sources
    pub fn state(&self, clock: Clock) -> AppState {
        AppState::new(self.loader(), Arc::new(self.clone()), clock)
    }

    async fn respond<T>(&self, source: DataSource, items: Vec<T>) -> Result<Vec<T>> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.contains(&source) {
            bail!("{} source is unavailable", source);
        }
        Ok(items)
    }
}

#[async_trait]
impl MeetingSource for StaticSources {
    async fn fetch_meetings(&self) -> Result<Vec<MeetingEvent>> {
        self.respond(DataSource::Meetings, sample_meetings()).await
    }
}

#[async_trait]
impl HolidaySource for StaticSources {
    async fn fetch_holidays(&self, year: i32) -> Result<Vec<HolidayEvent>> {
        self.respond(DataSource::Holidays, sample_holidays(year)).await
    }
}

#[async_trait]
impl InterviewerSource for StaticSources {
    async fn fetch_teams(&self) -> Result<Vec<Team>> {
        self.respond(DataSource::Interviewers, sample_teams()).await
    }
}

/// Echoes the meeting back as stored under id `scheduled-1`. Fails with the
/// meetings source.
#[async_trait]
impl MeetingScheduler for StaticSources {
    async fn schedule_meeting(&self, meeting: &NewMeetingRecord) -> Result<MeetingEvent> {
        let mut scheduled =
            MeetingEvent::new("scheduled-1", meeting.title.clone(), Some(meeting.datetime.as_str()));
        scheduled.description = meeting.description.clone();
        scheduled.meeting_description = meeting.meeting_description.clone();
        scheduled.participants = meeting.participants.clone();
        scheduled.duration_hours = meeting.duration_of_meeting;
        scheduled.location = Some(meeting.location.clone());

        let mut stored = self.respond(DataSource::Meetings, vec![scheduled]).await?;
        Ok(stored.remove(0))
    }
}
