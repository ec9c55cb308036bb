//! Fan-out/fan-in loading of everything a page needs.
//!
//! Meetings, holidays and interviewers are fetched concurrently and the
//! loader waits for all three to settle. A failing source becomes a
//! [`LoadNotice`] and an empty collection; only when every source fails does
//! the load itself fail. Each load carries a [`LoadTicket`] so a superseded
//! load can be dropped instead of overwriting newer state.

use shared::{DataSource, LoadNotice, Team};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use super::clients::{HolidaySource, InterviewerSource, MeetingSource};
use crate::domain::models::{HolidayEvent, MeetingEvent};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadError {
    #[error("Every data source failed to load")]
    AllSourcesFailed { notices: Vec<LoadNotice> },
    #[error("Load was abandoned before its results were committed")]
    Abandoned,
}

/// Abandonment flag for one in-flight load
#[derive(Debug, Clone, Default)]
pub struct LoadTicket {
    abandoned: Arc<AtomicBool>,
}

impl LoadTicket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn abandon(&self) {
        self.abandoned.store(true, Ordering::SeqCst);
    }

    pub fn is_abandoned(&self) -> bool {
        self.abandoned.load(Ordering::SeqCst)
    }
}

/// Hands out tickets; starting a load abandons the previous one
#[derive(Debug, Clone, Default)]
pub struct LoadTracker {
    current: Arc<Mutex<LoadTicket>>,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> LoadTicket {
        let mut current = self
            .current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        current.abandon();
        *current = LoadTicket::new();
        current.clone()
    }
}

/// Settled results of one page load
#[derive(Debug, Clone, Default)]
pub struct PageData {
    pub meetings: Vec<MeetingEvent>,
    pub holiday_year: i32,
    /// `None` when the holiday fetch failed
    pub holidays: Option<Vec<HolidayEvent>>,
    pub teams: Vec<Team>,
    pub notices: Vec<LoadNotice>,
}

#[derive(Clone)]
pub struct PageLoader {
    meetings: Arc<dyn MeetingSource>,
    holidays: Arc<dyn HolidaySource>,
    interviewers: Arc<dyn InterviewerSource>,
}

impl PageLoader {
    pub fn new(
        meetings: Arc<dyn MeetingSource>,
        holidays: Arc<dyn HolidaySource>,
        interviewers: Arc<dyn InterviewerSource>,
    ) -> Self {
        Self {
            meetings,
            holidays,
            interviewers,
        }
    }

    /// Fetch every source for a page showing `holiday_year`
    pub async fn load(&self, holiday_year: i32, ticket: &LoadTicket) -> Result<PageData, LoadError> {
        let (meetings, holidays, teams) = tokio::join!(
            self.meetings.fetch_meetings(),
            self.holidays.fetch_holidays(holiday_year),
            self.interviewers.fetch_teams(),
        );

        if ticket.is_abandoned() {
            warn!("Discarding results of an abandoned page load");
            return Err(LoadError::Abandoned);
        }

        let mut notices = Vec::new();
        let meetings = settle(DataSource::Meetings, meetings, &mut notices);
        let holidays = settle(DataSource::Holidays, holidays, &mut notices);
        let teams = settle(DataSource::Interviewers, teams, &mut notices);

        if notices.len() == 3 {
            warn!("All data sources failed to load");
            return Err(LoadError::AllSourcesFailed { notices });
        }

        let data = PageData {
            meetings: meetings.unwrap_or_default(),
            holiday_year,
            holidays,
            teams: teams.unwrap_or_default(),
            notices,
        };

        info!(
            "Page load settled: {} meetings, {} holidays for {}, {} teams, {} notices",
            data.meetings.len(),
            data.holidays.as_ref().map_or(0, Vec::len),
            holiday_year,
            data.teams.len(),
            data.notices.len()
        );
        Ok(data)
    }

    /// Holidays for a single year. Failures resolve to an empty set plus a notice.
    pub async fn load_holidays(&self, year: i32) -> (Vec<HolidayEvent>, Option<LoadNotice>) {
        let mut notices = Vec::new();
        let holidays = settle(DataSource::Holidays, self.holidays.fetch_holidays(year).await, &mut notices);
        (holidays.unwrap_or_default(), notices.pop())
    }
}

fn settle<T>(
    source: DataSource,
    result: anyhow::Result<Vec<T>>,
    notices: &mut Vec<LoadNotice>,
) -> Option<Vec<T>> {
    match result {
        Ok(items) => Some(items),
        Err(e) => {
            warn!("Failed to load {}: {:#}", source, e);
            notices.push(LoadNotice {
                source,
                message: format!("Failed to load {}: {}", source, e),
            });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_holidays, sample_meetings, sample_teams, StaticSources};
    use std::time::Duration;

    #[tokio::test]
    async fn it_loads_every_source() {
        let sources = StaticSources::healthy();
        let loader = sources.loader();

        let data = loader.load(2025, &LoadTicket::new()).await.unwrap();

        assert_eq!(data.meetings.len(), sample_meetings().len());
        assert_eq!(data.holidays.unwrap().len(), sample_holidays(2025).len());
        assert_eq!(data.teams.len(), sample_teams().len());
        assert!(data.notices.is_empty());
    }

    #[tokio::test]
    async fn it_tolerates_a_failing_source() {
        let sources = StaticSources::healthy().failing(DataSource::Holidays);
        let loader = sources.loader();

        let data = loader.load(2025, &LoadTicket::new()).await.unwrap();

        assert_eq!(data.meetings.len(), sample_meetings().len());
        assert!(data.holidays.is_none());
        assert_eq!(data.notices.len(), 1);
        assert_eq!(data.notices[0].source, DataSource::Holidays);
    }

    #[tokio::test]
    async fn it_fails_when_every_source_fails() {
        let sources = StaticSources::healthy()
            .failing(DataSource::Meetings)
            .failing(DataSource::Holidays)
            .failing(DataSource::Interviewers);
        let loader = sources.loader();

        let err = loader.load(2025, &LoadTicket::new()).await.unwrap_err();
        match err {
            LoadError::AllSourcesFailed { notices } => assert_eq!(notices.len(), 3),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn it_discards_abandoned_loads() {
        let sources = StaticSources::healthy().with_delay(Duration::from_millis(50));
        let loader = sources.loader();
        let tracker = LoadTracker::new();

        let first = tracker.begin();
        let pending = {
            let loader = loader.clone();
            let ticket = first.clone();
            tokio::spawn(async move { loader.load(2025, &ticket).await })
        };

        // A newer load supersedes the pending one
        let second = tracker.begin();
        assert!(first.is_abandoned());
        assert!(!second.is_abandoned());

        let result = pending.await.unwrap();
        assert_eq!(result.unwrap_err(), LoadError::Abandoned);
    }

    #[tokio::test]
    async fn it_turns_holiday_failures_into_empty_sets() {
        let sources = StaticSources::healthy().failing(DataSource::Holidays);
        let (holidays, notice) = sources.loader().load_holidays(2026).await;

        assert!(holidays.is_empty());
        assert_eq!(notice.unwrap().source, DataSource::Holidays);

        let (holidays, notice) = StaticSources::healthy().loader().load_holidays(2026).await;
        assert_eq!(holidays.len(), sample_holidays(2026).len());
        assert!(notice.is_none());
    }
}
