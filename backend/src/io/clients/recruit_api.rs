use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use shared::{MeetingRecord, NewMeetingRecord, Team};
use std::time::Duration;
use tracing::info;

use super::{InterviewerSource, MeetingScheduler, MeetingSource};
use crate::domain::models::MeetingEvent;
use crate::io::mappers::MeetingMapper;

/// The scheduling endpoint takes the meeting as a JSON string
#[derive(Serialize)]
struct TextEnvelope {
    text: String,
}

/// Client for the recruiting API (meetings and interviewers)
#[derive(Clone)]
pub struct RecruitApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl RecruitApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for the recruiting API")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()
            .with_context(|| format!("{} returned an error status", url))?;

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse response from {}", url))
    }
}

#[async_trait]
impl MeetingSource for RecruitApiClient {
    async fn fetch_meetings(&self) -> Result<Vec<MeetingEvent>> {
        let records: Vec<MeetingRecord> = self.get_json("/get_meetings").await?;
        info!("Fetched {} meetings", records.len());
        Ok(MeetingMapper::to_domain_list(records))
    }
}

#[async_trait]
impl InterviewerSource for RecruitApiClient {
    async fn fetch_teams(&self) -> Result<Vec<Team>> {
        let teams: Vec<Team> = self.get_json("/get_interviewers").await?;
        info!("Fetched {} interviewer teams", teams.len());
        Ok(teams)
    }
}

#[async_trait]
impl MeetingScheduler for RecruitApiClient {
    async fn schedule_meeting(&self, meeting: &NewMeetingRecord) -> Result<MeetingEvent> {
        let url = format!("{}/schedule_meeting", self.base_url);
        let envelope = TextEnvelope {
            text: serde_json::to_string(meeting).context("Failed to encode meeting")?,
        };

        let record: MeetingRecord = self
            .client
            .post(&url)
            .json(&envelope)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()
            .with_context(|| format!("{} returned an error status", url))?
            .json()
            .await
            .with_context(|| format!("Failed to parse response from {}", url))?;

        let scheduled = MeetingMapper::to_domain(record);
        info!("Scheduled '{}' as meeting {}", scheduled.title, scheduled.id);
        Ok(scheduled)
    }
}
