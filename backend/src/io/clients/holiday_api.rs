use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{info, warn};

use super::HolidaySource;
use crate::domain::date_utils;
use crate::domain::models::HolidayEvent;

/// Client for the Calendarific v2 holidays endpoint
#[derive(Clone)]
pub struct HolidayApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    country: String,
}

#[derive(Debug, Deserialize)]
struct CalendarificResponse {
    response: CalendarificPayload,
}

/// Calendarific answers `"response": []` instead of an object when a
/// request yields nothing
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CalendarificPayload {
    Empty(Vec<serde_json::Value>),
    Holidays {
        #[serde(default)]
        holidays: Vec<CalendarificHoliday>,
    },
}

#[derive(Debug, Deserialize)]
struct CalendarificHoliday {
    name: String,
    #[serde(default)]
    description: Option<String>,
    date: CalendarificDate,
}

#[derive(Debug, Deserialize)]
struct CalendarificDate {
    iso: String,
}

impl HolidayApiClient {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        country: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for the holiday API")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            country: country.to_string(),
        })
    }

    fn to_domain(holiday: CalendarificHoliday) -> Option<HolidayEvent> {
        match date_utils::parse_calendar_date(&holiday.date.iso) {
            Some(date) => Some(HolidayEvent {
                name: holiday.name,
                date,
                description: holiday.description.filter(|d| !d.trim().is_empty()),
            }),
            None => {
                warn!(
                    "Dropping holiday '{}' with unparseable date {:?}",
                    holiday.name, holiday.date.iso
                );
                None
            }
        }
    }
}

#[async_trait]
impl HolidaySource for HolidayApiClient {
    async fn fetch_holidays(&self, year: i32) -> Result<Vec<HolidayEvent>> {
        let Some(api_key) = self.api_key.as_deref() else {
            bail!("Holiday API key is not configured");
        };

        let url = format!("{}/holidays", self.base_url);
        let year_param = year.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("api_key", api_key),
                ("country", self.country.as_str()),
                ("year", year_param.as_str()),
            ])
            .send()
            .await
            .with_context(|| format!("Holiday request for {} failed", year))?
            .error_for_status()
            .with_context(|| format!("Holiday API returned an error status for {}", year))?;

        let body: CalendarificResponse = response
            .json()
            .await
            .context("Failed to parse holiday API response")?;

        let holidays: Vec<HolidayEvent> = match body.response {
            CalendarificPayload::Holidays { holidays } => {
                holidays.into_iter().filter_map(Self::to_domain).collect()
            }
            CalendarificPayload::Empty(_) => Vec::new(),
        };

        info!("Fetched {} holidays for {} ({})", holidays.len(), year, self.country);
        Ok(holidays)
    }
}
