//! # Recruiting Calendar Backend
//!
//! Aggregates scheduled meetings and public holidays into a single calendar
//! view, categorizes meeting history and flattens the interviewer directory
//! for the recruiting dashboard.
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (browser frontend)
//!     ↓
//! IO Layer (REST API, page loader, HTTP clients)
//!     ↓
//! Domain Layer (aggregation, calendar view, categorization)
//! ```
//!
//! [`AppState`] ties the layers together: it owns the page loader, the
//! meeting scheduler, the latest [`PageSnapshot`] and the calendar view
//! state shared by every request.

pub mod config;
pub mod domain;
pub mod io;
pub mod session;

#[cfg(test)]
pub(crate) mod test_utils;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use chrono::Datelike;
use shared::LoadNotice;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::domain::{CalendarService, CalendarViewState, ViewMode};
use crate::io::clients::{HolidayApiClient, MeetingScheduler, RecruitApiClient};
use crate::io::{LoadError, LoadTracker, PageLoader};

pub use session::{Clock, PageSnapshot, ViewError};

/// Main application state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    pub calendar_service: CalendarService,
    pub loader: PageLoader,
    pub scheduler: Arc<dyn MeetingScheduler>,
    pub tracker: LoadTracker,
    pub snapshot: Arc<RwLock<PageSnapshot>>,
    pub view: Arc<Mutex<CalendarViewState>>,
    pub clock: Clock,
}

impl AppState {
    /// Empty state; the calendar opens on the month containing `clock.now()`
    pub fn new(loader: PageLoader, scheduler: Arc<dyn MeetingScheduler>, clock: Clock) -> Self {
        let view = CalendarViewState::new(clock.now());
        Self {
            calendar_service: CalendarService::new(),
            loader,
            scheduler,
            tracker: LoadTracker::new(),
            snapshot: Arc::new(RwLock::new(PageSnapshot::default())),
            view: Arc::new(Mutex::new(view)),
            clock,
        }
    }

    /// Year whose holidays the current view needs
    pub async fn focused_year(&self) -> i32 {
        let view = self.view.lock().await;
        match view.mode() {
            ViewMode::Day(date) => date.year(),
            ViewMode::Month => view.visible_month().year(),
        }
    }

    /// Refetch every source and commit the results unless a newer refresh
    /// started in the meantime. Returns the notices of the committed load.
    pub async fn refresh(&self) -> Result<Vec<LoadNotice>, LoadError> {
        let year = self.focused_year().await;
        let ticket = self.tracker.begin();

        let result = self.loader.load(year, &ticket).await;
        if let Err(LoadError::Abandoned) = result {
            return Err(LoadError::Abandoned);
        }

        let mut snapshot = self.snapshot.write().await;
        // A newer refresh may have begun while this one waited for the lock
        if ticket.is_abandoned() {
            warn!("Refresh superseded before commit");
            return Err(LoadError::Abandoned);
        }

        let data = match result {
            Ok(data) => data,
            Err(LoadError::AllSourcesFailed { notices }) => {
                snapshot.notices = notices.clone();
                return Err(LoadError::AllSourcesFailed { notices });
            }
            Err(e) => return Err(e),
        };
        let notices = data.notices.clone();
        snapshot.apply(data);
        info!(
            "Committed page data: {} meetings, {} interviewers, {} notices",
            snapshot.meetings.len(),
            snapshot.directory.len(),
            notices.len()
        );
        Ok(notices)
    }

    /// Make sure holidays for `year` are cached, fetching them lazily
    pub async fn ensure_holidays(&self, year: i32) {
        if self.snapshot.read().await.has_holidays_for(year) {
            return;
        }

        info!("Fetching holidays for {}", year);
        let (holidays, notice) = self.loader.load_holidays(year).await;

        let mut snapshot = self.snapshot.write().await;
        if snapshot.has_holidays_for(year) {
            return;
        }
        snapshot.cache_holidays(year, holidays);
        if let Some(notice) = notice {
            snapshot.notices.push(notice);
        }
    }
}

/// Build the application state from configuration
pub fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up API clients");
    let recruit_api = Arc::new(
        RecruitApiClient::new(&config.recruit_api_base_url, config.http_timeout)
            .context("Failed to create recruiting API client")?,
    );
    let holiday_api = Arc::new(
        HolidayApiClient::new(
            &config.holiday_api_base_url,
            config.holiday_api_key.clone(),
            &config.holiday_country,
            config.http_timeout,
        )
        .context("Failed to create holiday API client")?,
    );

    if config.holiday_api_key.is_none() {
        warn!("HOLIDAY_API_KEY is not set; the calendar will show no holidays");
    }

    info!("Setting up application state");
    let loader = PageLoader::new(recruit_api.clone(), holiday_api, recruit_api.clone());
    Ok(AppState::new(loader, recruit_api, Clock::system()))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors_origin: &str) -> Result<Router> {
    let origin = cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin '{}'", cors_origin))?;

    // CORS setup to allow frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    Ok(Router::new()
        .nest("/api", io::rest::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state))
}
