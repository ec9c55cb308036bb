//! # REST API Interface Layer
//!
//! HTTP endpoints for the recruiting dashboard. Handlers translate between
//! JSON DTOs and the domain layer and map domain errors to status codes:
//!
//! - malformed query or body: 400
//! - unknown event id: 404
//! - month navigation outside month view, superseded refresh: 409
//! - recruiting API rejected a scheduling request: 502
//! - every data source down: 503, with the per-source notices
//!
//! A partial load failure is not an error; responses carry `notices`.

pub mod calendar_apis;
pub mod dashboard_apis;
pub mod interviewer_apis;
pub mod meeting_apis;
pub mod refresh_apis;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use shared::{ErrorResponse, LoadNotice};
use tracing::warn;

use crate::domain::{CalendarError, ScheduleError};
use crate::io::LoadError;
use crate::{AppState, ViewError};

/// All API routes, to be nested under `/api`
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/calendar", calendar_apis::router())
        .nest("/meetings", meeting_apis::router())
        .route("/interviewers", get(interviewer_apis::list_interviewers))
        .route("/dashboard", get(dashboard_apis::get_dashboard))
        .route("/refresh", post(refresh_apis::refresh))
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    BadGateway(String),
    Unavailable {
        message: String,
        notices: Vec<LoadNotice>,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, notices) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message, Vec::new()),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message, Vec::new()),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, message, Vec::new()),
            ApiError::BadGateway(message) => (StatusCode::BAD_GATEWAY, message, Vec::new()),
            ApiError::Unavailable { message, notices } => {
                (StatusCode::SERVICE_UNAVAILABLE, message, notices)
            }
        };
        warn!("Request failed with {}: {}", status, error);
        (status, Json(ErrorResponse { error, notices })).into_response()
    }
}

impl From<CalendarError> for ApiError {
    fn from(e: CalendarError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<ScheduleError> for ApiError {
    fn from(e: ScheduleError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<ViewError> for ApiError {
    fn from(e: ViewError) -> Self {
        match e {
            ViewError::UnknownEvent(_) => ApiError::NotFound(e.to_string()),
            ViewError::InvalidDate(_) => ApiError::BadRequest(e.to_string()),
            ViewError::NotInMonthView => ApiError::Conflict(e.to_string()),
        }
    }
}

impl From<LoadError> for ApiError {
    fn from(e: LoadError) -> Self {
        let message = e.to_string();
        match e {
            LoadError::AllSourcesFailed { notices } => ApiError::Unavailable { message, notices },
            LoadError::Abandoned => ApiError::Conflict(message),
        }
    }
}
