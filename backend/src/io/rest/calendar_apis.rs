use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use shared::{
    CalendarDayResponse, CalendarMonthResponse, CalendarViewResponse, SelectEventRequest,
    ViewDateRequest,
};
use tracing::info;

use super::ApiError;
use crate::domain::{event_aggregator, ViewMode, YearMonth};
use crate::io::mappers::CalendarMapper;
use crate::{AppState, ViewError};

// Query parameters for calendar month API
#[derive(Debug, Deserialize)]
pub struct CalendarMonthQuery {
    pub month: u32,
    pub year: i32,
}

#[derive(Debug, Deserialize)]
pub struct CalendarDayQuery {
    pub date: String,
}

/// Create a router for calendar related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/month", get(get_calendar_month))
        .route("/day", get(get_calendar_day))
        .route("/view", get(get_view))
        .route("/view/previous", post(navigate_previous_month))
        .route("/view/next", post(navigate_next_month))
        .route("/view/day", post(view_day))
        .route("/view/month", post(back_to_month_view))
        .route("/view/event", post(select_event).delete(close_event_detail))
}

/// Month grid for any month, independent of the view state
async fn get_calendar_month(
    State(state): State<AppState>,
    query: Result<Query<CalendarMonthQuery>, QueryRejection>,
) -> Result<Json<CalendarMonthResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    info!("GET /api/calendar/month - query: {:?}", query);

    let focus = YearMonth::new(query.year, query.month)?;
    state.ensure_holidays(focus.year()).await;

    let snapshot = state.snapshot.read().await;
    let events = snapshot.events_for_year(focus.year());
    let grid = state
        .calendar_service
        .generate_month_grid(focus, &events, state.clock.today());

    Ok(Json(CalendarMapper::month_to_dto(&grid, snapshot.notices.clone())))
}

/// Events on one date
async fn get_calendar_day(
    State(state): State<AppState>,
    query: Result<Query<CalendarDayQuery>, QueryRejection>,
) -> Result<Json<CalendarDayResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    info!("GET /api/calendar/day - date: {}", query.date);

    let date = parse_date(&query.date)?;
    state.ensure_holidays(date.year()).await;

    let snapshot = state.snapshot.read().await;
    let events = snapshot.events_for_year(date.year());
    let on_date = event_aggregator::events_on_date(&events, date);

    Ok(Json(CalendarMapper::day_to_dto(date, &on_date)))
}

async fn get_view(State(state): State<AppState>) -> Json<CalendarViewResponse> {
    info!("GET /api/calendar/view");
    Json(view_response(&state).await)
}

async fn navigate_previous_month(
    State(state): State<AppState>,
) -> Result<Json<CalendarViewResponse>, ApiError> {
    info!("POST /api/calendar/view/previous");
    if !state.view.lock().await.go_to_previous_month() {
        return Err(ViewError::NotInMonthView.into());
    }
    Ok(Json(view_response(&state).await))
}

async fn navigate_next_month(
    State(state): State<AppState>,
) -> Result<Json<CalendarViewResponse>, ApiError> {
    info!("POST /api/calendar/view/next");
    if !state.view.lock().await.go_to_next_month() {
        return Err(ViewError::NotInMonthView.into());
    }
    Ok(Json(view_response(&state).await))
}

async fn view_day(
    State(state): State<AppState>,
    body: Result<Json<ViewDateRequest>, JsonRejection>,
) -> Result<Json<CalendarViewResponse>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    info!("POST /api/calendar/view/day - date: {}", request.date);

    let date = parse_date(&request.date)?;
    state.view.lock().await.view_date(date);
    Ok(Json(view_response(&state).await))
}

async fn back_to_month_view(State(state): State<AppState>) -> Json<CalendarViewResponse> {
    info!("POST /api/calendar/view/month");
    state.view.lock().await.back_to_month_view();
    Json(view_response(&state).await)
}

async fn select_event(
    State(state): State<AppState>,
    body: Result<Json<SelectEventRequest>, JsonRejection>,
) -> Result<Json<CalendarViewResponse>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    info!("POST /api/calendar/view/event - id: {}", request.id);

    let event = state
        .snapshot
        .read()
        .await
        .find_event(&request.id)
        .ok_or_else(|| ViewError::UnknownEvent(request.id.clone()))?;

    state.view.lock().await.select_event(event);
    Ok(Json(view_response(&state).await))
}

async fn close_event_detail(State(state): State<AppState>) -> Json<CalendarViewResponse> {
    info!("DELETE /api/calendar/view/event");
    state.view.lock().await.close_detail();
    Json(view_response(&state).await)
}

/// Current view state with the grid (month mode) or the day's events (day mode)
async fn view_response(state: &AppState) -> CalendarViewResponse {
    let view = state.view.lock().await.clone();
    let year = match view.mode() {
        ViewMode::Day(date) => date.year(),
        ViewMode::Month => view.visible_month().year(),
    };
    state.ensure_holidays(year).await;

    let snapshot = state.snapshot.read().await;
    let events = snapshot.events_for_year(year);

    let (month, day) = match view.mode() {
        ViewMode::Month => {
            let grid = view.month_grid(&state.calendar_service, &events, state.clock.today());
            (Some(CalendarMapper::month_to_dto(&grid, snapshot.notices.clone())), None)
        }
        ViewMode::Day(date) => {
            let day_events = view.day_events(&events);
            (None, Some(CalendarMapper::day_to_dto(date, &day_events)))
        }
    };

    CalendarMapper::view_to_dto(&view, month, day)
}

fn parse_date(value: &str) -> Result<NaiveDate, ViewError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ViewError::InvalidDate(value.to_string()))
}
