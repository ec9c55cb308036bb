use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use shared::{MeetingDto, MeetingHistoryResponse, ScheduleInterviewRequest};
use tracing::{error, info};

use super::ApiError;
use crate::domain::{categorize, plan_interview};
use crate::io::mappers::{MeetingMapper, ScheduleMapper};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct MeetingHistoryQuery {
    pub search: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/history", get(get_meeting_history))
        .route("/schedule", post(schedule_interview))
}

/// Meetings split into scheduled / completed / canceled / other, optionally
/// filtered by a free-text search
async fn get_meeting_history(
    State(state): State<AppState>,
    Query(query): Query<MeetingHistoryQuery>,
) -> Json<MeetingHistoryResponse> {
    info!("GET /api/meetings/history - search: {:?}", query.search);

    let search = query
        .search
        .map(|term| term.trim().to_string())
        .filter(|term| !term.is_empty());

    let snapshot = state.snapshot.read().await;
    let buckets = categorize(&snapshot.meetings, state.clock.now(), search.as_deref());

    Json(MeetingHistoryResponse {
        scheduled: MeetingMapper::to_dto_list(&buckets.scheduled),
        completed: MeetingMapper::to_dto_list(&buckets.completed),
        canceled: MeetingMapper::to_dto_list(&buckets.canceled),
        other: MeetingMapper::to_dto_list(&buckets.other),
        all: MeetingMapper::to_dto_list(buckets.all()),
        search,
        notices: snapshot.notices.clone(),
    })
}

/// Book an interview with the recruiting API. The stored meeting joins the
/// current snapshot so history and calendar show it before the next refresh.
async fn schedule_interview(
    State(state): State<AppState>,
    body: Result<Json<ScheduleInterviewRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MeetingDto>), ApiError> {
    let Json(request) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    info!(
        "POST /api/meetings/schedule - candidate: {}, interviewer: {}",
        request.candidate_email, request.interviewer_email
    );

    let plan = plan_interview(&ScheduleMapper::to_domain(request))?;
    let record = ScheduleMapper::to_record(&plan);

    let meeting = state.scheduler.schedule_meeting(&record).await.map_err(|e| {
        error!("Failed to schedule meeting: {:#}", e);
        ApiError::BadGateway(format!("Failed to schedule meeting: {}", e))
    })?;

    let dto = MeetingMapper::to_dto(&meeting);
    let mut snapshot = state.snapshot.write().await;
    if !meeting.id.is_empty() && !snapshot.meetings.iter().any(|m| m.id == meeting.id) {
        snapshot.meetings.push(meeting);
    }

    Ok((StatusCode::CREATED, Json(dto)))
}
