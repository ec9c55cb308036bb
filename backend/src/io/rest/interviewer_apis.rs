use axum::{extract::State, response::Json};
use shared::InterviewerListResponse;
use tracing::info;

use crate::io::mappers::InterviewerMapper;
use crate::AppState;

/// Flattened interviewer directory
pub async fn list_interviewers(State(state): State<AppState>) -> Json<InterviewerListResponse> {
    info!("GET /api/interviewers");

    let snapshot = state.snapshot.read().await;
    Json(InterviewerListResponse {
        interviewers: InterviewerMapper::to_dto_list(snapshot.directory.all()),
        notices: snapshot.notices.clone(),
    })
}
