use axum::{extract::State, response::Json};
use shared::DashboardResponse;
use tracing::info;

use crate::domain::dashboard;
use crate::io::mappers::MeetingMapper;
use crate::AppState;

/// Number of upcoming meetings listed on the dashboard
const UPCOMING_LIMIT: usize = 5;

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    info!("GET /api/dashboard");

    let snapshot = state.snapshot.read().await;
    let summary = dashboard::summarize(
        &snapshot.meetings,
        snapshot.directory.len(),
        state.clock.now(),
        UPCOMING_LIMIT,
    );

    Json(DashboardResponse {
        total_meetings: summary.total_meetings,
        total_hours: summary.total_hours,
        interviewer_count: summary.interviewer_count,
        upcoming: MeetingMapper::to_dto_list(&summary.upcoming),
        notices: snapshot.notices.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{app, get_json};
    use axum::http::StatusCode;
    use shared::DashboardResponse;

    #[tokio::test]
    async fn test_get_dashboard() {
        let app = app().await;

        let (status, dashboard): (_, DashboardResponse) = get_json(&app, "/api/dashboard").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(dashboard.total_meetings, 4);
        assert_eq!(dashboard.total_hours, 4.5);
        assert_eq!(dashboard.interviewer_count, 2);
        assert_eq!(dashboard.upcoming.len(), 1);
        assert_eq!(dashboard.upcoming[0].id, "m2");
    }
}
