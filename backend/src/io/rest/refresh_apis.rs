use axum::{extract::State, response::Json};
use shared::RefreshResponse;
use tracing::info;

use super::ApiError;
use crate::AppState;

/// Refetch meetings, holidays and interviewers
pub async fn refresh(State(state): State<AppState>) -> Result<Json<RefreshResponse>, ApiError> {
    info!("POST /api/refresh");

    let notices = state.refresh().await?;

    let snapshot = state.snapshot.read().await;
    Ok(Json(RefreshResponse {
        meetings: snapshot.meetings.len(),
        holidays: snapshot.holiday_count(),
        interviewers: snapshot.directory.len(),
        notices,
    }))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{app, app_with, post_json};
    use crate::test_utils::StaticSources;
    use axum::http::StatusCode;
    use shared::{DataSource, ErrorResponse, RefreshResponse};

    #[tokio::test]
    async fn test_refresh() {
        let app = app().await;

        let (status, refreshed): (_, RefreshResponse) = post_json(&app, "/api/refresh", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(refreshed.meetings, 4);
        assert_eq!(refreshed.holidays, 2);
        assert_eq!(refreshed.interviewers, 2);
        assert!(refreshed.notices.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_with_partial_failure() {
        let (app, _) = app_with(StaticSources::healthy().failing(DataSource::Holidays)).await;

        let (status, refreshed): (_, RefreshResponse) = post_json(&app, "/api/refresh", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(refreshed.meetings, 4);
        assert_eq!(refreshed.holidays, 0);
        assert_eq!(refreshed.notices.len(), 1);
        assert_eq!(refreshed.notices[0].source, DataSource::Holidays);
    }

    #[tokio::test]
    async fn test_refresh_when_everything_is_down() {
        let sources = StaticSources::healthy()
            .failing(DataSource::Meetings)
            .failing(DataSource::Holidays)
            .failing(DataSource::Interviewers);
        let (app, state) = app_with(sources).await;

        let (status, error): (_, ErrorResponse) = post_json(&app, "/api/refresh", None).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(error.notices.len(), 3);
        assert_eq!(state.snapshot.read().await.notices.len(), 3);
    }
}
