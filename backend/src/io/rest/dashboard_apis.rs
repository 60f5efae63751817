//! # REST API for the whole-state view and the dashboard summary

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use log::info;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/state", get(get_state))
        .route("/dashboard", get(get_dashboard))
}

/// Flat snapshot of everything the client displays
pub async fn get_state(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/state");

    let store = state.store.lock().await;
    (StatusCode::OK, Json(store.view())).into_response()
}

pub async fn get_dashboard(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/dashboard");

    let summary = state.dashboard_service.summary().await;
    (StatusCode::OK, Json(summary)).into_response()
}

#[cfg(test)]
mod tests {
    use crate::io::rest::test_support::{send, test_app};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_get_state_returns_camel_case_snapshot() {
        let (app, _state) = test_app().await;

        let (status, body) = send(&app, "GET", "/api/state", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hydrationLevel"], 3);
        assert_eq!(body["isAuthenticated"], false);
        assert_eq!(body["morningRoutine"].as_array().unwrap().len(), 4);
        assert_eq!(body["reminders"][0]["type"], "skincare");
    }

    #[tokio::test]
    async fn test_get_dashboard() {
        let (app, _state) = test_app().await;

        let (status, body) = send(&app, "GET", "/api/dashboard", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["date"], "2025-04-03");
        assert_eq!(body["todaysMealCount"], 2);
        assert_eq!(body["hydrationTarget"], 10);
        assert_eq!(body["upcomingReminders"][1]["when"], "Today, 2:00 PM");
    }
}
