use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use log::info;
use shared::UpdateHydrationRequest;

use super::error_response;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_hydration).put(set_hydration))
        .route("/increment", post(increment_hydration))
        .route("/decrement", post(decrement_hydration))
}

pub async fn get_hydration(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/hydration");
    (StatusCode::OK, Json(state.hydration_service.get_level().await)).into_response()
}

/// Set the level directly; the value is stored as given
pub async fn set_hydration(
    State(state): State<AppState>,
    Json(request): Json<UpdateHydrationRequest>,
) -> impl IntoResponse {
    info!("PUT /api/hydration - level: {}", request.level);

    match state.hydration_service.set_level(request.level).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => error_response("set hydration level", e),
    }
}

pub async fn increment_hydration(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/hydration/increment");

    match state.hydration_service.increment().await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => error_response("increment hydration", e),
    }
}

pub async fn decrement_hydration(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/hydration/decrement");

    match state.hydration_service.decrement().await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => error_response("decrement hydration", e),
    }
}

#[cfg(test)]
mod tests {
    use crate::io::rest::test_support::{send, test_app};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_hydration_endpoints() {
        let (app, _state) = test_app().await;

        let (status, body) = send(&app, "POST", "/api/hydration/increment", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"level": 4, "target": 10}));

        let (_, body) = send(&app, "PUT", "/api/hydration", Some(json!({"level": 11}))).await;
        assert_eq!(body["level"], 11);

        let (_, body) = send(&app, "POST", "/api/hydration/decrement", None).await;
        assert_eq!(body["level"], 10);

        let (_, body) = send(&app, "GET", "/api/hydration", None).await;
        assert_eq!(body["level"], 10);
    }
}
