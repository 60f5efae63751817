//! # REST API for Sign-in and the User Profile
//!
//! Endpoints for logging in and out and for reading or editing the current
//! user. Authentication is a placeholder; see `domain::auth`.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use log::{error, info};
use shared::{LoginRequest, UpdateUserRequest};

use super::error_response;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/session/login", post(login))
        .route("/session/logout", post(logout))
        .route("/user", get(get_user).patch(update_user))
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> impl IntoResponse {
    // The password is never logged
    info!("POST /api/session/login - email: {}", request.email);

    match state.session_service.login(request).await {
        Ok(response) if response.success => (StatusCode::OK, Json(response)).into_response(),
        Ok(response) => (StatusCode::UNAUTHORIZED, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to log in: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error logging in").into_response()
        }
    }
}

pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/session/logout");

    match state.session_service.logout().await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => error_response("log out", e),
    }
}

pub async fn get_user(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/user");

    let response = state.session_service.current_user().await;
    (StatusCode::OK, Json(response)).into_response()
}

pub async fn update_user(
    State(state): State<AppState>,
    Json(request): Json<UpdateUserRequest>,
) -> impl IntoResponse {
    info!("PATCH /api/user - request: {:?}", request);

    match state.session_service.update_user(request).await {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(e) => error_response("update user", e),
    }
}

#[cfg(test)]
mod tests {
    use crate::io::rest::test_support::{send, test_app};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_login_logout_flow() {
        let (app, _state) = test_app().await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/session/login",
            Some(json!({"email": "jane@example.com", "password": "pw"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["user"]["skinType"], "Combination");

        let (_, user) = send(&app, "GET", "/api/user", None).await;
        assert_eq!(user["isAuthenticated"], true);

        let (status, body) = send(&app, "POST", "/api/session/logout", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isAuthenticated"], false);
    }

    #[tokio::test]
    async fn test_login_with_empty_fields_is_unauthorized() {
        let (app, _state) = test_app().await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/session/login",
            Some(json!({"email": "", "password": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Invalid email or password");
    }

    #[tokio::test]
    async fn test_patch_user_requires_login() {
        let (app, _state) = test_app().await;

        let (status, _) = send(&app, "PATCH", "/api/user", Some(json!({"name": "Jane"}))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        send(
            &app,
            "POST",
            "/api/session/login",
            Some(json!({"email": "jane@example.com", "password": "pw"})),
        )
        .await;
        let (status, body) = send(&app, "PATCH", "/api/user", Some(json!({"skinType": "Oily"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skinType"], "Oily");
        assert_eq!(body["name"], "Test User");
    }
}
