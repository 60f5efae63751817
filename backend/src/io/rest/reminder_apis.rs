//! # REST API for Reminders

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post, put},
    Router,
};
use log::info;
use shared::{EntityId, NewReminder, RecordResponse};

use super::error_response;
use super::mappers::RecordMapper;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reminders).post(add_reminder))
        .route("/:id", put(update_reminder).delete(delete_reminder))
        .route("/:id/toggle", post(toggle_reminder))
}

/// Reminders grouped into today, upcoming and all
pub async fn list_reminders(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/reminders");

    let reminders = state.reminder_service.list_reminders().await;
    (StatusCode::OK, Json(reminders)).into_response()
}

pub async fn add_reminder(
    State(state): State<AppState>,
    Json(request): Json<NewReminder>,
) -> impl IntoResponse {
    info!("POST /api/reminders - request: {:?}", request);

    match state.reminder_service.add_reminder(request).await {
        Ok(reminder) => {
            let response = RecordResponse {
                record: reminder,
                success_message: "Reminder added successfully".to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => error_response("add reminder", e),
    }
}

pub async fn update_reminder(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(request): Json<NewReminder>,
) -> impl IntoResponse {
    info!("PUT /api/reminders/{} - request: {:?}", id, request);

    let reminder = RecordMapper::reminder(id, request);
    match state.reminder_service.update_reminder(reminder).await {
        Ok(reminder) => {
            let response = RecordResponse {
                record: reminder,
                success_message: "Reminder updated".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response("update reminder", e),
    }
}

pub async fn delete_reminder(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> impl IntoResponse {
    info!("DELETE /api/reminders/{}", id);

    match state.reminder_service.delete_reminder(id).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => error_response("delete reminder", e),
    }
}

pub async fn toggle_reminder(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> impl IntoResponse {
    info!("POST /api/reminders/{}/toggle", id);

    match state.reminder_service.toggle_complete(id).await {
        Ok(toggled) => (StatusCode::OK, Json(toggled)).into_response(),
        Err(e) => error_response("toggle reminder", e),
    }
}

#[cfg(test)]
mod tests {
    use crate::io::rest::test_support::{send, test_app};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_add_reminder_and_list_upcoming() {
        let (app, _state) = test_app().await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/reminders",
            Some(json!({"title": "Refill toner", "time": "18:00", "date": "2025-04-10", "type": "skincare"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["record"]["id"], 4);
        assert_eq!(body["record"]["completed"], false);

        let (_, body) = send(&app, "GET", "/api/reminders", None).await;
        assert_eq!(body["today"].as_array().unwrap().len(), 3);
        assert_eq!(body["upcoming"][0]["title"], "Refill toner");
        assert_eq!(body["all"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_missing_title_is_bad_request() {
        let (app, _state) = test_app().await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/reminders",
            Some(json!({"title": "", "time": "18:00", "date": "2025-04-10", "type": "diet"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Please fill in all required fields");
    }

    #[tokio::test]
    async fn test_toggle_and_delete() {
        let (app, _state) = test_app().await;

        let (status, body) = send(&app, "POST", "/api/reminders/3/toggle", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["completed"], true);

        let (status, _) = send(&app, "DELETE", "/api/reminders/3", None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(&app, "POST", "/api/reminders/3/toggle", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
