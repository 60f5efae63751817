//! # REST API for the Skin Journal

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, put},
    Router,
};
use chrono::NaiveDate;
use log::info;
use serde::Deserialize;
use shared::{EntityId, NewJournalEntry, RecordResponse};

use super::error_response;
use super::mappers::RecordMapper;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct JournalQuery {
    pub date: Option<NaiveDate>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_entries).post(add_entry))
        .route("/:id", put(update_entry).delete(delete_entry))
}

pub async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<JournalQuery>,
) -> impl IntoResponse {
    info!("GET /api/journal - query: {:?}", query);

    let entries = state.journal_service.list_entries(query.date).await;
    (StatusCode::OK, Json(entries)).into_response()
}

pub async fn add_entry(
    State(state): State<AppState>,
    Json(request): Json<NewJournalEntry>,
) -> impl IntoResponse {
    info!("POST /api/journal - date: {}", request.date);

    match state.journal_service.add_entry(request).await {
        Ok(entry) => {
            let response = RecordResponse {
                record: entry,
                success_message: "Journal entry added".to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => error_response("add journal entry", e),
    }
}

pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(request): Json<NewJournalEntry>,
) -> impl IntoResponse {
    info!("PUT /api/journal/{}", id);

    let entry = RecordMapper::journal_entry(id, request);
    match state.journal_service.update_entry(entry).await {
        Ok(entry) => {
            let response = RecordResponse {
                record: entry,
                success_message: "Journal entry updated".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response("update journal entry", e),
    }
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> impl IntoResponse {
    info!("DELETE /api/journal/{}", id);

    match state.journal_service.delete_entry(id).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => error_response("delete journal entry", e),
    }
}

#[cfg(test)]
mod tests {
    use crate::io::rest::test_support::{send, test_app};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_journal_crud() {
        let (app, _state) = test_app().await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/journal",
            Some(json!({"date": "2025-04-04", "content": "Calmer skin"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["record"]["id"], 2);

        let (_, body) = send(&app, "GET", "/api/journal?date=2025-04-04", None).await;
        assert_eq!(body["entries"].as_array().unwrap().len(), 1);

        let (status, body) = send(
            &app,
            "PUT",
            "/api/journal/2",
            Some(json!({"date": "2025-04-04", "content": "Much calmer skin"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["record"]["content"], "Much calmer skin");

        let (status, _) = send(&app, "DELETE", "/api/journal/2", None).await;
        assert_eq!(status, StatusCode::OK);
        let (_, body) = send(&app, "GET", "/api/journal", None).await;
        assert_eq!(body["entries"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_journal_errors() {
        let (app, _state) = test_app().await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/journal",
            Some(json!({"date": "2025-04-04", "content": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "content cannot be empty");

        let (status, _) = send(&app, "DELETE", "/api/journal/99", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
