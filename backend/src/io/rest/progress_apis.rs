//! # REST API for Progress Photos

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, put},
    Router,
};
use log::info;
use shared::{EntityId, NewProgressPhoto, RecordResponse};

use super::error_response;
use super::mappers::RecordMapper;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_photos).post(add_photo))
        .route("/:id", put(update_photo).delete(delete_photo))
}

pub async fn list_photos(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/progress-photos");

    let photos = state.progress_service.list_photos().await;
    (StatusCode::OK, Json(photos)).into_response()
}

pub async fn add_photo(
    State(state): State<AppState>,
    Json(request): Json<NewProgressPhoto>,
) -> impl IntoResponse {
    // Image payloads can be large; only the date is logged
    info!("POST /api/progress-photos - date: {}", request.date);

    match state.progress_service.add_photo(request).await {
        Ok(photo) => {
            let response = RecordResponse {
                record: photo,
                success_message: "Progress photo added successfully".to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => error_response("add progress photo", e),
    }
}

pub async fn update_photo(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(request): Json<NewProgressPhoto>,
) -> impl IntoResponse {
    info!("PUT /api/progress-photos/{}", id);

    let photo = RecordMapper::progress_photo(id, request);
    match state.progress_service.update_photo(photo).await {
        Ok(photo) => {
            let response = RecordResponse {
                record: photo,
                success_message: "Progress photo updated".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response("update progress photo", e),
    }
}

pub async fn delete_photo(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> impl IntoResponse {
    info!("DELETE /api/progress-photos/{}", id);

    match state.progress_service.delete_photo(id).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => error_response("delete progress photo", e),
    }
}
