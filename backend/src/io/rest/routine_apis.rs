//! # REST API for Routines
//!
//! `:kind` is one of `morning`, `night` or `weekly`; anything else is a 404.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use log::{info, warn};
use shared::{AddRoutineItemRequest, EntityId, RoutineKind, UpdateRoutineRequest};

use super::error_response;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:kind", get(get_routine).put(update_routine))
        .route("/:kind/items", post(add_routine_item))
        .route("/:kind/items/:id/toggle", post(toggle_routine_item))
}

fn parse_kind(kind: &str) -> Result<RoutineKind, Response> {
    kind.parse::<RoutineKind>().map_err(|e| {
        warn!("{}", e);
        (StatusCode::NOT_FOUND, e.to_string()).into_response()
    })
}

pub async fn get_routine(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/routines/{}", kind);

    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };

    let routine = state.routine_service.get_routine(kind).await;
    (StatusCode::OK, Json(routine)).into_response()
}

/// Replace the whole routine
pub async fn update_routine(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(request): Json<UpdateRoutineRequest>,
) -> impl IntoResponse {
    info!("PUT /api/routines/{} - {} items", kind, request.items.len());

    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };

    match state.routine_service.update_routine(kind, request.items).await {
        Ok(routine) => (StatusCode::OK, Json(routine)).into_response(),
        Err(e) => error_response("update routine", e),
    }
}

pub async fn add_routine_item(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(request): Json<AddRoutineItemRequest>,
) -> impl IntoResponse {
    info!("POST /api/routines/{}/items - request: {:?}", kind, request);

    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };

    match state.routine_service.add_routine_item(kind, request).await {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(e) => error_response("add routine item", e),
    }
}

pub async fn toggle_routine_item(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, EntityId)>,
) -> impl IntoResponse {
    info!("POST /api/routines/{}/items/{}/toggle", kind, id);

    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };

    match state.routine_service.toggle_routine_item(kind, id).await {
        Ok(toggled) => (StatusCode::OK, Json(toggled)).into_response(),
        Err(e) => error_response("toggle routine item", e),
    }
}
