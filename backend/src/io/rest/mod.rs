//! # REST API Interface Layer
//!
//! HTTP endpoints for the skincare tracker, all nested under `/api`.
//!
//! Handlers are thin: they translate JSON into service calls and service
//! errors into status codes.
//!
//! | Error                          | Status |
//! |--------------------------------|--------|
//! | `DomainError::Validation`      | 400    |
//! | `DomainError::NotAuthenticated`| 401    |
//! | `DomainError::NotFound`        | 404    |
//! | anything else                  | 500    |

pub mod dashboard_apis;
pub mod diet_apis;
pub mod hydration_apis;
pub mod ingredient_apis;
pub mod journal_apis;
pub mod logging_apis;
pub mod mappers;
pub mod progress_apis;
pub mod reminder_apis;
pub mod routine_apis;
pub mod session_apis;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use log::{error, warn};

use crate::domain::DomainError;
use crate::AppState;

/// All API routes, relative to `/api`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(dashboard_apis::router())
        .merge(session_apis::router())
        .nest("/routines", routine_apis::router())
        .nest("/journal", journal_apis::router())
        .nest("/progress-photos", progress_apis::router())
        .nest("/meals", diet_apis::router())
        .nest("/reminders", reminder_apis::router())
        .nest("/hydration", hydration_apis::router())
        .nest("/ingredients", ingredient_apis::router())
        .route("/logs", post(logging_apis::log_message))
}

/// Map a service error to a status code and plain-text message
pub fn error_response(action: &str, e: anyhow::Error) -> Response {
    let status = match e.downcast_ref::<DomainError>() {
        Some(DomainError::Validation(_)) => StatusCode::BAD_REQUEST,
        Some(DomainError::NotAuthenticated) => StatusCode::UNAUTHORIZED,
        Some(DomainError::NotFound { .. }) => StatusCode::NOT_FOUND,
        None => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!("Failed to {}: {:#}", action, e);
    } else {
        warn!("Failed to {}: {}", action, e);
    }

    (status, e.to_string()).into_response()
}
