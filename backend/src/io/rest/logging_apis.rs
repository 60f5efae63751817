//! Client log forwarding.
//!
//! The browser client posts its own log lines here so they end up in the
//! server log under the `skincare_client` target.

use axum::{http::StatusCode, response::IntoResponse, Json};
use log::Level;
use serde::{Deserialize, Serialize};
use shared::LogEntry;

const CLIENT_TARGET: &str = "skincare_client";

#[derive(Debug, Serialize, Deserialize)]
pub struct LogResponse {
    pub success: bool,
    /// Level the line was recorded at
    pub level: String,
}

/// Unrecognised level names are recorded at info
fn client_level(name: &str) -> Level {
    name.trim().parse().unwrap_or(Level::Info)
}

pub async fn log_message(Json(entry): Json<LogEntry>) -> impl IntoResponse {
    let level = client_level(&entry.level);
    match entry.component.as_deref() {
        Some(component) => log::log!(target: CLIENT_TARGET, level, "{}: {}", component, entry.message),
        None => log::log!(target: CLIENT_TARGET, level, "{}", entry.message),
    }

    let response = LogResponse {
        success: true,
        level: level.to_string(),
    };
    (StatusCode::OK, Json(response))
}
