use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use log::info;
use serde::Deserialize;

use crate::domain::ingredients::search_ingredients;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct IngredientQuery {
    #[serde(default)]
    pub q: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_ingredients))
}

/// Search the ingredient guide; no query lists everything
pub async fn list_ingredients(Query(query): Query<IngredientQuery>) -> impl IntoResponse {
    info!("GET /api/ingredients - q: '{}'", query.q);
    (StatusCode::OK, Json(search_ingredients(&query.q))).into_response()
}
