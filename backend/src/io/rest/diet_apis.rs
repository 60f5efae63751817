//! # REST API for the Meal Log
//!
//! `GET /api/meals` accepts `?date=YYYY-MM-DD` or `?today=true`.

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
use shared::{EntityId, NewMeal, RecordResponse};

use super::error_response;
use super::mappers::RecordMapper;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct MealQuery {
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub today: bool,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_meals).post(add_meal))
        .route("/:id", put(update_meal).delete(delete_meal))
}

pub async fn list_meals(
    State(state): State<AppState>,
    Query(query): Query<MealQuery>,
) -> impl IntoResponse {
    info!("GET /api/meals - query: {:?}", query);

    let meals = if query.today {
        state.diet_service.todays_meals().await
    } else {
        state.diet_service.list_meals(query.date).await
    };
    (StatusCode::OK, Json(meals)).into_response()
}

pub async fn add_meal(
    State(state): State<AppState>,
    Json(request): Json<NewMeal>,
) -> impl IntoResponse {
    info!("POST /api/meals - request: {:?}", request);

    match state.diet_service.add_meal(request).await {
        Ok(meal) => {
            let response = RecordResponse {
                record: meal,
                success_message: "Meal added".to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => error_response("add meal", e),
    }
}

pub async fn update_meal(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(request): Json<NewMeal>,
) -> impl IntoResponse {
    info!("PUT /api/meals/{} - request: {:?}", id, request);

    let meal = RecordMapper::meal(id, request);
    match state.diet_service.update_meal(meal).await {
        Ok(meal) => {
            let response = RecordResponse {
                record: meal,
                success_message: "Meal updated".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response("update meal", e),
    }
}

pub async fn delete_meal(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> impl IntoResponse {
    info!("DELETE /api/meals/{}", id);

    match state.diet_service.delete_meal(id).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => error_response("delete meal", e),
    }
}

#[cfg(test)]
mod tests {
    use crate::io::rest::test_support::{send, test_app};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_meals_by_date_and_today() {
        let (app, _state) = test_app().await;

        for name in ["Dinner", "Tea"] {
            let (status, _) = send(
                &app,
                "POST",
                "/api/meals",
                Some(json!({"name": name, "time": "6:00 PM", "date": "2025-04-05", "items": ["Rice"]})),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (_, body) = send(&app, "GET", "/api/meals?date=2025-04-05", None).await;
        let names: Vec<&str> = body["meals"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Dinner", "Tea"]);

        let (_, body) = send(&app, "GET", "/api/meals?today=true", None).await;
        assert_eq!(body["meals"].as_array().unwrap().len(), 2);

        let (_, body) = send(&app, "GET", "/api/meals", None).await;
        assert_eq!(body["meals"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_update_and_delete_meal() {
        let (app, _state) = test_app().await;

        let (status, body) = send(
            &app,
            "PUT",
            "/api/meals/1",
            Some(json!({"name": "Brunch", "time": "11:00 AM", "date": "2025-04-03", "items": []})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["record"]["name"], "Brunch");

        let (status, _) = send(
            &app,
            "PUT",
            "/api/meals/9",
            Some(json!({"name": "Brunch", "time": "11:00 AM", "date": "2025-04-03"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(&app, "DELETE", "/api/meals/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 1);
    }
}
