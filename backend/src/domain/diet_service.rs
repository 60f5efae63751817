//! Meal log.
//!
//! Meals are kept in the order they were logged. Listing by day is a plain
//! filter on the stored date, so two meals on the same day come back in the
//! order they were added.

use anyhow::Result;
use chrono::NaiveDate;
use log::{info, warn};
use shared::{DeleteResponse, EntityId, Meal, MealListResponse, NewMeal};
use std::sync::Arc;

use super::clock::Clock;
use super::error::DomainError;
use super::validation::{require_text, validate_time_label, ValidationError};
use super::SharedStore;

#[derive(Clone)]
pub struct DietService {
    store: SharedStore,
    clock: Arc<dyn Clock>,
}

impl DietService {
    pub fn new(store: SharedStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn list_meals(&self, date: Option<NaiveDate>) -> MealListResponse {
        let store = self.store.lock().await;
        let meals = store
            .snapshot()
            .meals
            .items()
            .iter()
            .filter(|meal| date.map_or(true, |d| meal.date == d))
            .cloned()
            .collect();

        MealListResponse { meals }
    }

    pub async fn todays_meals(&self) -> MealListResponse {
        self.list_meals(Some(self.clock.today())).await
    }

    pub async fn add_meal(&self, meal: NewMeal) -> Result<Meal> {
        info!("Adding meal '{}' on {}", meal.name, meal.date);
        let meal = Self::validate(meal).map_err(DomainError::from)?;

        let mut store = self.store.lock().await;
        let added = store
            .add_meal(meal)
            .await
            .ok_or_else(|| DomainError::from(ValidationError::IdsExhausted("meals")))?;

        info!("Added meal with ID: {}", added.id);
        Ok(added)
    }

    pub async fn update_meal(&self, meal: Meal) -> Result<Meal> {
        info!("Updating meal: {}", meal.id);
        require_text("name", &meal.name).map_err(DomainError::from)?;
        validate_time_label(&meal.time).map_err(DomainError::from)?;

        let mut store = self.store.lock().await;
        if !store.update_meal(meal.clone()).await {
            warn!("Meal not found: {}", meal.id);
            return Err(DomainError::not_found("Meal", meal.id).into());
        }
        Ok(meal)
    }

    pub async fn delete_meal(&self, id: EntityId) -> Result<DeleteResponse> {
        info!("Deleting meal: {}", id);

        let mut store = self.store.lock().await;
        if !store.delete_meal(id).await {
            warn!("Meal not found: {}", id);
            return Err(DomainError::not_found("Meal", id).into());
        }

        Ok(DeleteResponse {
            id,
            success_message: "Meal deleted".to_string(),
        })
    }

    /// Trim the name and drop blank food items
    fn validate(mut meal: NewMeal) -> Result<NewMeal, ValidationError> {
        require_text("name", &meal.name)?;
        validate_time_label(&meal.time)?;

        meal.name = meal.name.trim().to_string();
        meal.time = meal.time.trim().to_string();
        meal.items = meal
            .items
            .into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect();
        Ok(meal)
    }
}
