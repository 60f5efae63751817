//! Routine checklists: reading, replacing, extending and ticking off items.

use anyhow::Result;
use log::{info, warn};
use shared::{
    AddRoutineItemRequest, EntityId, RoutineItem, RoutineKind, RoutineResponse, ToggleResponse,
};

use super::error::DomainError;
use super::validation::{
    require_text, validate_routine_items, validate_time_label, ValidationError,
};
use super::SharedStore;

/// Completed items as a rounded percentage; an empty routine counts as 0%
pub fn completion_percent(items: &[RoutineItem]) -> u8 {
    if items.is_empty() {
        return 0;
    }
    let completed = items.iter().filter(|item| item.completed).count();
    ((completed * 100 + items.len() / 2) / items.len()) as u8
}

#[derive(Clone)]
pub struct RoutineService {
    store: SharedStore,
}

impl RoutineService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn get_routine(&self, kind: RoutineKind) -> RoutineResponse {
        let store = self.store.lock().await;
        Self::response(kind, store.snapshot().routine(kind).items())
    }

    /// Replace a routine wholesale after validating every item
    pub async fn update_routine(
        &self,
        kind: RoutineKind,
        items: Vec<RoutineItem>,
    ) -> Result<RoutineResponse> {
        info!("Replacing {} routine with {} items", kind, items.len());
        validate_routine_items(&items).map_err(DomainError::from)?;

        let mut store = self.store.lock().await;
        store.update_routine(kind, items).await.map_err(DomainError::from)?;
        Ok(Self::response(kind, store.snapshot().routine(kind).items()))
    }

    /// Append a new step. The whole routine is written back with the new item
    /// at the end, numbered from the routine's id counter. Fails once that
    /// counter is exhausted.
    pub async fn add_routine_item(
        &self,
        kind: RoutineKind,
        request: AddRoutineItemRequest,
    ) -> Result<RoutineItem> {
        info!("Adding '{}' to {} routine", request.name, kind);
        require_text("name", &request.name).map_err(DomainError::from)?;
        validate_time_label(&request.time).map_err(DomainError::from)?;

        let mut store = self.store.lock().await;
        let routine = store.snapshot().routine(kind);
        let id = routine.next_id().ok_or_else(|| {
            warn!("No ids left in {} routine", kind);
            DomainError::from(ValidationError::IdsExhausted("routine items"))
        })?;
        let item = RoutineItem {
            id,
            name: request.name.trim().to_string(),
            time: request.time.trim().to_string(),
            completed: false,
            description: request
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        };

        let mut items = routine.items().to_vec();
        items.push(item.clone());
        store.update_routine(kind, items).await.map_err(DomainError::from)?;

        info!("Added {} routine item {} with ID: {}", kind, item.name, item.id);
        Ok(item)
    }

    pub async fn toggle_routine_item(&self, kind: RoutineKind, id: EntityId) -> Result<ToggleResponse> {
        let mut store = self.store.lock().await;
        match store.toggle_routine_item(id, kind).await {
            Some(completed) => {
                info!("Toggled {} routine item {} to completed={}", kind, id, completed);
                Ok(ToggleResponse { id, completed })
            }
            None => {
                warn!("Routine item not found: {} {}", kind, id);
                Err(DomainError::not_found("Routine item", id).into())
            }
        }
    }

    fn response(kind: RoutineKind, items: &[RoutineItem]) -> RoutineResponse {
        RoutineResponse {
            kind,
            items: items.to_vec(),
            completion_percent: completion_percent(items),
        }
    }
}
