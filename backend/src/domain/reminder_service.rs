use anyhow::Result;
use log::{info, warn};
use shared::{DeleteResponse, EntityId, NewReminder, Reminder, ReminderListResponse, ToggleResponse};
use std::sync::Arc;

use super::clock::Clock;
use super::error::DomainError;
use super::validation::{validate_time_label, ValidationError};
use super::SharedStore;

/// Service for dated reminders
#[derive(Clone)]
pub struct ReminderService {
    store: SharedStore,
    clock: Arc<dyn Clock>,
}

impl ReminderService {
    pub fn new(store: SharedStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// All reminders, plus the ones dated today and the ones dated later
    pub async fn list_reminders(&self) -> ReminderListResponse {
        let today = self.clock.today();
        let store = self.store.lock().await;
        let all = store.snapshot().reminders.items().to_vec();

        ReminderListResponse {
            today: all.iter().filter(|r| r.date == today).cloned().collect(),
            upcoming: all.iter().filter(|r| r.date > today).cloned().collect(),
            all,
        }
    }

    pub async fn add_reminder(&self, mut reminder: NewReminder) -> Result<Reminder> {
        info!("Adding reminder '{}' on {}", reminder.title, reminder.date);

        if reminder.title.trim().is_empty() || reminder.time.trim().is_empty() {
            warn!("Reminder rejected: missing required fields");
            return Err(DomainError::from(ValidationError::MissingRequiredFields).into());
        }
        validate_time_label(&reminder.time).map_err(DomainError::from)?;
        reminder.title = reminder.title.trim().to_string();
        reminder.time = reminder.time.trim().to_string();

        let mut store = self.store.lock().await;
        let added = store
            .add_reminder(reminder)
            .await
            .ok_or_else(|| DomainError::from(ValidationError::IdsExhausted("reminders")))?;

        info!("Added reminder with ID: {}", added.id);
        Ok(added)
    }

    pub async fn update_reminder(&self, reminder: Reminder) -> Result<Reminder> {
        info!("Updating reminder: {}", reminder.id);

        if reminder.title.trim().is_empty() || reminder.time.trim().is_empty() {
            return Err(DomainError::from(ValidationError::MissingRequiredFields).into());
        }
        validate_time_label(&reminder.time).map_err(DomainError::from)?;

        let mut store = self.store.lock().await;
        if !store.update_reminder(reminder.clone()).await {
            warn!("Reminder not found: {}", reminder.id);
            return Err(DomainError::not_found("Reminder", reminder.id).into());
        }
        Ok(reminder)
    }

    pub async fn delete_reminder(&self, id: EntityId) -> Result<DeleteResponse> {
        info!("Deleting reminder: {}", id);

        let mut store = self.store.lock().await;
        if !store.delete_reminder(id).await {
            warn!("Reminder not found: {}", id);
            return Err(DomainError::not_found("Reminder", id).into());
        }

        Ok(DeleteResponse {
            id,
            success_message: "Reminder deleted".to_string(),
        })
    }

    pub async fn toggle_complete(&self, id: EntityId) -> Result<ToggleResponse> {
        let mut store = self.store.lock().await;
        let completed = store
            .toggle_reminder_complete(id)
            .await
            .ok_or_else(|| DomainError::not_found("Reminder", id))?;

        info!("Reminder {} completed={}", id, completed);
        Ok(ToggleResponse { id, completed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::FixedClock;
    use crate::storage::test_utils::{shared_memory_store, test_today};
    use shared::ReminderCategory;

    fn new_reminder(title: &str, time: &str, days_ahead: u64) -> NewReminder {
        NewReminder {
            title: title.to_string(),
            time: time.to_string(),
            date: test_today() + chrono::Days::new(days_ahead),
            category: ReminderCategory::Diet,
            description: None,
            completed: false,
        }
    }

    async fn service() -> ReminderService {
        let (_storage, store) = shared_memory_store().await;
        ReminderService::new(store, Arc::new(FixedClock(test_today())))
    }

    #[tokio::test]
    async fn test_list_splits_today_and_upcoming() {
        let service = service().await;
        let later = service.add_reminder(new_reminder("Buy spinach", "10:00", 2)).await.unwrap();

        let mut past = new_reminder("Old", "9:00 AM", 0);
        past.date = test_today().pred_opt().unwrap();
        service.add_reminder(past).await.unwrap();

        let list = service.list_reminders().await;
        assert_eq!(list.today.len(), 3);
        assert_eq!(list.upcoming, vec![later]);
        assert_eq!(list.all.len(), 5);
    }

    #[tokio::test]
    async fn test_missing_fields_message() {
        let service = service().await;

        let err = service.add_reminder(new_reminder("", "9:00 AM", 0)).await.unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all required fields");

        let err = service.add_reminder(new_reminder("Tea", " ", 0)).await.unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all required fields");
        assert_eq!(service.list_reminders().await.all.len(), 3);
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_flag() {
        let service = service().await;

        assert!(service.toggle_complete(2).await.unwrap().completed);
        assert!(!service.toggle_complete(2).await.unwrap().completed);
        assert!(service.toggle_complete(40).await.is_err());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let service = service().await;
        let mut reminder = service.list_reminders().await.all[0].clone();
        reminder.time = "1:15 PM".to_string();

        service.update_reminder(reminder.clone()).await.unwrap();
        assert_eq!(service.list_reminders().await.all[0], reminder);

        service.delete_reminder(reminder.id).await.unwrap();
        assert!(service.delete_reminder(reminder.id).await.is_err());
    }
}
