use anyhow::Result;
use chrono::NaiveDate;
use log::{info, warn};
use shared::{DeleteResponse, EntityId, JournalEntry, JournalListResponse, NewJournalEntry};

use super::error::DomainError;
use super::validation::{require_text, ValidationError};
use super::SharedStore;

/// Service for the skin journal
#[derive(Clone)]
pub struct JournalService {
    store: SharedStore,
}

impl JournalService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// List entries in insertion order, optionally only those written on `date`
    pub async fn list_entries(&self, date: Option<NaiveDate>) -> JournalListResponse {
        let store = self.store.lock().await;
        let entries = store
            .snapshot()
            .journal_entries
            .items()
            .iter()
            .filter(|entry| date.map_or(true, |d| entry.date == d))
            .cloned()
            .collect();

        JournalListResponse { entries }
    }

    pub async fn add_entry(&self, entry: NewJournalEntry) -> Result<JournalEntry> {
        info!("Adding journal entry for {}", entry.date);
        require_text("content", &entry.content).map_err(DomainError::from)?;

        let mut store = self.store.lock().await;
        let added = store
            .add_journal_entry(entry)
            .await
            .ok_or_else(|| DomainError::from(ValidationError::IdsExhausted("journal entries")))?;

        info!("Added journal entry with ID: {}", added.id);
        Ok(added)
    }

    pub async fn update_entry(&self, entry: JournalEntry) -> Result<JournalEntry> {
        info!("Updating journal entry: {}", entry.id);
        require_text("content", &entry.content).map_err(DomainError::from)?;

        let mut store = self.store.lock().await;
        if !store.update_journal_entry(entry.clone()).await {
            warn!("Journal entry not found: {}", entry.id);
            return Err(DomainError::not_found("Journal entry", entry.id).into());
        }
        Ok(entry)
    }

    pub async fn delete_entry(&self, id: EntityId) -> Result<DeleteResponse> {
        info!("Deleting journal entry: {}", id);

        let mut store = self.store.lock().await;
        if !store.delete_journal_entry(id).await {
            warn!("Journal entry not found: {}", id);
            return Err(DomainError::not_found("Journal entry", id).into());
        }

        Ok(DeleteResponse {
            id,
            success_message: "Journal entry deleted".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::{shared_memory_store, test_today};

    #[tokio::test]
    async fn test_add_and_filter_by_date() {
        let (_storage, store) = shared_memory_store().await;
        let service = JournalService::new(store);
        let tomorrow = test_today().succ_opt().unwrap();

        let added = service
            .add_entry(NewJournalEntry {
                date: tomorrow,
                content: "Less redness around the nose".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(added.id, 2);

        let all = service.list_entries(None).await;
        assert_eq!(all.entries.len(), 2);

        let only_tomorrow = service.list_entries(Some(tomorrow)).await;
        assert_eq!(only_tomorrow.entries, vec![added]);
    }

    #[tokio::test]
    async fn test_blank_content_never_reaches_store() {
        let (storage, store) = shared_memory_store().await;
        let service = JournalService::new(store);

        let result = service
            .add_entry(NewJournalEntry {
                date: test_today(),
                content: " \n ".to_string(),
            })
            .await;

        assert!(result.is_err());
        assert_eq!(storage.write_count(), 0);
        assert_eq!(service.list_entries(None).await.entries.len(), 1);
    }

    #[tokio::test]
    async fn test_update_entry() {
        let (_storage, store) = shared_memory_store().await;
        let service = JournalService::new(store);

        let mut entry = service.list_entries(None).await.entries[0].clone();
        entry.content = "Rewritten".to_string();
        service.update_entry(entry.clone()).await.unwrap();

        assert_eq!(service.list_entries(None).await.entries, vec![entry]);
    }

    #[tokio::test]
    async fn test_delete_missing_entry_is_not_found() {
        let (_storage, store) = shared_memory_store().await;
        let service = JournalService::new(store);

        let err = service.delete_entry(999).await.unwrap_err();
        assert!(err.downcast_ref::<DomainError>().is_some());
        assert_eq!(service.list_entries(None).await.entries.len(), 1);

        let response = service.delete_entry(1).await.unwrap();
        assert_eq!(response.id, 1);
        assert!(service.list_entries(None).await.entries.is_empty());
    }
}
