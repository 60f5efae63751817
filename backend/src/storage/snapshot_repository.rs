//! # Snapshot Repository
//!
//! Persists the whole application state as one record under a fixed key.
//!
//! ## Stored format
//!
//! ```json
//! { "version": 1, "payload": { "user": null, "morning_routine": { "items": [...], "next_id": 5 }, ... } }
//! ```
//!
//! A stored value without the envelope is treated as version 0: the flat
//! camelCase state the browser client wrote to local storage. It is
//! migrated on load by rebuilding each collection's id counter. Version 0
//! reminders could be saved without a date; those are dated to the day of
//! the import.

use anyhow::Result;
use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::{
    AppSnapshot, EntityId, JournalEntry, Meal, ProgressPhoto, Reminder, ReminderCategory,
    RoutineItem, User,
};
use std::sync::Arc;

use super::traits::KeyValueStorage;
use crate::domain::models::StateSnapshot;

/// Storage key of the persisted snapshot
pub const STATE_KEY: &str = "skincare-app-state";

/// Envelope version written by this build
pub const CURRENT_VERSION: u64 = 1;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Stored snapshot is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Unsupported snapshot version {0}")]
    UnsupportedVersion(u64),
    #[error("Stored snapshot has duplicate id {id} in {collection}")]
    DuplicateId { collection: &'static str, id: EntityId },
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u64,
    payload: &'a StateSnapshot,
}

#[derive(Deserialize)]
struct Envelope {
    version: u64,
    payload: Value,
}

/// Version 0 reminder; `date` was optional in that layout
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyReminder {
    id: EntityId,
    title: String,
    time: String,
    #[serde(rename = "type")]
    category: ReminderCategory,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    date: Option<NaiveDate>,
}

/// Version 0 state, as the browser client kept it
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyState {
    user: Option<User>,
    is_authenticated: bool,
    morning_routine: Vec<RoutineItem>,
    night_routine: Vec<RoutineItem>,
    weekly_routine: Vec<RoutineItem>,
    journal_entries: Vec<JournalEntry>,
    progress_photos: Vec<ProgressPhoto>,
    meals: Vec<Meal>,
    reminders: Vec<LegacyReminder>,
    hydration_level: i32,
}

impl LegacyState {
    fn into_view(self, today: NaiveDate) -> AppSnapshot {
        let reminders = self
            .reminders
            .into_iter()
            .map(|r| Reminder {
                id: r.id,
                title: r.title,
                time: r.time,
                category: r.category,
                description: r.description,
                completed: r.completed,
                date: r.date.unwrap_or_else(|| {
                    warn!("Legacy reminder {} has no date, dating it {}", r.id, today);
                    today
                }),
            })
            .collect();

        AppSnapshot {
            user: self.user,
            is_authenticated: self.is_authenticated,
            morning_routine: self.morning_routine,
            night_routine: self.night_routine,
            weekly_routine: self.weekly_routine,
            journal_entries: self.journal_entries,
            progress_photos: self.progress_photos,
            meals: self.meals,
            reminders,
            hydration_level: self.hydration_level,
        }
    }
}

/// Serialize a snapshot into the current envelope format
pub fn encode_snapshot(snapshot: &StateSnapshot) -> Result<String, SnapshotError> {
    let envelope = EnvelopeRef {
        version: CURRENT_VERSION,
        payload: snapshot,
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Parse a stored value, migrating older layouts to the current one.
/// `today` dates legacy records that were stored without a date.
pub fn decode_snapshot(raw: &str, today: NaiveDate) -> Result<StateSnapshot, SnapshotError> {
    let value: Value = serde_json::from_str(raw)?;

    let is_envelope = value.get("version").is_some() && value.get("payload").is_some();
    let mut snapshot = if is_envelope {
        let envelope: Envelope = serde_json::from_value(value)?;
        match envelope.version {
            CURRENT_VERSION => serde_json::from_value::<StateSnapshot>(envelope.payload)?,
            other => return Err(SnapshotError::UnsupportedVersion(other)),
        }
    } else {
        debug!("Stored snapshot has no envelope, migrating from version 0");
        let legacy: LegacyState = serde_json::from_value(value)?;
        StateSnapshot::from(legacy.into_view(today))
    };

    if let Some(duplicate) = snapshot.find_duplicate_id() {
        return Err(SnapshotError::DuplicateId {
            collection: duplicate.collection,
            id: duplicate.id,
        });
    }
    snapshot.repair_counters();

    Ok(snapshot)
}

/// Loads and saves the state snapshot through any key-value backend
#[derive(Clone)]
pub struct SnapshotRepository {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
}

impl SnapshotRepository {
    /// Create a repository storing under [`STATE_KEY`]
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            storage,
            key: STATE_KEY.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the persisted snapshot
    /// Returns Ok(None) when nothing has been stored yet
    pub async fn load(&self, today: NaiveDate) -> Result<Option<StateSnapshot>> {
        let Some(raw) = self.storage.get_value(&self.key).await? else {
            info!("No persisted snapshot under '{}'", self.key);
            return Ok(None);
        };

        let snapshot = decode_snapshot(&raw, today)?;
        debug!("Loaded snapshot ({} bytes) from '{}'", raw.len(), self.key);
        Ok(Some(snapshot))
    }

    /// Serialize and store the entire snapshot
    pub async fn save(&self, snapshot: &StateSnapshot) -> Result<()> {
        let raw = encode_snapshot(snapshot)?;
        self.storage.put_value(&self.key, &raw).await?;
        debug!("Saved snapshot ({} bytes) to '{}'", raw.len(), self.key);
        Ok(())
    }
}
