//! # State Container
//!
//! Single source of truth for all user data. Every read goes through
//! [`SkincareStore::snapshot`]; every change goes through one of the mutators
//! below, each of which persists the entire snapshot before returning.
//!
//! The store is constructed explicitly with its collaborators (snapshot
//! repository and credential verifier) rather than living in a global, so it
//! can be exercised against an in-memory backend.
//!
//! ## Failure handling
//!
//! - Loading failure at startup falls back to the built-in defaults.
//! - Persistence failure after a mutation is logged; the in-memory snapshot
//!   stays authoritative for the rest of the session. Nothing is retried.
//! - Mutators addressing an unknown id change nothing and report it through
//!   their return value only.
//! - Ids stay unique per collection: a routine list with a repeated id is
//!   refused, and adds stop once a collection's id counter is exhausted.

use chrono::NaiveDate;
use log::{debug, error, info, warn};
use shared::{
    AppSnapshot, EntityId, JournalEntry, Meal, NewJournalEntry, NewMeal, NewProgressPhoto,
    NewReminder, ProgressPhoto, Reminder, RoutineItem, RoutineKind, UpdateUserRequest, User,
};
use std::sync::Arc;

use super::auth::CredentialVerifier;
use super::models::{default_snapshot, StateSnapshot};
use super::validation::ValidationError;
use crate::storage::SnapshotRepository;

pub struct SkincareStore {
    repository: SnapshotRepository,
    verifier: Arc<dyn CredentialVerifier>,
    snapshot: StateSnapshot,
}

impl SkincareStore {
    /// Load the persisted snapshot, or fall back to the sample data dated
    /// `today` when nothing usable is stored. Never fails.
    pub async fn open(
        repository: SnapshotRepository,
        verifier: Arc<dyn CredentialVerifier>,
        today: NaiveDate,
    ) -> Self {
        let snapshot = match repository.load(today).await {
            Ok(Some(snapshot)) => {
                info!("Restored persisted snapshot from '{}'", repository.key());
                snapshot
            }
            Ok(None) => {
                info!("Starting from default snapshot");
                default_snapshot(today)
            }
            Err(e) => {
                error!("Error loading state from storage, using defaults: {:#}", e);
                default_snapshot(today)
            }
        };

        Self {
            repository,
            verifier,
            snapshot,
        }
    }

    /// Build a store around an explicit snapshot without reading storage
    pub fn with_snapshot(
        repository: SnapshotRepository,
        verifier: Arc<dyn CredentialVerifier>,
        snapshot: StateSnapshot,
    ) -> Self {
        Self {
            repository,
            verifier,
            snapshot,
        }
    }

    pub fn snapshot(&self) -> &StateSnapshot {
        &self.snapshot
    }

    /// Flat copy of the current state for the view layer
    pub fn view(&self) -> AppSnapshot {
        self.snapshot.to_view()
    }

    /// Serialize and write the whole snapshot; failures are logged only
    async fn persist(&self) {
        match self.repository.save(&self.snapshot).await {
            Ok(()) => debug!("Persisted snapshot"),
            Err(e) => error!("Error saving state to storage: {:#}", e),
        }
    }

    // -----------------------------------------------------------------------
    // Session
    // -----------------------------------------------------------------------

    /// Sign in. Placeholder authentication: any non-empty pair accepted by the
    /// verifier succeeds. A failed attempt leaves the snapshot untouched.
    pub async fn login(&mut self, email: &str, password: &str) -> bool {
        if email.is_empty() || password.is_empty() {
            return false;
        }

        let user = match self.verifier.verify(email, password).await {
            Ok(Some(user)) => user,
            Ok(None) => return false,
            Err(e) => {
                error!("Credential verification failed: {:#}", e);
                return false;
            }
        };

        self.snapshot.user = Some(user);
        self.snapshot.is_authenticated = true;
        self.persist().await;
        true
    }

    pub async fn logout(&mut self) {
        self.snapshot.user = None;
        self.snapshot.is_authenticated = false;
        self.persist().await;
    }

    /// Merge the provided fields into the current user; no-op when signed out
    pub async fn update_user(&mut self, changes: UpdateUserRequest) -> Option<User> {
        if let Some(user) = self.snapshot.user.as_mut() {
            if let Some(name) = changes.name {
                user.name = name;
            }
            if let Some(email) = changes.email {
                user.email = email;
            }
            if let Some(skin_type) = changes.skin_type {
                user.skin_type = skin_type;
            }
            if let Some(concerns) = changes.concerns {
                user.concerns = concerns;
            }
            if let Some(avatar) = changes.avatar {
                user.avatar = Some(avatar);
            }
        } else {
            debug!("update_user ignored: no signed-in user");
        }

        self.persist().await;
        self.snapshot.user.clone()
    }

    // -----------------------------------------------------------------------
    // Routines
    // -----------------------------------------------------------------------

    /// Replace one routine collection wholesale. A list repeating an id is
    /// refused and nothing is written.
    pub async fn update_routine(
        &mut self,
        kind: RoutineKind,
        items: Vec<RoutineItem>,
    ) -> Result<(), ValidationError> {
        if let Err(id) = self.snapshot.routine_mut(kind).replace_all(items) {
            warn!("update_routine: {} routine repeats id {}", kind, id);
            return Err(ValidationError::DuplicateId(id));
        }
        self.persist().await;
        Ok(())
    }

    /// Flip `completed` on a routine item; returns the new flag if found
    pub async fn toggle_routine_item(&mut self, id: EntityId, kind: RoutineKind) -> Option<bool> {
        let completed = self
            .snapshot
            .routine_mut(kind)
            .modify(id, |item| item.completed = !item.completed)
            .map(|item| item.completed);

        if completed.is_none() {
            warn!("toggle_routine_item: no {} item with id {}", kind, id);
        }
        self.persist().await;
        completed
    }

    // -----------------------------------------------------------------------
    // Journal
    // -----------------------------------------------------------------------

    pub async fn add_journal_entry(&mut self, entry: NewJournalEntry) -> Option<JournalEntry> {
        let Some(added) = self
            .snapshot
            .journal_entries
            .insert_with(|id| JournalEntry {
                id,
                date: entry.date,
                content: entry.content,
            })
            .cloned()
        else {
            warn!("add_journal_entry: no ids left for new journal entries");
            return None;
        };
        self.persist().await;
        Some(added)
    }

    pub async fn update_journal_entry(&mut self, entry: JournalEntry) -> bool {
        let found = self.snapshot.journal_entries.replace(entry);
        self.persist().await;
        found
    }

    pub async fn delete_journal_entry(&mut self, id: EntityId) -> bool {
        let found = self.snapshot.journal_entries.remove(id);
        self.persist().await;
        found
    }

    // -----------------------------------------------------------------------
    // Progress photos
    // -----------------------------------------------------------------------

    pub async fn add_progress_photo(&mut self, photo: NewProgressPhoto) -> Option<ProgressPhoto> {
        let Some(added) = self
            .snapshot
            .progress_photos
            .insert_with(|id| ProgressPhoto {
                id,
                date: photo.date,
                image_url: photo.image_url,
                notes: photo.notes,
            })
            .cloned()
        else {
            warn!("add_progress_photo: no ids left for new progress photos");
            return None;
        };
        self.persist().await;
        Some(added)
    }

    pub async fn update_progress_photo(&mut self, photo: ProgressPhoto) -> bool {
        let found = self.snapshot.progress_photos.replace(photo);
        self.persist().await;
        found
    }

    pub async fn delete_progress_photo(&mut self, id: EntityId) -> bool {
        let found = self.snapshot.progress_photos.remove(id);
        self.persist().await;
        found
    }

    // -----------------------------------------------------------------------
    // Meals
    // -----------------------------------------------------------------------

    pub async fn add_meal(&mut self, meal: NewMeal) -> Option<Meal> {
        let Some(added) = self
            .snapshot
            .meals
            .insert_with(|id| Meal {
                id,
                name: meal.name,
                time: meal.time,
                items: meal.items,
                notes: meal.notes,
                date: meal.date,
            })
            .cloned()
        else {
            warn!("add_meal: no ids left for new meals");
            return None;
        };
        self.persist().await;
        Some(added)
    }

    pub async fn update_meal(&mut self, meal: Meal) -> bool {
        let found = self.snapshot.meals.replace(meal);
        self.persist().await;
        found
    }

    pub async fn delete_meal(&mut self, id: EntityId) -> bool {
        let found = self.snapshot.meals.remove(id);
        self.persist().await;
        found
    }

    // -----------------------------------------------------------------------
    // Reminders
    // -----------------------------------------------------------------------

    pub async fn add_reminder(&mut self, reminder: NewReminder) -> Option<Reminder> {
        let Some(added) = self
            .snapshot
            .reminders
            .insert_with(|id| Reminder {
                id,
                title: reminder.title,
                time: reminder.time,
                category: reminder.category,
                description: reminder.description,
                completed: reminder.completed,
                date: reminder.date,
            })
            .cloned()
        else {
            warn!("add_reminder: no ids left for new reminders");
            return None;
        };
        self.persist().await;
        Some(added)
    }

    pub async fn update_reminder(&mut self, reminder: Reminder) -> bool {
        let found = self.snapshot.reminders.replace(reminder);
        self.persist().await;
        found
    }

    pub async fn delete_reminder(&mut self, id: EntityId) -> bool {
        let found = self.snapshot.reminders.remove(id);
        self.persist().await;
        found
    }

    /// Flip `completed` on a reminder; returns the new flag if found
    pub async fn toggle_reminder_complete(&mut self, id: EntityId) -> Option<bool> {
        let completed = self
            .snapshot
            .reminders
            .modify(id, |reminder| reminder.completed = !reminder.completed)
            .map(|reminder| reminder.completed);
        self.persist().await;
        completed
    }

    // -----------------------------------------------------------------------
    // Hydration
    // -----------------------------------------------------------------------

    /// Store the level exactly as given. Range checks belong to the caller.
    pub async fn update_hydration_level(&mut self, level: i32) {
        self.snapshot.hydration_level = level;
        self.persist().await;
    }
}
