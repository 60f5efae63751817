use serde::{Deserialize, Serialize};
use shared::{
    AppSnapshot, EntityId, JournalEntry, Meal, ProgressPhoto, Reminder, RoutineItem, RoutineKind,
    User,
};

use super::collection::Collection;

/// The complete application state at one instant.
///
/// This is what gets persisted (inside the versioned envelope). Each collection
/// keeps its id counter next to its items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub morning_routine: Collection<RoutineItem>,
    pub night_routine: Collection<RoutineItem>,
    pub weekly_routine: Collection<RoutineItem>,
    pub journal_entries: Collection<JournalEntry>,
    pub progress_photos: Collection<ProgressPhoto>,
    pub meals: Collection<Meal>,
    pub reminders: Collection<Reminder>,
    pub hydration_level: i32,
}

/// Which collection holds a duplicated id
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateId {
    pub collection: &'static str,
    pub id: EntityId,
}

impl StateSnapshot {
    /// An unauthenticated snapshot with every collection empty
    pub fn empty() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            morning_routine: Collection::default(),
            night_routine: Collection::default(),
            weekly_routine: Collection::default(),
            journal_entries: Collection::default(),
            progress_photos: Collection::default(),
            meals: Collection::default(),
            reminders: Collection::default(),
            hydration_level: 0,
        }
    }

    pub fn routine(&self, kind: RoutineKind) -> &Collection<RoutineItem> {
        match kind {
            RoutineKind::Morning => &self.morning_routine,
            RoutineKind::Night => &self.night_routine,
            RoutineKind::Weekly => &self.weekly_routine,
        }
    }

    pub fn routine_mut(&mut self, kind: RoutineKind) -> &mut Collection<RoutineItem> {
        match kind {
            RoutineKind::Morning => &mut self.morning_routine,
            RoutineKind::Night => &mut self.night_routine,
            RoutineKind::Weekly => &mut self.weekly_routine,
        }
    }

    /// Check the one cross-cutting invariant: ids are unique per collection
    pub fn find_duplicate_id(&self) -> Option<DuplicateId> {
        let checks = [
            ("morning_routine", self.morning_routine.duplicate_id()),
            ("night_routine", self.night_routine.duplicate_id()),
            ("weekly_routine", self.weekly_routine.duplicate_id()),
            ("journal_entries", self.journal_entries.duplicate_id()),
            ("progress_photos", self.progress_photos.duplicate_id()),
            ("meals", self.meals.duplicate_id()),
            ("reminders", self.reminders.duplicate_id()),
        ];

        checks
            .into_iter()
            .find_map(|(collection, id)| id.map(|id| DuplicateId { collection, id }))
    }

    /// Move every id counter past the highest id it guards
    pub fn repair_counters(&mut self) {
        self.morning_routine.repair_counter();
        self.night_routine.repair_counter();
        self.weekly_routine.repair_counter();
        self.journal_entries.repair_counter();
        self.progress_photos.repair_counter();
        self.meals.repair_counter();
        self.reminders.repair_counter();
    }

    /// Flat view handed to the view layer
    pub fn to_view(&self) -> AppSnapshot {
        AppSnapshot {
            user: self.user.clone(),
            is_authenticated: self.is_authenticated,
            morning_routine: self.morning_routine.items().to_vec(),
            night_routine: self.night_routine.items().to_vec(),
            weekly_routine: self.weekly_routine.items().to_vec(),
            journal_entries: self.journal_entries.items().to_vec(),
            progress_photos: self.progress_photos.items().to_vec(),
            meals: self.meals.items().to_vec(),
            reminders: self.reminders.items().to_vec(),
            hydration_level: self.hydration_level,
        }
    }
}

impl From<AppSnapshot> for StateSnapshot {
    /// Rebuild counters from the highest id of each collection
    fn from(view: AppSnapshot) -> Self {
        Self {
            user: view.user,
            is_authenticated: view.is_authenticated,
            morning_routine: Collection::from_items(view.morning_routine),
            night_routine: Collection::from_items(view.night_routine),
            weekly_routine: Collection::from_items(view.weekly_routine),
            journal_entries: Collection::from_items(view.journal_entries),
            progress_photos: Collection::from_items(view.progress_photos),
            meals: Collection::from_items(view.meals),
            reminders: Collection::from_items(view.reminders),
            hydration_level: view.hydration_level,
        }
    }
}
