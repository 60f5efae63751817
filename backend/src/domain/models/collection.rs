//! Ordered, id-keyed record collections.
//!
//! Every collection carries its own monotonic `next_id` counter. Ids are never
//! handed out twice, even after the record holding the highest id is deleted.
//! Once a collection holds `EntityId::MAX` the counter is exhausted (`None`)
//! and further inserts are refused.

use serde::{Deserialize, Serialize};
use shared::{EntityId, JournalEntry, Meal, ProgressPhoto, Reminder, RoutineItem};

/// A record addressable by an integer id
pub trait Record: Clone {
    fn id(&self) -> EntityId;
}

macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(impl Record for $ty {
            fn id(&self) -> EntityId {
                self.id
            }
        })*
    };
}

impl_record!(RoutineItem, JournalEntry, ProgressPhoto, Meal, Reminder);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection<T> {
    items: Vec<T>,
    #[serde(default = "first_id")]
    next_id: Option<EntityId>,
}

fn first_id() -> Option<EntityId> {
    Some(1)
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: first_id(),
        }
    }
}

impl<T: Record> Collection<T> {
    /// Build a collection from existing records; the counter starts after the
    /// highest id present (or at 1 when empty)
    pub fn from_items(items: Vec<T>) -> Self {
        let next_id = Self::after_max(&items);
        Self { items, next_id }
    }

    fn after_max(items: &[T]) -> Option<EntityId> {
        match items.iter().map(Record::id).max() {
            Some(max) => max.checked_add(1),
            None => first_id(),
        }
    }

    /// The later of two counters; an exhausted counter stays exhausted
    fn later(current: Option<EntityId>, candidate: Option<EntityId>) -> Option<EntityId> {
        Some(current?.max(candidate?))
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The id the next inserted record will receive, `None` once exhausted
    pub fn next_id(&self) -> Option<EntityId> {
        self.next_id
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Append a record built from the next id and advance the counter.
    /// Returns `None` without touching the collection when no id is left.
    pub fn insert_with<F>(&mut self, build: F) -> Option<&T>
    where
        F: FnOnce(EntityId) -> T,
    {
        let id = self.next_id?;
        self.next_id = id.checked_add(1);
        self.items.push(build(id));
        self.items.last()
    }

    /// Replace the record with the same id; returns false if none matched
    pub fn replace(&mut self, record: T) -> bool {
        match self.items.iter_mut().find(|item| item.id() == record.id()) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Apply `f` to the record with `id`, returning the updated record
    pub fn modify<F>(&mut self, id: EntityId, f: F) -> Option<&T>
    where
        F: FnOnce(&mut T),
    {
        let item = self.items.iter_mut().find(|item| item.id() == id)?;
        f(item);
        Some(&*item)
    }

    /// Remove the record with `id`; returns false if none matched
    pub fn remove(&mut self, id: EntityId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    /// Replace every record at once. The counter never moves backwards.
    /// A list with a repeated id is refused and reported back.
    pub fn replace_all(&mut self, items: Vec<T>) -> Result<(), EntityId> {
        if let Some(id) = first_duplicate_id(&items) {
            return Err(id);
        }
        self.next_id = Self::later(self.next_id, Self::after_max(&items));
        self.items = items;
        Ok(())
    }

    /// First id that appears more than once, if any
    pub fn duplicate_id(&self) -> Option<EntityId> {
        first_duplicate_id(&self.items)
    }

    /// Bring the counter past the highest id. Needed after deserializing data
    /// written by hand or by an older build.
    pub fn repair_counter(&mut self) {
        self.next_id = Self::later(self.next_id, Self::after_max(&self.items));
    }
}

/// First id that appears more than once in `items`
pub fn first_duplicate_id<T: Record>(items: &[T]) -> Option<EntityId> {
    let mut seen = std::collections::HashSet::new();
    items.iter().map(Record::id).find(|id| !seen.insert(*id))
}
