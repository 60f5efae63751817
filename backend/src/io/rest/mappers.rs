//! Build full records from request bodies plus the id taken from the path.

use shared::{
    EntityId, JournalEntry, Meal, NewJournalEntry, NewMeal, NewProgressPhoto, NewReminder,
    ProgressPhoto, Reminder,
};

pub struct RecordMapper;

impl RecordMapper {
    pub fn journal_entry(id: EntityId, body: NewJournalEntry) -> JournalEntry {
        JournalEntry {
            id,
            date: body.date,
            content: body.content,
        }
    }

    pub fn progress_photo(id: EntityId, body: NewProgressPhoto) -> ProgressPhoto {
        ProgressPhoto {
            id,
            date: body.date,
            image_url: body.image_url,
            notes: body.notes,
        }
    }

    pub fn meal(id: EntityId, body: NewMeal) -> Meal {
        Meal {
            id,
            name: body.name,
            time: body.time,
            items: body.items,
            notes: body.notes,
            date: body.date,
        }
    }

    pub fn reminder(id: EntityId, body: NewReminder) -> Reminder {
        Reminder {
            id,
            title: body.title,
            time: body.time,
            category: body.category,
            description: body.description,
            completed: body.completed,
            date: body.date,
        }
    }
}
