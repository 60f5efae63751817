//! Form validation.
//!
//! Runs before any mutator is invoked; a failed check means the state
//! container is never touched.

use chrono::{NaiveTime, Weekday};
use shared::{EntityId, RoutineItem};

use super::models::collection::first_duplicate_id;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingRequiredFields,
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
    #[error("Invalid time '{0}': use a time like 7:30 AM, 19:30 or Sunday, 7:00 PM")]
    InvalidTime(String),
    #[error("Please capture a photo first")]
    MissingImage,
    #[error("Duplicate routine item id {0}")]
    DuplicateId(EntityId),
    #[error("Routine item id {0} is out of range")]
    IdOutOfRange(EntityId),
    #[error("No ids left for new {0}")]
    IdsExhausted(&'static str),
}

/// Reject blank (empty or whitespace-only) text
pub fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::EmptyField(field))
    } else {
        Ok(())
    }
}

/// Check a time label such as "7:30 AM", "19:30" or "Sunday, 7:00 PM"
pub fn validate_time_label(label: &str) -> Result<(), ValidationError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField("time"));
    }

    let invalid = || ValidationError::InvalidTime(label.to_string());

    let clock_part = match trimmed.split_once(',') {
        Some((day, rest)) => {
            day.trim().parse::<Weekday>().map_err(|_| invalid())?;
            rest.trim()
        }
        None => trimmed,
    };

    let upper = clock_part.to_ascii_uppercase();
    NaiveTime::parse_from_str(&upper, "%I:%M %p")
        .or_else(|_| NaiveTime::parse_from_str(&upper, "%H:%M"))
        .map(|_| ())
        .map_err(|_| invalid())
}

/// Validate a full routine list before it replaces a collection.
/// `EntityId::MAX` is reserved so the routine can still grow afterwards.
pub fn validate_routine_items(items: &[RoutineItem]) -> Result<(), ValidationError> {
    if let Some(id) = first_duplicate_id(items) {
        return Err(ValidationError::DuplicateId(id));
    }

    for item in items {
        if item.id == EntityId::MAX {
            return Err(ValidationError::IdOutOfRange(item.id));
        }
        require_text("name", &item.name)?;
        validate_time_label(&item.time)?;
    }

    Ok(())
}
