use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Integer identifier, unique within one collection
pub type EntityId = u64;

/// Number of glasses the hydration tracker aims for each day
pub const HYDRATION_TARGET: i32 = 10;

/// The signed-in user's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub email: String,
    pub skin_type: String,
    /// Free-form concern tags such as "Acne"
    pub concerns: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Which of the three routine schedules an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutineKind {
    Morning,
    Night,
    Weekly,
}

impl RoutineKind {
    pub const ALL: [RoutineKind; 3] = [RoutineKind::Morning, RoutineKind::Night, RoutineKind::Weekly];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoutineKind::Morning => "morning",
            RoutineKind::Night => "night",
            RoutineKind::Weekly => "weekly",
        }
    }
}

impl fmt::Display for RoutineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoutineKindError(pub String);

impl fmt::Display for RoutineKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown routine kind '{}': expected morning, night or weekly", self.0)
    }
}

impl std::error::Error for RoutineKindError {}

impl FromStr for RoutineKind {
    type Err = RoutineKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(RoutineKind::Morning),
            "night" => Ok(RoutineKind::Night),
            "weekly" => Ok(RoutineKind::Weekly),
            _ => Err(RoutineKindError(s.to_string())),
        }
    }
}

/// One step of a skincare routine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineItem {
    pub id: EntityId,
    pub name: String,
    /// Display label such as "7:30 AM" or "Sunday, 7:00 PM"
    pub time: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: EntityId,
    pub date: NaiveDate,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPhoto {
    pub id: EntityId,
    pub date: NaiveDate,
    /// Opaque local image data (usually a data URL); `None` until captured
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: EntityId,
    pub name: String,
    pub time: String,
    /// Food items in the order they were entered
    pub items: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderCategory {
    Skincare,
    Hydration,
    Diet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: EntityId,
    pub title: String,
    pub time: String,
    #[serde(rename = "type")]
    pub category: ReminderCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    pub date: NaiveDate,
}

/// Flat view of the whole application state.
///
/// The JSON shape follows what the browser client kept in local storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSnapshot {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub morning_routine: Vec<RoutineItem>,
    pub night_routine: Vec<RoutineItem>,
    pub weekly_routine: Vec<RoutineItem>,
    pub journal_entries: Vec<JournalEntry>,
    pub progress_photos: Vec<ProgressPhoto>,
    pub meals: Vec<Meal>,
    pub reminders: Vec<Reminder>,
    pub hydration_level: i32,
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: Option<User>,
    pub message: String,
}

/// Partial user update; only the provided fields are merged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub skin_type: Option<String>,
    pub concerns: Option<Vec<String>>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

// ---------------------------------------------------------------------------
// Routines
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRoutineRequest {
    pub items: Vec<RoutineItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddRoutineItemRequest {
    pub name: String,
    pub time: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineResponse {
    pub kind: RoutineKind,
    pub items: Vec<RoutineItem>,
    /// Completed items as a rounded percentage of all items (0 when empty)
    pub completion_percent: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    pub id: EntityId,
    pub completed: bool,
}

// ---------------------------------------------------------------------------
// Journal, photos, meals, reminders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewJournalEntry {
    pub date: NaiveDate,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProgressPhoto {
    pub date: NaiveDate,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMeal {
    pub name: String,
    pub time: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReminder {
    pub title: String,
    pub time: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub category: ReminderCategory,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Response wrapper for create/update operations on a single record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordResponse<T> {
    pub record: T,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub id: EntityId,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalListResponse {
    pub entries: Vec<JournalEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressPhotoListResponse {
    pub photos: Vec<ProgressPhoto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealListResponse {
    pub meals: Vec<Meal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderListResponse {
    /// Reminders dated today
    pub today: Vec<Reminder>,
    /// Reminders dated after today
    pub upcoming: Vec<Reminder>,
    pub all: Vec<Reminder>,
}

// ---------------------------------------------------------------------------
// Hydration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateHydrationRequest {
    pub level: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrationResponse {
    pub level: i32,
    pub target: i32,
}

// ---------------------------------------------------------------------------
// Ingredient guide
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    Vitamin,
    Hydration,
    Nutrient,
    Treatment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub benefits: Vec<String>,
    /// Foods or products where the ingredient is found
    pub sources: Vec<String>,
    pub category: IngredientCategory,
    pub is_beneficial: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientListResponse {
    pub beneficial: Vec<Ingredient>,
    pub caution: Vec<Ingredient>,
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingReminder {
    pub id: EntityId,
    pub title: String,
    /// Relative label such as "Today, 12:30 PM"
    pub when: String,
    pub category: ReminderCategory,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub date: NaiveDate,
    pub user_name: Option<String>,
    pub morning_progress: u8,
    pub night_progress: u8,
    pub hydration_level: i32,
    pub hydration_target: i32,
    pub todays_meal_count: usize,
    pub upcoming_reminders: Vec<UpcomingReminder>,
}

/// Log line forwarded from the view layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routine_kind_parse() {
        assert_eq!("morning".parse::<RoutineKind>().unwrap(), RoutineKind::Morning);
        assert_eq!("Night".parse::<RoutineKind>().unwrap(), RoutineKind::Night);
        assert_eq!(" weekly ".parse::<RoutineKind>().unwrap(), RoutineKind::Weekly);
        assert!("evening".parse::<RoutineKind>().is_err());
    }

    #[test]
    fn test_routine_kind_display() {
        for kind in RoutineKind::ALL {
            assert_eq!(kind.to_string().parse::<RoutineKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_reminder_category_serialized_as_type() {
        let reminder = Reminder {
            id: 2,
            title: "Drink Water".to_string(),
            time: "2:00 PM".to_string(),
            category: ReminderCategory::Hydration,
            description: Some("500ml of water".to_string()),
            completed: false,
            date: NaiveDate::from_ymd_opt(2025, 4, 3).unwrap(),
        };

        let json = serde_json::to_value(&reminder).unwrap();
        assert_eq!(json["type"], "hydration");
        assert_eq!(json["date"], "2025-04-03");
        assert!(json.get("category").is_none());
    }

    #[test]
    fn test_reminder_completed_defaults_to_false() {
        let json = r#"{"id":1,"title":"Apply Sunscreen","time":"12:30 PM","type":"skincare","date":"2025-04-03"}"#;
        let reminder: Reminder = serde_json::from_str(json).unwrap();
        assert!(!reminder.completed);
        assert_eq!(reminder.description, None);
    }

    #[test]
    fn test_snapshot_uses_camel_case_keys() {
        let json = r#"{
            "user": {"name":"Test User","email":"a@b.c","skinType":"Combination","concerns":["Acne"]},
            "isAuthenticated": true,
            "morningRoutine": [{"id":1,"name":"Gentle Cleanser","time":"7:30 AM","completed":false}],
            "nightRoutine": [],
            "weeklyRoutine": [],
            "journalEntries": [],
            "progressPhotos": [{"id":1,"date":"2025-04-03","imageUrl":null,"notes":"Today"}],
            "meals": [],
            "reminders": [],
            "hydrationLevel": 3
        }"#;

        let snapshot: AppSnapshot = serde_json::from_str(json).unwrap();
        assert!(snapshot.is_authenticated);
        assert_eq!(snapshot.user.unwrap().skin_type, "Combination");
        assert_eq!(snapshot.morning_routine.len(), 1);
        assert_eq!(snapshot.progress_photos[0].image_url, None);
        assert_eq!(snapshot.hydration_level, 3);
    }
}
