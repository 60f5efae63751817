//! Built-in sample data used when nothing has been persisted yet.

use chrono::{Days, NaiveDate};
use shared::{
    JournalEntry, Meal, ProgressPhoto, Reminder, ReminderCategory, RoutineItem,
};

use super::collection::Collection;
use super::snapshot::StateSnapshot;

fn routine_item(id: u64, name: &str, time: &str, description: &str) -> RoutineItem {
    RoutineItem {
        id,
        name: name.to_string(),
        time: time.to_string(),
        completed: false,
        description: Some(description.to_string()),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Default snapshot with sample routines, meals and reminders dated `today`
pub fn default_snapshot(today: NaiveDate) -> StateSnapshot {
    let weeks_ago = |weeks: u64| today.checked_sub_days(Days::new(weeks * 7)).unwrap_or(today);

    let morning_routine = vec![
        routine_item(1, "Gentle Cleanser", "7:30 AM", "Use lukewarm water and gentle circular motions"),
        routine_item(2, "Vitamin C Serum", "7:35 AM", "Apply 3-4 drops to face and neck"),
        routine_item(3, "Moisturizer", "7:40 AM", "Apply evenly to face and neck"),
        routine_item(4, "Sunscreen", "7:45 AM", "SPF 50, reapply every 2 hours if outside"),
    ];

    let night_routine = vec![
        routine_item(1, "Oil Cleanser", "9:30 PM", "Massage for 60 seconds to remove makeup and sunscreen"),
        routine_item(2, "Water Cleanser", "9:35 PM", "Gentle foaming cleanser"),
        routine_item(3, "Exfoliate", "9:40 PM", "Use 2-3 times per week, not daily"),
        routine_item(4, "Night Cream", "9:45 PM", "Apply thicker layer than daytime moisturizer"),
    ];

    let weekly_routine = vec![
        routine_item(1, "Face Mask", "Sunday, 7:00 PM", "Clay mask for oily areas, hydrating mask for dry areas"),
        routine_item(2, "Deep Exfoliation", "Wednesday, 9:30 PM", "Chemical exfoliant, avoid physical scrubs"),
        routine_item(3, "Hair Removal", "Saturday, 10:00 AM", "Followed by soothing aloe vera gel"),
    ];

    let journal_entries = vec![JournalEntry {
        id: 1,
        date: today,
        content: "Started using the new Vitamin C serum today. Skin feels a bit more hydrated but no major changes yet. Will continue to monitor.".to_string(),
    }];

    let progress_photos = vec![
        ProgressPhoto { id: 1, date: today, image_url: None, notes: Some("Today".to_string()) },
        ProgressPhoto { id: 2, date: weeks_ago(1), image_url: None, notes: Some("Last Week".to_string()) },
        ProgressPhoto { id: 3, date: weeks_ago(2), image_url: None, notes: Some("2 Weeks Ago".to_string()) },
    ];

    let meals = vec![
        Meal {
            id: 1,
            name: "Breakfast".to_string(),
            time: "8:30 AM".to_string(),
            items: strings(&["Oatmeal", "Berries", "Greek Yogurt"]),
            notes: None,
            date: today,
        },
        Meal {
            id: 2,
            name: "Lunch".to_string(),
            time: "1:00 PM".to_string(),
            items: strings(&["Salad", "Grilled Chicken", "Avocado"]),
            notes: None,
            date: today,
        },
    ];

    let reminder = |id: u64, title: &str, time: &str, category: ReminderCategory, description: &str| Reminder {
        id,
        title: title.to_string(),
        time: time.to_string(),
        category,
        description: Some(description.to_string()),
        completed: false,
        date: today,
    };

    let reminders = vec![
        reminder(1, "Apply Sunscreen", "12:30 PM", ReminderCategory::Skincare, "SPF 50 on face and exposed areas"),
        reminder(2, "Drink Water", "2:00 PM", ReminderCategory::Hydration, "500ml of water"),
        reminder(3, "Evening Routine", "9:00 PM", ReminderCategory::Skincare, "Complete night routine"),
    ];

    StateSnapshot {
        user: None,
        is_authenticated: false,
        morning_routine: Collection::from_items(morning_routine),
        night_routine: Collection::from_items(night_routine),
        weekly_routine: Collection::from_items(weekly_routine),
        journal_entries: Collection::from_items(journal_entries),
        progress_photos: Collection::from_items(progress_photos),
        meals: Collection::from_items(meals),
        reminders: Collection::from_items(reminders),
        hydration_level: 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_contents() {
        let today = NaiveDate::from_ymd_opt(2025, 4, 3).unwrap();
        let snapshot = default_snapshot(today);

        assert!(!snapshot.is_authenticated);
        assert!(snapshot.user.is_none());
        assert_eq!(snapshot.hydration_level, 3);
        assert_eq!(snapshot.morning_routine.len(), 4);
        assert_eq!(snapshot.night_routine.len(), 4);
        assert_eq!(snapshot.weekly_routine.len(), 3);
        assert_eq!(snapshot.meals.len(), 2);
        assert_eq!(snapshot.reminders.len(), 3);
        assert_eq!(snapshot.find_duplicate_id(), None);
    }

    #[test]
    fn test_default_photos_are_dated_relative_to_today() {
        let today = NaiveDate::from_ymd_opt(2025, 4, 3).unwrap();
        let snapshot = default_snapshot(today);
        let dates: Vec<NaiveDate> = snapshot.progress_photos.items().iter().map(|p| p.date).collect();

        assert_eq!(
            dates,
            vec![
                today,
                NaiveDate::from_ymd_opt(2025, 3, 27).unwrap(),
                NaiveDate::from_ymd_opt(2025, 3, 20).unwrap(),
            ]
        );
        assert!(snapshot.progress_photos.items().iter().all(|p| p.image_url.is_none()));
    }

    #[test]
    fn test_default_counters_follow_sample_ids() {
        let snapshot = default_snapshot(NaiveDate::from_ymd_opt(2025, 4, 3).unwrap());
        assert_eq!(snapshot.morning_routine.next_id(), Some(5));
        assert_eq!(snapshot.weekly_routine.next_id(), Some(4));
        assert_eq!(snapshot.journal_entries.next_id(), Some(2));
        assert_eq!(snapshot.reminders.next_id(), Some(4));
    }
}
