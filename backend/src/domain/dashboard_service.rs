use log::debug;
use shared::{DashboardSummary, UpcomingReminder, HYDRATION_TARGET};
use std::sync::Arc;

use super::clock::Clock;
use super::routine_service::completion_percent;
use super::SharedStore;

/// How many of today's reminders the dashboard shows
pub const DASHBOARD_REMINDER_LIMIT: usize = 3;

/// Read-only summary for the home screen
#[derive(Clone)]
pub struct DashboardService {
    store: SharedStore,
    clock: Arc<dyn Clock>,
}

impl DashboardService {
    pub fn new(store: SharedStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn summary(&self) -> DashboardSummary {
        let today = self.clock.today();
        let store = self.store.lock().await;
        let snapshot = store.snapshot();

        let upcoming_reminders = snapshot
            .reminders
            .items()
            .iter()
            .filter(|r| r.date == today)
            .take(DASHBOARD_REMINDER_LIMIT)
            .map(|r| UpcomingReminder {
                id: r.id,
                title: r.title.clone(),
                when: format!("Today, {}", r.time),
                category: r.category,
                completed: r.completed,
            })
            .collect();

        let todays_meal_count = snapshot.meals.items().iter().filter(|m| m.date == today).count();
        debug!("Dashboard for {}: {} meals today", today, todays_meal_count);

        DashboardSummary {
            date: today,
            user_name: snapshot.user.as_ref().map(|u| u.name.clone()),
            morning_progress: completion_percent(snapshot.morning_routine.items()),
            night_progress: completion_percent(snapshot.night_routine.items()),
            hydration_level: snapshot.hydration_level,
            hydration_target: HYDRATION_TARGET,
            todays_meal_count,
            upcoming_reminders,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::FixedClock;
    use crate::storage::test_utils::{shared_memory_store, test_today};
    use shared::{NewReminder, ReminderCategory, RoutineKind};

    #[tokio::test]
    async fn test_summary_of_default_state() {
        let (_storage, store) = shared_memory_store().await;
        let service = DashboardService::new(store, Arc::new(FixedClock(test_today())));

        let summary = service.summary().await;
        assert_eq!(summary.date, test_today());
        assert_eq!(summary.user_name, None);
        assert_eq!(summary.morning_progress, 0);
        assert_eq!(summary.hydration_level, 3);
        assert_eq!(summary.hydration_target, 10);
        assert_eq!(summary.todays_meal_count, 2);
        assert_eq!(summary.upcoming_reminders.len(), 3);
        assert_eq!(summary.upcoming_reminders[0].when, "Today, 12:30 PM");
    }

    #[tokio::test]
    async fn test_summary_limits_reminders_to_today() {
        let (_storage, store) = shared_memory_store().await;
        {
            let mut guard = store.lock().await;
            guard
                .add_reminder(NewReminder {
                    title: "Tomorrow".to_string(),
                    time: "8:00 AM".to_string(),
                    date: test_today().succ_opt().unwrap(),
                    category: ReminderCategory::Skincare,
                    description: None,
                    completed: false,
                })
                .await;
            guard.delete_reminder(1).await;
            guard.toggle_routine_item(1, RoutineKind::Night).await;
        }
        let service = DashboardService::new(store, Arc::new(FixedClock(test_today())));

        let summary = service.summary().await;
        let ids: Vec<u64> = summary.upcoming_reminders.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(summary.night_progress, 25);
    }

    #[tokio::test]
    async fn test_summary_on_another_day_has_no_meals() {
        let (_storage, store) = shared_memory_store().await;
        let later = FixedClock(test_today().succ_opt().unwrap());
        let service = DashboardService::new(store, Arc::new(later));

        let summary = service.summary().await;
        assert_eq!(summary.todays_meal_count, 0);
        assert!(summary.upcoming_reminders.is_empty());
    }
}
