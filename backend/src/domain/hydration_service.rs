use anyhow::Result;
use log::info;
use shared::{HydrationResponse, HYDRATION_TARGET};

use super::SharedStore;

/// Service for the daily water tracker.
///
/// `set_level` stores whatever it is given. The step operations clamp the
/// result to `0..=HYDRATION_TARGET` before it reaches the store.
#[derive(Clone)]
pub struct HydrationService {
    store: SharedStore,
}

impl HydrationService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn get_level(&self) -> HydrationResponse {
        let store = self.store.lock().await;
        Self::response(store.snapshot().hydration_level)
    }

    pub async fn set_level(&self, level: i32) -> Result<HydrationResponse> {
        info!("Setting hydration level to {}", level);
        let mut store = self.store.lock().await;
        store.update_hydration_level(level).await;
        Ok(Self::response(level))
    }

    pub async fn increment(&self) -> Result<HydrationResponse> {
        self.step(1).await
    }

    pub async fn decrement(&self) -> Result<HydrationResponse> {
        self.step(-1).await
    }

    async fn step(&self, delta: i32) -> Result<HydrationResponse> {
        let mut store = self.store.lock().await;
        let current = store.snapshot().hydration_level;
        let level = current.saturating_add(delta).clamp(0, HYDRATION_TARGET);

        info!("Hydration {} -> {}", current, level);
        store.update_hydration_level(level).await;
        Ok(Self::response(level))
    }

    fn response(level: i32) -> HydrationResponse {
        HydrationResponse {
            level,
            target: HYDRATION_TARGET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::shared_memory_store;

    #[tokio::test]
    async fn test_increment_from_default() {
        let (_storage, store) = shared_memory_store().await;
        let service = HydrationService::new(store);

        assert_eq!(service.get_level().await.level, 3);
        assert_eq!(service.increment().await.unwrap().level, 4);
    }

    #[tokio::test]
    async fn test_increment_clamps_at_target() {
        let (_storage, store) = shared_memory_store().await;
        let service = HydrationService::new(store);

        for _ in 0..8 {
            service.increment().await.unwrap();
        }
        let response = service.get_level().await;
        assert_eq!(response.level, 10);
        assert_eq!(response.target, 10);
    }

    #[tokio::test]
    async fn test_decrement_clamps_at_zero() {
        let (_storage, store) = shared_memory_store().await;
        let service = HydrationService::new(store);

        for _ in 0..5 {
            service.decrement().await.unwrap();
        }
        assert_eq!(service.get_level().await.level, 0);
    }

    #[tokio::test]
    async fn test_set_level_is_not_clamped() {
        let (_storage, store) = shared_memory_store().await;
        let service = HydrationService::new(store);

        assert_eq!(service.set_level(11).await.unwrap().level, 11);
        assert_eq!(service.get_level().await.level, 11);

        // Stepping from outside the range pulls the value back in
        assert_eq!(service.increment().await.unwrap().level, 10);
    }
}
