/// Test utilities with automatic cleanup
///
/// Backs a store with a temporary directory that is removed when the
/// environment goes out of scope, even if the test panics.
use anyhow::Result;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

use super::{FileKeyValueStore, KeyValueStorage, MemoryKeyValueStore, SnapshotRepository};
use crate::domain::auth::MockCredentialVerifier;
use crate::domain::store::SkincareStore;
use crate::domain::SharedStore;

/// Fixed "today" shared by the tests
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 3).expect("valid date")
}

/// Open a store over the given backend with the mock verifier
pub async fn open_store(storage: Arc<dyn KeyValueStorage>) -> SkincareStore {
    SkincareStore::open(
        SnapshotRepository::new(storage),
        Arc::new(MockCredentialVerifier),
        test_today(),
    )
    .await
}

/// Store over a fresh in-memory backend, returning both
pub async fn memory_store() -> (Arc<MemoryKeyValueStore>, SkincareStore) {
    let storage = Arc::new(MemoryKeyValueStore::new());
    let store = open_store(storage.clone()).await;
    (storage, store)
}

/// Shared handle over a fresh in-memory backend, as the services receive it
pub async fn shared_memory_store() -> (Arc<MemoryKeyValueStore>, SharedStore) {
    let (storage, store) = memory_store().await;
    (storage, Arc::new(tokio::sync::Mutex::new(store)))
}

/// RAII test environment over a file-backed store
pub struct TestEnvironment {
    _temp_dir: TempDir,
    pub storage: Arc<FileKeyValueStore>,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let storage = Arc::new(FileKeyValueStore::new(&base_path)?);

        Ok(Self {
            _temp_dir: temp_dir,
            storage,
            base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_path
    }

    /// Open a fresh store over this environment's directory
    pub async fn open_store(&self) -> SkincareStore {
        open_store(self.storage.clone()).await
    }
}
