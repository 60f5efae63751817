//! # Storage Module
//!
//! Handles all data persistence for the skincare tracker.
//!
//! The state container never talks to a database directly. It hands a whole
//! snapshot to the [`SnapshotRepository`], which wraps it in a versioned
//! envelope and writes it through a [`KeyValueStorage`] backend:
//!
//! - **SQLite**: one `key_values` table via SQLx (default)
//! - **File**: one JSON document per key in the data directory
//! - **Memory**: substitute backend for tests, with failure injection

pub mod file;
pub mod memory;
pub mod snapshot_repository;
pub mod sqlite;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::config::{AppConfig, StorageBackend};

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;
pub use snapshot_repository::{SnapshotError, SnapshotRepository, STATE_KEY};
pub use sqlite::SqliteKeyValueStore;
pub use traits::KeyValueStorage;

/// Open the key-value backend selected in the configuration
pub async fn open_storage(config: &AppConfig) -> Result<Arc<dyn KeyValueStorage>> {
    std::fs::create_dir_all(&config.data_directory)?;

    let storage: Arc<dyn KeyValueStorage> = match config.storage_backend {
        StorageBackend::Sqlite => Arc::new(SqliteKeyValueStore::open_in(&config.data_directory).await?),
        StorageBackend::File => Arc::new(FileKeyValueStore::new(&config.data_directory)?),
    };

    info!(
        "Using {:?} storage in {}",
        config.storage_backend,
        config.data_directory.display()
    );
    Ok(storage)
}
