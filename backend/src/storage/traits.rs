//! # Storage Traits
//!
//! The persistence boundary of the state container. Everything the container
//! writes goes through a plain string key-value store, the same contract the
//! browser's local storage offered the web client. Backends can be
//! swapped (SQLite, a directory of JSON files, memory) without touching the
//! domain layer.

use anyhow::Result;
use async_trait::async_trait;

/// Durable string key-value storage
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Retrieve the value stored under `key`, if any
    async fn get_value(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn put_value(&self, key: &str, value: &str) -> Result<()>;
}
