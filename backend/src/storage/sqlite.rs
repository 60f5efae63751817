//! # SQLite Key-Value Store
//!
//! Keeps every key in a single `key_values` table. This is the default backend
//! for the server; the database file lives in the configured data directory.

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use sqlx::{migrate::MigrateDatabase, Row, Sqlite, SqlitePool};
use std::path::Path;
use std::sync::Arc;

use super::traits::KeyValueStorage;

/// File name of the database inside the data directory
pub const DATABASE_FILE: &str = "skincare.db";

/// SqliteKeyValueStore manages database operations
#[derive(Clone)]
pub struct SqliteKeyValueStore {
    pool: Arc<SqlitePool>,
}

impl SqliteKeyValueStore {
    /// Connect to the database at `url`, creating it if it doesn't exist
    pub async fn new(url: &str) -> Result<Self> {
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?
        }

        let pool = SqlitePool::connect(url).await?;
        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Open (or create) the database file inside `data_directory`
    pub async fn open_in<P: AsRef<Path>>(data_directory: P) -> Result<Self> {
        let db_path = data_directory.as_ref().join(DATABASE_FILE);
        let url = format!("sqlite://{}", db_path.display());
        info!("Opening SQLite key-value store at {}", db_path.display());
        Self::new(&url).await
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS key_values (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStorage for SqliteKeyValueStore {
    async fn get_value(&self, key: &str) -> Result<Option<String>> {
        let row = sqlx::query("SELECT value FROM key_values WHERE key = ?")
            .bind(key)
            .fetch_optional(&*self.pool)
            .await?;

        Ok(row.map(|r| r.get("value")))
    }

    async fn put_value(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query("INSERT OR REPLACE INTO key_values (key, value) VALUES (?, ?)")
            .bind(key)
            .bind(value)
            .execute(&*self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // Each test gets its own shared-cache in-memory database
    async fn setup_test() -> SqliteKeyValueStore {
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);
        SqliteKeyValueStore::new(&db_url)
            .await
            .expect("Failed to create test database")
    }

    #[tokio::test]
    async fn test_put_and_get_value() {
        let db = setup_test().await;

        db.put_value("skincare-app-state", "{\"version\":1}")
            .await
            .expect("Failed to put value");

        let result = db.get_value("skincare-app-state").await.expect("Failed to get value");
        assert_eq!(result.as_deref(), Some("{\"version\":1}"));
    }

    #[tokio::test]
    async fn test_get_nonexistent_value() {
        let db = setup_test().await;
        let result = db.get_value("nonexistent_key").await.expect("Query failed");
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_put_replaces_value() {
        let db = setup_test().await;

        db.put_value("same_key", "initial_value").await.expect("Failed to put initial value");
        db.put_value("same_key", "updated_value").await.expect("Failed to update value");

        let result = db.get_value("same_key").await.expect("Failed to get value");
        assert_eq!(result.as_deref(), Some("updated_value"));
    }

    #[tokio::test]
    async fn test_open_in_data_directory_persists_across_connections() {
        let temp_dir = TempDir::new().unwrap();

        {
            let db = SqliteKeyValueStore::open_in(temp_dir.path()).await.unwrap();
            db.put_value("persisted", "yes").await.unwrap();
        }

        let reopened = SqliteKeyValueStore::open_in(temp_dir.path()).await.unwrap();
        assert_eq!(reopened.get_value("persisted").await.unwrap().as_deref(), Some("yes"));
        assert!(temp_dir.path().join(DATABASE_FILE).exists());
    }
}
