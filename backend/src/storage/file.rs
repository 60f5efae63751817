//! # File Key-Value Store
//!
//! Stores each key as its own JSON document inside the data directory.
//!
//! ```text
//! data/
//! ├── config.yaml
//! └── skincare-app-state.json   ← one file per key
//! ```
//!
//! Writes go to a temp file first and are renamed into place, so a crash
//! mid-write never leaves a truncated document behind.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::traits::KeyValueStorage;

const VALUE_EXTENSION: &str = "json";

/// FileKeyValueStore maps keys to `<key>.json` files in a base directory
#[derive(Clone, Debug)]
pub struct FileKeyValueStore {
    base_directory: PathBuf,
}

impl FileKeyValueStore {
    /// Create a new store rooted at `base_directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Resolve the file backing `key`
    fn value_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.base_directory.join(format!("{}.{}", key, VALUE_EXTENSION)))
    }
}

/// Keys become file names, so only a conservative character set is allowed
fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if valid {
        Ok(())
    } else {
        Err(anyhow!("Invalid storage key '{}'", key))
    }
}

#[async_trait]
impl KeyValueStorage for FileKeyValueStore {
    async fn get_value(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key)?;

        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!("Read {} bytes from {:?}", content.len(), path);
                Ok(Some(content))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn put_value(&self, key: &str, value: &str) -> Result<()> {
        let path = self.value_path(key)?;

        if !self.base_directory.exists() {
            fs::create_dir_all(&self.base_directory)?;
        }

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        debug!("Saved {} bytes to {:?}", value.len(), path);
        Ok(())
    }
}
