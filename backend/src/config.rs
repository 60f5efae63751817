//! # Application Configuration
//!
//! Settings are read from a YAML file and then overridden by environment
//! variables.
//!
//! ## Lookup order
//!
//! 1. `SKINCARE_CONFIG` names the config file explicitly
//! 2. otherwise `config.yaml` inside the data directory
//! 3. a missing file means all defaults
//!
//! `SKINCARE_DATA_DIR` and `SKINCARE_BIND` override the values from the file.
//!
//! ## YAML Format
//!
//! ```yaml
//! bind_address: "127.0.0.1:3000"
//! allowed_origin: "http://localhost:8080"
//! data_directory: "/home/jane/Documents/Skincare Tracker"
//! storage_backend: sqlite   # or: file
//! date_zone: local          # or: utc
//! log_filter: "info"
//! ```

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::clock::DateZone;

pub const CONFIG_ENV: &str = "SKINCARE_CONFIG";
pub const DATA_DIR_ENV: &str = "SKINCARE_DATA_DIR";
pub const BIND_ENV: &str = "SKINCARE_BIND";
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Which key-value backend holds the snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Sqlite,
    File,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bind_address: String,
    /// Origin the browser frontend is served from
    pub allowed_origin: String,
    pub data_directory: PathBuf,
    pub storage_backend: StorageBackend,
    /// Zone that decides which calendar day is "today"
    pub date_zone: DateZone,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            allowed_origin: "http://localhost:8080".to_string(),
            data_directory: default_data_directory(),
            storage_backend: StorageBackend::default(),
            date_zone: DateZone::default(),
            log_filter: "info".to_string(),
        }
    }
}

/// ~/Documents/Skincare Tracker, or a relative directory when no home is known
pub fn default_data_directory() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join("Documents"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Skincare Tracker")
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// Load configuration using `lookup` in place of the process environment
    pub fn load_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir_override = lookup(DATA_DIR_ENV).map(PathBuf::from);

        let config_path = match lookup(CONFIG_ENV) {
            Some(path) => PathBuf::from(path),
            None => data_dir_override
                .clone()
                .unwrap_or_else(default_data_directory)
                .join(CONFIG_FILE_NAME),
        };

        let mut config = Self::from_file(&config_path)?;

        if let Some(dir) = data_dir_override {
            config.data_directory = dir;
        }
        if let Some(bind) = lookup(BIND_ENV) {
            config.bind_address = bind;
        }

        debug!("Effective configuration: {:?}", config);
        Ok(config)
    }

    /// Read a YAML file, falling back to defaults when it does not exist
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: AppConfig = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Invalid config file {:?}", path))?;

        info!("Loaded config from {:?}", path);
        Ok(config)
    }
}
