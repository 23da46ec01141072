// src/config.rs
//
// Application configuration
//
// Resolution order:
// 1. Built-in defaults (data directory, pool sizing, form defaults)
// 2. {APP_DATA}/inventoryhub/config.json, if present
// 3. INVENTORYHUB_DB_PATH environment variable

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Environment variable overriding the database file location
pub const DB_PATH_ENV: &str = "INVENTORYHUB_DB_PATH";

const APP_DIR_NAME: &str = "inventoryhub";
const DB_FILE_NAME: &str = "inventoryhub.db";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub defaults: FormDefaults,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Explicit database file. `None` means `{APP_DATA}/inventoryhub/inventoryhub.db`.
    pub path: Option<PathBuf>,
    pub max_connections: u32,
    pub busy_timeout_ms: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: None,
            max_connections: 8,
            busy_timeout_ms: 5000,
        }
    }
}

impl DatabaseConfig {
    /// Config pointing at a specific file, other settings default
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Resolve the database file, creating its parent directory.
    pub fn resolve_path(&self) -> AppResult<PathBuf> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => app_data_dir()?.join(DB_FILE_NAME),
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        Ok(path)
    }
}

/// Values the editing forms fall back to after a reset
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    pub applicability_type: String,
    pub notation_type: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            applicability_type: "Administrativo".to_string(),
            notation_type: "Americana".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location and environment.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = app_data_dir()
            .context("could not locate the application data directory")?
            .join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::from_file(&config_path)?
        } else {
            log::debug!("No config file at {}, using defaults", config_path.display());
            Self::default()
        };

        config.apply_env_overrides(std::env::var_os(DB_PATH_ENV).map(PathBuf::from));
        Ok(config)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    fn apply_env_overrides(&mut self, db_path: Option<PathBuf>) {
        if let Some(path) = db_path {
            log::info!("Database path overridden by {}: {}", DB_PATH_ENV, path.display());
            self.database.path = Some(path);
        }
    }
}

fn app_data_dir() -> AppResult<PathBuf> {
    let dir = dirs::data_dir()
        .ok_or_else(|| AppError::Config("Could not determine app data directory".to_string()))?
        .join(APP_DIR_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.database.path.is_none());
        assert_eq!(config.database.max_connections, 8);
        assert_eq!(config.defaults.applicability_type, "Administrativo");
        assert_eq!(config.defaults.notation_type, "Americana");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("config.json");
        std::fs::write(&file, r#"{ "database": { "busy_timeout_ms": 250 } }"#).unwrap();

        let config = AppConfig::from_file(&file).unwrap();
        assert_eq!(config.database.busy_timeout_ms, 250);
        assert_eq!(config.database.max_connections, 8);
        assert_eq!(config.defaults.notation_type, "Americana");
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("config.json");
        std::fs::write(&file, "{ not json").unwrap();

        let err = AppConfig::from_file(&file).unwrap_err();
        assert!(err.to_string().contains("invalid config file"));
    }

    #[test]
    fn test_env_override_replaces_path() {
        let mut config = AppConfig::default();
        config.apply_env_overrides(Some(PathBuf::from("/tmp/elsewhere.db")));
        assert_eq!(config.database.path, Some(PathBuf::from("/tmp/elsewhere.db")));
    }

    #[test]
    fn test_resolve_path_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("stock.db");
        let resolved = DatabaseConfig::at_path(&target).resolve_path().unwrap();
        assert_eq!(resolved, target);
        assert!(dir.path().join("nested").is_dir());
    }
}
