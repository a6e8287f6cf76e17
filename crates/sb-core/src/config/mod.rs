//! # Configuration DTO
//!
//! Data read from the TOML configuration file. This module maps TOML to
//! a plain struct and nothing else: no validation and no defaults. Empty
//! values are facts and are resolved by the bootstrap layer.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite database file. Empty means "use the data directory".
    pub database_path: PathBuf,

    /// JSON document shared with other machines. Empty disables sync.
    pub sync_remote_path: PathBuf,

    /// Search term placed in the search box at startup.
    pub initial_query: String,
}

impl AppConfig {
    /// Create AppConfig from a TOML value.
    ///
    /// Missing keys become empty values.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            database_path: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("database_path"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            sync_remote_path: PathBuf::from(
                toml_value
                    .get("sync")
                    .and_then(|s| s.get("remote_path"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            initial_query: toml_value
                .get("general")
                .and_then(|g| g.get("initial_query"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
        })
    }

    pub fn empty() -> Self {
        Self {
            database_path: PathBuf::new(),
            sync_remote_path: PathBuf::new(),
            initial_query: String::new(),
        }
    }
}
