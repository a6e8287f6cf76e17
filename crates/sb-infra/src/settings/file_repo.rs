use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use sb_core::ports::SettingsPort;
use sb_core::settings::{Settings, CURRENT_SCHEMA_VERSION};
use tokio::fs;
use tracing::info;

use crate::settings::migration::SettingsMigrator;

/// JSON settings file.
///
/// A missing file reads as [`Settings::default`]. Files written by an
/// older schema are migrated on load and written back.
pub struct FileSettingsRepository {
    path: PathBuf,
    migrator: SettingsMigrator,
}

impl FileSettingsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            migrator: SettingsMigrator::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create settings dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Write to a sibling temp file, then rename over the target.
    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp settings failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp settings to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl SettingsPort for FileSettingsRepository {
    async fn load(&self) -> Result<Settings> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Settings::default());
            }
            Err(e) => return Err(e).with_context(|| format!("read settings failed: {}", self.path.display())),
        };

        let settings: Settings = serde_json::from_str(&content)
            .with_context(|| format!("parse settings failed: {}", self.path.display()))?;
        let original_version = settings.schema_version;
        let migrated = self.migrator.migrate_to_latest(settings)?;

        if original_version < CURRENT_SCHEMA_VERSION {
            info!(from = original_version, to = CURRENT_SCHEMA_VERSION, "Settings migrated");
            self.save(&migrated).await?;
        }

        Ok(migrated)
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        let content = serde_json::to_string_pretty(settings).context("serialize settings failed")?;

        self.atomic_write(&content).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("settings.json"));

        assert_eq!(repo.load().await.unwrap(), Settings::default());
        assert!(!repo.path().exists());
    }

    #[tokio::test]
    async fn save_then_load_in_nested_dir() {
        let dir = tempdir().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("nested").join("settings.json"));

        let mut settings = Settings::default();
        settings.general.sync_on_save = false;
        settings.keybindings.insert("new_snippet".into(), "ctrl+n".into());
        repo.save(&settings).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), settings);
        assert!(!dir.path().join("nested").join("settings.json.tmp").exists());
    }

    #[tokio::test]
    async fn partial_file_is_filled_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        tokio::fs::write(&path, r#"{"general":{"toast_duration_ms":750,"sync_on_save":true}}"#)
            .await
            .unwrap();

        let loaded = FileSettingsRepository::new(&path).load().await.unwrap();
        assert_eq!(loaded.general.toast_duration_ms, 750);
        assert_eq!(loaded.schema_version, CURRENT_SCHEMA_VERSION);
        assert!(loaded.keybindings.is_empty());
    }

    #[tokio::test]
    async fn partial_general_section_is_filled_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        tokio::fs::write(&path, r#"{"general":{"sync_on_save":false}}"#).await.unwrap();

        let loaded = FileSettingsRepository::new(&path).load().await.unwrap();
        assert!(!loaded.general.sync_on_save);
        assert_eq!(loaded.general.toast_duration_ms, 2000);
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        let err = FileSettingsRepository::new(&path).load().await.unwrap_err();
        assert!(format!("{err:#}").contains("parse settings failed"));
    }
}
