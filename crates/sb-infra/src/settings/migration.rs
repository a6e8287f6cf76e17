use anyhow::{anyhow, Result};
use sb_core::ports::SettingsMigrationPort;
use sb_core::settings::{Settings, CURRENT_SCHEMA_VERSION};

/// Applies schema migrations one version step at a time.
pub struct SettingsMigrator {
    migrations: Vec<Box<dyn SettingsMigrationPort>>,
}

impl Default for SettingsMigrator {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsMigrator {
    /// Migrator for the current schema. Version 1 is the first schema, so
    /// no steps are registered yet; a bump of `CURRENT_SCHEMA_VERSION` adds
    /// its step here.
    pub fn new() -> Self {
        Self { migrations: Vec::new() }
    }

    pub fn migrate_to_latest(&self, mut settings: Settings) -> Result<Settings> {
        while settings.schema_version < CURRENT_SCHEMA_VERSION {
            let current = settings.schema_version;

            let migration = self
                .migrations
                .iter()
                .find(|m| m.from_version() == current)
                .ok_or_else(|| anyhow!("no settings migration from schema version {current}"))?;

            settings = migration.migrate(settings);
            if settings.schema_version <= current {
                settings.schema_version = migration.to_version();
            }
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FromZero;

    impl SettingsMigrationPort for FromZero {
        fn from_version(&self) -> u32 {
            0
        }

        fn to_version(&self) -> u32 {
            1
        }

        fn migrate(&self, mut settings: Settings) -> Settings {
            settings.general.toast_duration_ms = settings.general.toast_duration_ms.max(500);
            settings
        }
    }

    fn legacy() -> Settings {
        let mut settings = Settings::default();
        settings.schema_version = 0;
        settings.general.toast_duration_ms = 10;
        settings
    }

    #[test]
    fn current_settings_pass_through() {
        let migrated = SettingsMigrator::new().migrate_to_latest(Settings::default()).unwrap();
        assert_eq!(migrated, Settings::default());
    }

    #[test]
    fn applies_registered_step() {
        let migrator = SettingsMigrator {
            migrations: vec![Box::new(FromZero)],
        };
        let migrated = migrator.migrate_to_latest(legacy()).unwrap();
        assert_eq!(migrated.schema_version, CURRENT_SCHEMA_VERSION);
        assert_eq!(migrated.general.toast_duration_ms, 500);
    }

    #[test]
    fn missing_step_is_an_error() {
        assert!(SettingsMigrator::new().migrate_to_latest(legacy()).is_err());
    }
}
