//! Use case for updating application settings

use anyhow::{bail, Result};
use sb_core::keymap::Keymap;
use sb_core::ports::SettingsPort;
use sb_core::settings::{Settings, CURRENT_SCHEMA_VERSION};
use tracing::{info, info_span, Instrument};

/// Validate and persist settings.
///
/// Rejects a schema version other than the current one and key bindings
/// that do not parse, so a bad write never reaches disk.
pub struct UpdateSettings {
    settings: std::sync::Arc<dyn SettingsPort>,
}

impl UpdateSettings {
    pub fn new(settings: std::sync::Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self, settings: Settings) -> Result<()> {
        let span = info_span!("usecase.update_settings.execute");

        async {
            let old_settings = self.settings.load().await?;

            if settings.schema_version != CURRENT_SCHEMA_VERSION {
                bail!(
                    "Invalid schema version: expected {}, got {}",
                    CURRENT_SCHEMA_VERSION,
                    settings.schema_version
                );
            }
            Keymap::default().with_overrides(&settings.keybindings)?;

            let changed = changed_fields(&old_settings, &settings);
            info!(changed_fields = %changed.join(","), "Updating application settings");

            self.settings.save(&settings).await
        }
        .instrument(span)
        .await
    }
}

fn changed_fields(old: &Settings, new: &Settings) -> Vec<&'static str> {
    let mut changed = Vec::new();
    if old.general.toast_duration_ms != new.general.toast_duration_ms {
        changed.push("general.toast_duration_ms");
    }
    if old.general.sync_on_save != new.general.sync_on_save {
        changed.push("general.sync_on_save");
    }
    if old.keybindings != new.keybindings {
        changed.push("keybindings");
    }
    changed
}
