//! Use case for getting application settings

use anyhow::Result;
use sb_core::ports::SettingsPort;
use sb_core::settings::Settings;
use tracing::{info, info_span, Instrument};

/// Use case for retrieving application settings.
pub struct GetSettings {
    settings: std::sync::Arc<dyn SettingsPort>,
}

impl GetSettings {
    pub fn new(settings: std::sync::Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self) -> Result<Settings> {
        let span = info_span!("usecase.get_settings.execute");

        async {
            let result = self.settings.load().await?;

            info!(schema_version = result.schema_version, "Settings retrieved");
            Ok(result)
        }
        .instrument(span)
        .await
    }
}
