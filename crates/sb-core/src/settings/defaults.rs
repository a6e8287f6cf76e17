use std::collections::BTreeMap;

use super::model::*;

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            toast_duration_ms: 2000,
            sync_on_save: true,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            general: GeneralSettings::default(),
            keybindings: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_use_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.general.toast_duration_ms, 2000);
    }

    #[test]
    fn missing_general_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"general":{"sync_on_save":false}}"#).unwrap();
        assert_eq!(settings.general.toast_duration_ms, 2000);
        assert!(!settings.general.sync_on_save);
    }
}
