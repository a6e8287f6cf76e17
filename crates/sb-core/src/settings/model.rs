use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Fields missing from a hand-edited file take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// How long the "copied snippet" and sync toasts stay visible.
    pub toast_duration_ms: u64,

    /// Run a sync right after a snippet is saved (only when a remote is configured).
    pub sync_on_save: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub general: GeneralSettings,

    /// Action name → key chord, e.g. `"new_snippet" = "ctrl+n"`.
    #[serde(default)]
    pub keybindings: BTreeMap<String, String>,
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}
