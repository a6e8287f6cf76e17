//! # Configuration Loader
//!
//! Reads the TOML file into [`AppConfig`]. Pure data loading: whatever is
//! in the file is accepted, empty values included. Deciding what an empty
//! value means is left to wiring.

use std::path::Path;

use anyhow::Context;
use sb_core::config::AppConfig;
use tracing::debug;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error when the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value = toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Pick the configuration source.
///
/// An explicitly requested file must exist. The default location is
/// optional: when it is absent the empty configuration is used.
pub fn resolve_config(explicit: Option<&Path>, default_path: &Path) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    if default_path.exists() {
        load_config(default_path)
    } else {
        debug!(path = %default_path.display(), "No config file, using empty configuration");
        Ok(AppConfig::empty())
    }
}
