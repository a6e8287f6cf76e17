//! # Dependency Injection
//!
//! The only place that depends on sb-infra, sb-platform and sb-app at the
//! same time. It assembles concrete adapters behind their ports and makes
//! no decisions beyond resolving empty config values to defaults.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use sb_app::app_paths::AppPaths;
use sb_app::AppDeps;
use sb_core::config::AppConfig;
use sb_core::ports::*;
use sb_core::ToastExpiry;
use sb_infra::db::executor::DieselSqliteExecutor;
use sb_infra::db::mappers::SnippetRowMapper;
use sb_infra::db::pool::{init_db_pool, DbPool};
use sb_infra::db::repositories::DieselSnippetRepository;
use sb_infra::settings::FileSettingsRepository;
use sb_infra::sync::JsonFileRemote;
use sb_infra::{SystemClock, ToastTimer};
use sb_platform::SystemClipboard;
use tokio::sync::mpsc;
use tracing::info;

pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Database initialization failed: {0}")]
    DatabaseInit(String),
}

/// Database location: the configured path, or the data directory default.
fn resolve_db_path(config: &AppConfig, paths: &AppPaths) -> PathBuf {
    if config.database_path.as_os_str().is_empty() {
        paths.db_path.clone()
    } else {
        config.database_path.clone()
    }
}

fn create_db_pool(db_path: &Path) -> WiringResult<DbPool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| WiringError::DatabaseInit(format!("Failed to create DB directory: {}", e)))?;
    }

    let db_url = db_path
        .to_str()
        .ok_or_else(|| WiringError::DatabaseInit("Invalid database path".to_string()))?;

    init_db_pool(db_url).map_err(|e| WiringError::DatabaseInit(format!("Failed to initialize DB: {:#}", e)))
}

/// Build every port implementation and group them into [`AppDeps`].
///
/// Toast expiries are delivered on `toast_expired`.
pub fn wire_dependencies(
    config: &AppConfig,
    paths: &AppPaths,
    toast_expired: mpsc::UnboundedSender<ToastExpiry>,
) -> WiringResult<AppDeps> {
    let db_path = resolve_db_path(config, paths);
    let pool = create_db_pool(&db_path)?;
    info!(db_path = %db_path.display(), "Database ready");

    let snippet_repo: Arc<dyn SnippetRepositoryPort> = Arc::new(DieselSnippetRepository::new(
        DieselSqliteExecutor::new(pool),
        SnippetRowMapper,
    ));

    let remote: Option<Arc<dyn SnippetRemotePort>> = if config.sync_remote_path.as_os_str().is_empty() {
        info!("No sync remote configured");
        None
    } else {
        info!(remote = %config.sync_remote_path.display(), "Sync remote configured");
        Some(Arc::new(JsonFileRemote::new(config.sync_remote_path.clone())))
    };

    let settings_repo = FileSettingsRepository::new(paths.settings_path.clone());
    info!(settings = %settings_repo.path().display(), "Settings file");
    let settings: Arc<dyn SettingsPort> = Arc::new(settings_repo);
    let clipboard: Arc<dyn SystemClipboardPort> = Arc::new(SystemClipboard::new());
    let toast_timer: Arc<dyn ToastTimerPort> = Arc::new(ToastTimer::new(toast_expired));
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);

    Ok(AppDeps {
        snippet_repo,
        remote,
        settings,
        clipboard,
        toast_timer,
        clock,
    })
}
