//! Tracing configuration.
//!
//! The terminal belongs to the UI, so events go to a log file only:
//! `<data dir>/logs/snipboard.log.<date>`, rotated daily. `RUST_LOG`
//! overrides the default directives.

use std::path::Path;
use std::sync::OnceLock;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, prelude::*, registry};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives.
///
/// Development logs our crates at debug; production keeps info. The
/// diesel/r2d2 pool is noisy at debug and stays at warn either way.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let app_level = if is_dev { "debug" } else { "info" };
    let mut directives = vec!["info".to_string(), "r2d2=warn".to_string()];
    directives.extend(
        ["snipboard", "sb_core", "sb_app", "sb_infra", "sb_platform", "sb_tui"]
            .iter()
            .map(|krate| format!("{krate}={app_level}")),
    );
    directives
}

/// Initialize the global tracing subscriber with a file sink in `logs_dir`.
///
/// # Errors
///
/// Fails when the log directory cannot be created or a subscriber is
/// already registered.
pub fn init_tracing_subscriber(logs_dir: &Path) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let file_writer = build_file_writer(logs_dir)?;

    // "2026-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let file_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(false)
        .with_writer(file_writer);

    registry().with(env_filter).with(file_layer).try_init()?;

    Ok(())
}

fn build_file_writer(logs_dir: &Path) -> anyhow::Result<NonBlocking> {
    std::fs::create_dir_all(logs_dir)?;

    let file_appender = tracing_appender::rolling::daily(logs_dir, "snipboard.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_directives() {
        let dev_directives = build_filter_directives(true);
        assert!(dev_directives.contains(&"sb_app=debug".to_string()));
        assert!(dev_directives.contains(&"r2d2=warn".to_string()));

        let prod_directives = build_filter_directives(false);
        assert!(prod_directives.contains(&"info".to_string()));
        assert!(prod_directives.contains(&"sb_infra=info".to_string()));
        assert!(!prod_directives.iter().any(|d| d.ends_with("=debug")));
    }

    #[test]
    fn directives_parse_as_env_filter() {
        let joined = build_filter_directives(true).join(",");
        assert!(tracing_subscriber::EnvFilter::try_new(joined).is_ok());
    }
}
