use std::path::PathBuf;

use anyhow::Context;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use sb_app::app_paths::AppPaths;
use sb_app::session::Control;
use sb_app::SnippetSession;
use sb_core::ports::AppDirsPort;
use sb_core::ToastExpiry;
use sb_platform::DirsAppDirsAdapter;
use tokio::sync::mpsc;
use tracing::{error, info};

use super::config::resolve_config;
use super::tracing::init_tracing_subscriber;
use super::wiring::wire_dependencies;
use crate::input::to_key_chord;
use crate::view;

/// Command-line inputs for a run.
#[derive(Debug, Default, Clone)]
pub struct RunOptions {
    /// Config file to use instead of `config.toml` in the data directory.
    pub config_path: Option<PathBuf>,
    /// Initial search term; takes precedence over the configured one.
    pub query: Option<String>,
}

/// Start snipboard and block until the user quits.
///
/// The terminal is restored on every exit path, including errors from the
/// event loop.
pub async fn run(options: RunOptions) -> anyhow::Result<()> {
    let app_dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("Failed to resolve the data directory")?;
    let paths = AppPaths::from_app_dirs(&app_dirs);

    if let Err(e) = init_tracing_subscriber(&paths.logs_dir) {
        eprintln!("Failed to initialize logging: {e:#}");
    }
    info!(data_dir = %app_dirs.app_data_root.display(), "Starting snipboard");

    let config = resolve_config(options.config_path.as_deref(), &paths.config_path)?;
    let initial_query = options.query.unwrap_or_else(|| config.initial_query.clone());

    let (expired_tx, expired_rx) = mpsc::unbounded_channel();
    let deps = wire_dependencies(&config, &paths, expired_tx)?;
    let session = SnippetSession::start(deps, &initial_query).await?;

    let terminal = ratatui::init();
    let result = event_loop(terminal, session, expired_rx).await;
    ratatui::restore();

    if let Err(e) = &result {
        error!(error = %e, "snipboard stopped with an error");
    } else {
        info!("snipboard exited");
    }
    result
}

async fn event_loop(
    mut terminal: DefaultTerminal,
    mut session: SnippetSession,
    mut expired: mpsc::UnboundedReceiver<ToastExpiry>,
) -> anyhow::Result<()> {
    let mut events = EventStream::new();

    loop {
        terminal.draw(|frame| view::draw(frame, &session.view()))?;

        tokio::select! {
            event = events.next() => {
                let Some(event) = event else { break };
                if let Event::Key(key) = event? {
                    let Some(chord) = to_key_chord(&key) else { continue };
                    if session.handle_key(chord).await == Control::Quit {
                        break;
                    }
                }
            }
            Some(expiry) = expired.recv() => session.dismiss_toast(expiry),
        }
    }

    Ok(())
}
