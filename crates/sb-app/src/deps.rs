//! # Application Dependencies
//!
//! Plain grouping of the ports the use cases need. Not a builder: no
//! defaults and no construction logic, every dependency is supplied by
//! the wiring code.

use std::sync::Arc;
use sb_core::ports::*;

pub struct AppDeps {
    // Storage
    pub snippet_repo: Arc<dyn SnippetRepositoryPort>,
    pub remote: Option<Arc<dyn SnippetRemotePort>>,
    pub settings: Arc<dyn SettingsPort>,

    // Platform
    pub clipboard: Arc<dyn SystemClipboardPort>,
    pub toast_timer: Arc<dyn ToastTimerPort>,

    // System
    pub clock: Arc<dyn ClockPort>,
}
