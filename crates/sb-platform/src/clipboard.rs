use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use clipboard_rs::{Clipboard, ClipboardContext};
use sb_core::ports::SystemClipboardPort;
use tracing::debug;

fn map_clipboard_err<T>(result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

/// Text-only access to the system clipboard via `clipboard-rs`.
///
/// The platform context is opened on first use, so the UI can start on a
/// machine without a display server and only fail when copying.
pub struct SystemClipboard {
    inner: Mutex<Option<ClipboardContext>>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self { inner: Mutex::new(None) }
    }
}

impl SystemClipboardPort for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| anyhow!("clipboard lock poisoned"))?;

        if guard.is_none() {
            let ctx = map_clipboard_err(ClipboardContext::new()).context("ClipboardContext::new failed")?;
            debug!("System clipboard context opened");
            *guard = Some(ctx);
        }

        let Some(ctx) = guard.as_ref() else {
            return Err(anyhow!("clipboard context unavailable"));
        };
        map_clipboard_err(ctx.set_text(text.to_string())).context("write text to clipboard failed")
    }
}
