use anyhow::{Context, Result};
use sb_core::ports::{ClockPort, SnippetRepositoryPort, SystemClipboardPort};
use sb_core::Snippet;
use std::sync::Arc;
use tracing::info;

use super::TouchSnippet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    NothingSelected,
}

/// Put the selected snippet's content on the system clipboard.
///
/// The snippet's last-accessed time is stamped first, so it moves to the
/// top of the list on the next refresh.
pub struct CopySnippetToClipboard {
    touch: TouchSnippet,
    clipboard: Arc<dyn SystemClipboardPort>,
}

impl CopySnippetToClipboard {
    pub fn new(
        repo: Arc<dyn SnippetRepositoryPort>,
        clipboard: Arc<dyn SystemClipboardPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            touch: TouchSnippet::new(repo, clock),
            clipboard,
        }
    }

    pub async fn execute(&self, selected: Option<&Snippet>) -> Result<CopyOutcome> {
        let Some(snippet) = selected else {
            return Ok(CopyOutcome::NothingSelected);
        };

        self.touch.execute(&snippet.id).await?;

        self.clipboard
            .write_text(&snippet.content)
            .context("Failed to write snippet to clipboard")?;

        info!(snippet_id = %snippet.id, bytes = snippet.content.len(), "Snippet copied");
        Ok(CopyOutcome::Copied)
    }
}
