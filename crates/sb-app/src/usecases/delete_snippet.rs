use anyhow::Result;
use sb_core::ids::SnippetId;
use sb_core::ports::{ClockPort, SnippetRepositoryPort};
use std::sync::Arc;
use tracing::info;

/// Soft-delete a snippet by stamping its deletion time.
pub struct DeleteSnippet {
    repo: Arc<dyn SnippetRepositoryPort>,
    clock: Arc<dyn ClockPort>,
}

impl DeleteSnippet {
    pub fn new(repo: Arc<dyn SnippetRepositoryPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { repo, clock }
    }

    /// Returns `false` when no snippet has this id.
    pub async fn execute(&self, id: &SnippetId) -> Result<bool> {
        let deleted = self.repo.soft_delete(id, self.clock.now_ms()).await?;
        if deleted {
            info!(snippet_id = %id, "Snippet soft-deleted");
        }
        Ok(deleted)
    }
}
