use anyhow::{Context, Result};
use sb_core::ports::{SnippetRemotePort, SnippetRepositoryPort};
use sb_core::sync::merge;
use sb_core::SyncReport;
use std::sync::Arc;
use tracing::{info, info_span, Instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// No remote is configured.
    Disabled,
    Completed(SyncReport),
}

/// Two-way reconciliation between local storage and the remote copy.
pub struct SyncSnippets {
    repo: Arc<dyn SnippetRepositoryPort>,
    remote: Option<Arc<dyn SnippetRemotePort>>,
}

impl SyncSnippets {
    pub fn new(repo: Arc<dyn SnippetRepositoryPort>, remote: Option<Arc<dyn SnippetRemotePort>>) -> Self {
        Self { repo, remote }
    }

    pub fn is_enabled(&self) -> bool {
        self.remote.is_some()
    }

    pub async fn execute(&self) -> Result<SyncOutcome> {
        let Some(remote) = &self.remote else {
            return Ok(SyncOutcome::Disabled);
        };

        let span = info_span!("usecase.sync_snippets.execute");
        async {
            let local = self.repo.list_all().await.context("Failed to load local snippets")?;
            let theirs = remote.pull().await.context("Failed to pull remote snippets")?;

            let plan = merge(&local, &theirs);

            if !plan.local_writes.is_empty() {
                self.repo
                    .upsert_many(&plan.local_writes)
                    .await
                    .context("Failed to store pulled snippets")?;
            }
            remote.push(&plan.merged).await.context("Failed to push snippets")?;

            info!(
                new_local = plan.report.new_local,
                new_remote = plan.report.new_remote,
                dropped_local = plan.report.dropped_local,
                dropped_remote = plan.report.dropped_remote,
                "Sync completed"
            );
            Ok(SyncOutcome::Completed(plan.report))
        }
        .instrument(span)
        .await
    }
}
