use anyhow::Result;
use sb_core::ids::SnippetId;
use sb_core::ports::{ClockPort, SnippetRepositoryPort};
use std::sync::Arc;
use tracing::{debug, warn};

/// Stamp a snippet's last-accessed time with the current clock.
///
/// Returns `false` when the snippet is no longer stored, which happens
/// when another process deleted it after the list was loaded.
pub struct TouchSnippet {
    repo: Arc<dyn SnippetRepositoryPort>,
    clock: Arc<dyn ClockPort>,
}

impl TouchSnippet {
    pub fn new(repo: Arc<dyn SnippetRepositoryPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { repo, clock }
    }

    pub async fn execute(&self, id: &SnippetId) -> Result<bool> {
        let accessed_at_ms = self.clock.now_ms();
        let touched = self.repo.touch(id, accessed_at_ms).await?;

        if touched {
            debug!(snippet_id = %id, accessed_at_ms, "Snippet touched");
        } else {
            warn!(snippet_id = %id, "Touched snippet no longer in storage");
        }
        Ok(touched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{snippet, InMemorySnippetRepository, StepClock};

    #[tokio::test]
    async fn stamps_last_accessed_with_the_clock() {
        let repo = Arc::new(InMemorySnippetRepository::with(vec![snippet("s", "d", "c", 1)]));
        let uc = TouchSnippet::new(repo.clone(), Arc::new(StepClock::starting_at(1234)));

        assert!(uc.execute(&SnippetId::from("s")).await.unwrap());
        assert_eq!(repo.snapshot()[0].last_accessed_at_ms, Some(1234));
    }

    #[tokio::test]
    async fn unknown_snippet_reports_false() {
        let repo = Arc::new(InMemorySnippetRepository::default());
        let uc = TouchSnippet::new(repo.clone(), Arc::new(StepClock::starting_at(5)));

        assert!(!uc.execute(&SnippetId::from("gone")).await.unwrap());
        assert!(repo.snapshot().is_empty());
    }
}
