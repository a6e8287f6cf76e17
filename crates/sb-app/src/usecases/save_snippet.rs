use anyhow::{Context, Result};
use sb_core::ids::SnippetId;
use sb_core::ports::{ClockPort, SnippetRepositoryPort};
use sb_core::{Snippet, SnippetDraft, SnippetError};
use std::sync::Arc;
use tracing::{info, info_span, warn, Instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(SnippetId),
    Updated(SnippetId),
    /// Both fields were empty; nothing was written.
    Rejected,
}

/// Persist the snippet editor's contents.
///
/// With a `target` the existing snippet is edited in place, otherwise a
/// new snippet is created. Fields the user did not touch (`None`) keep
/// the target's current value.
pub struct SaveSnippet {
    repo: Arc<dyn SnippetRepositoryPort>,
    clock: Arc<dyn ClockPort>,
}

impl SaveSnippet {
    pub fn new(repo: Arc<dyn SnippetRepositoryPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { repo, clock }
    }

    pub async fn execute(
        &self,
        target: Option<&SnippetId>,
        edited_description: Option<String>,
        edited_content: Option<String>,
    ) -> Result<SaveOutcome> {
        let span = info_span!("usecase.save_snippet.execute", editing = target.is_some());

        async move {
            let base = match target {
                Some(id) => Some(
                    self.repo
                        .get(id)
                        .await?
                        .ok_or_else(|| SnippetError::NotFound(id.clone()))?,
                ),
                None => None,
            };

            let draft = SnippetDraft::resolve(edited_description, edited_content, base.as_ref());
            if let Err(e) = draft.validate() {
                warn!(error = %e, "Snippet not saved");
                return Ok(SaveOutcome::Rejected);
            }

            let now_ms = self.clock.now_ms();
            match base {
                Some(mut snippet) => {
                    snippet.apply_edit(draft.description, draft.content, now_ms);
                    self.repo
                        .update(&snippet)
                        .await
                        .context("Failed to update snippet")?;
                    info!(snippet_id = %snippet.id, "Snippet updated");
                    Ok(SaveOutcome::Updated(snippet.id))
                }
                None => {
                    let snippet = Snippet::new(SnippetId::new(), draft.description, draft.content, now_ms);
                    self.repo
                        .insert(&snippet)
                        .await
                        .context("Failed to insert snippet")?;
                    info!(snippet_id = %snippet.id, "Snippet created");
                    Ok(SaveOutcome::Created(snippet.id))
                }
            }
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{snippet, InMemorySnippetRepository, StepClock};

    fn use_case(repo: Arc<InMemorySnippetRepository>) -> SaveSnippet {
        SaveSnippet::new(repo, Arc::new(StepClock::starting_at(10_000)))
    }

    #[tokio::test]
    async fn creates_new_snippet_with_clock_time() {
        let repo = Arc::new(InMemorySnippetRepository::default());
        let uc = use_case(repo.clone());

        let outcome = uc
            .execute(None, Some("ports".into()), Some("lsof -i :8080".into()))
            .await
            .unwrap();

        let stored = repo.snapshot();
        assert_eq!(stored.len(), 1);
        assert_eq!(outcome, SaveOutcome::Created(stored[0].id.clone()));
        assert_eq!(stored[0].description, "ports");
        assert_eq!(stored[0].content, "lsof -i :8080");
        assert_eq!(stored[0].created_at_ms, 10_000);
    }

    #[tokio::test]
    async fn empty_draft_performs_no_mutation() {
        let repo = Arc::new(InMemorySnippetRepository::default());
        let uc = use_case(repo.clone());

        let outcome = uc.execute(None, None, Some(String::new())).await.unwrap();

        assert_eq!(outcome, SaveOutcome::Rejected);
        assert_eq!(repo.write_count(), 0);
        assert!(repo.snapshot().is_empty());
    }

    #[tokio::test]
    async fn clearing_both_fields_of_existing_snippet_is_rejected() {
        let repo = Arc::new(InMemorySnippetRepository::with(vec![snippet("s", "d", "c", 1)]));
        let uc = use_case(repo.clone());

        let outcome = uc
            .execute(Some(&SnippetId::from("s")), Some(String::new()), Some(String::new()))
            .await
            .unwrap();

        assert_eq!(outcome, SaveOutcome::Rejected);
        assert_eq!(repo.write_count(), 0);
        assert_eq!(repo.snapshot()[0].description, "d");
    }

    #[tokio::test]
    async fn edit_keeps_untouched_fields() {
        let repo = Arc::new(InMemorySnippetRepository::with(vec![snippet("s", "desc", "old", 1)]));
        let uc = use_case(repo.clone());
        let id = SnippetId::from("s");

        let outcome = uc.execute(Some(&id), None, Some("new".into())).await.unwrap();

        assert_eq!(outcome, SaveOutcome::Updated(id));
        let stored = &repo.snapshot()[0];
        assert_eq!(stored.description, "desc");
        assert_eq!(stored.content, "new");
        assert_eq!(stored.created_at_ms, 1);
        assert_eq!(stored.updated_at_ms, Some(10_000));
    }

    #[tokio::test]
    async fn editing_unknown_snippet_fails() {
        let repo = Arc::new(InMemorySnippetRepository::default());
        let uc = use_case(repo);

        let err = uc
            .execute(Some(&SnippetId::from("missing")), Some("x".into()), None)
            .await
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<SnippetError>(),
            Some(&SnippetError::NotFound(SnippetId::from("missing")))
        );
    }
}
