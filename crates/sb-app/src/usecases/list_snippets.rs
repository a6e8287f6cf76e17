use anyhow::{Context, Result};
use sb_core::ports::SnippetRepositoryPort;
use sb_core::snippet::filter_and_sort;
use sb_core::{SearchQuery, Snippet};
use std::sync::Arc;
use tracing::debug;

/// Visible snippets for a search query, most recently used first.
pub struct ListVisibleSnippets {
    repo: Arc<dyn SnippetRepositoryPort>,
}

impl ListVisibleSnippets {
    pub fn new(repo: Arc<dyn SnippetRepositoryPort>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, query: &SearchQuery) -> Result<Vec<Snippet>> {
        let all = self
            .repo
            .list_all()
            .await
            .context("Failed to load snippets")?;
        let visible = filter_and_sort(&all, query);

        debug!(
            total = all.len(),
            visible = visible.len(),
            terms = query.terms().len(),
            "Listed snippets"
        );
        Ok(visible)
    }
}
