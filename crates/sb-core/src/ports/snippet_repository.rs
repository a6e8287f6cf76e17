use anyhow::Result;
use async_trait::async_trait;

use crate::ids::SnippetId;
use crate::snippet::Snippet;

/// Snippet persistence.
///
/// Deletion is always soft: `soft_delete` stamps the record and every
/// listing method still returns it. Filtering deleted records out is the
/// caller's job.
#[async_trait]
pub trait SnippetRepositoryPort: Send + Sync {
    async fn insert(&self, snippet: &Snippet) -> Result<()>;

    /// Overwrite an existing record. Returns `false` when no record has this id.
    async fn update(&self, snippet: &Snippet) -> Result<bool>;

    async fn get(&self, id: &SnippetId) -> Result<Option<Snippet>>;

    /// Every stored snippet, soft-deleted ones included, oldest first.
    async fn list_all(&self) -> Result<Vec<Snippet>>;

    async fn touch(&self, id: &SnippetId, accessed_at_ms: i64) -> Result<bool>;

    async fn soft_delete(&self, id: &SnippetId, deleted_at_ms: i64) -> Result<bool>;

    /// Insert or overwrite each record by id.
    async fn upsert_many(&self, snippets: &[Snippet]) -> Result<()>;
}
