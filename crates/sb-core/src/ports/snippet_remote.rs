use anyhow::Result;
use async_trait::async_trait;

use crate::snippet::Snippet;

/// A copy of the snippet set kept outside this machine.
#[async_trait]
pub trait SnippetRemotePort: Send + Sync {
    async fn pull(&self) -> Result<Vec<Snippet>>;
    async fn push(&self, snippets: &[Snippet]) -> Result<()>;
}
