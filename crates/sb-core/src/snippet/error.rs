use thiserror::Error;

use crate::ids::SnippetId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnippetError {
    #[error("no content provided")]
    EmptyDraft,

    #[error("snippet not found: {0}")]
    NotFound(SnippetId),
}
