//! Snippet domain models.
mod draft;
mod error;
mod model;
mod query;
mod selection;

pub use draft::SnippetDraft;
pub use error::SnippetError;
pub use model::Snippet;
pub use query::{filter_and_sort, SearchQuery};
pub use selection::Selection;
