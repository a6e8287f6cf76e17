//! Business use cases
//!
//! One struct per user intention. The session composes them; none of
//! them knows about the terminal.

pub mod copy_snippet;
pub mod delete_snippet;
pub mod list_snippets;
pub mod save_snippet;
pub mod settings;
pub mod sync_snippets;
pub mod touch_snippet;

#[cfg(test)]
pub(crate) mod test_support;

pub use copy_snippet::{CopyOutcome, CopySnippetToClipboard};
pub use delete_snippet::DeleteSnippet;
pub use list_snippets::ListVisibleSnippets;
pub use save_snippet::{SaveOutcome, SaveSnippet};
pub use settings::{GetSettings, UpdateSettings};
pub use sync_snippets::{SyncOutcome, SyncSnippets};
pub use touch_snippet::TouchSnippet;
