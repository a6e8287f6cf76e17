use super::{Snippet, SnippetError};

/// Field values submitted from the snippet editor.
///
/// A field left untouched in the editor is `None` and falls back to the
/// value of the snippet being edited (if any).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetDraft {
    pub description: String,
    pub content: String,
}

impl SnippetDraft {
    pub fn resolve(
        edited_description: Option<String>,
        edited_content: Option<String>,
        base: Option<&Snippet>,
    ) -> Self {
        let description = edited_description
            .or_else(|| base.map(|s| s.description.clone()))
            .unwrap_or_default();
        let content = edited_content
            .or_else(|| base.map(|s| s.content.clone()))
            .unwrap_or_default();

        Self {
            description,
            content,
        }
    }

    pub fn validate(&self) -> Result<(), SnippetError> {
        if self.description.is_empty() && self.content.is_empty() {
            return Err(SnippetError::EmptyDraft);
        }
        Ok(())
    }
}
