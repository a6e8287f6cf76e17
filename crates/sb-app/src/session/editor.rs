use sb_core::keymap::KeyChord;
use sb_core::Snippet;

use super::text_field::TextField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Description,
    Content,
}

/// The new/edit snippet form.
///
/// Each field remembers whether the user changed it. Unchanged fields are
/// submitted as `None` so the save falls back to the stored value.
#[derive(Debug, Clone)]
pub struct SnippetEditor {
    target: Option<Snippet>,
    description: TextField,
    content: TextField,
    description_edited: bool,
    content_edited: bool,
    field: EditorField,
}

impl SnippetEditor {
    pub fn new_snippet() -> Self {
        Self {
            target: None,
            description: TextField::default(),
            content: TextField::default(),
            description_edited: false,
            content_edited: false,
            field: EditorField::Description,
        }
    }

    pub fn edit(snippet: Snippet) -> Self {
        Self {
            description: TextField::with_text(snippet.description.clone()),
            content: TextField::with_text(snippet.content.clone()),
            target: Some(snippet),
            description_edited: false,
            content_edited: false,
            field: EditorField::Description,
        }
    }

    pub fn target(&self) -> Option<&Snippet> {
        self.target.as_ref()
    }

    pub fn field(&self) -> EditorField {
        self.field
    }

    pub fn description(&self) -> &TextField {
        &self.description
    }

    pub fn content(&self) -> &TextField {
        &self.content
    }

    pub fn next_field(&mut self) {
        self.field = match self.field {
            EditorField::Description => EditorField::Content,
            EditorField::Content => EditorField::Description,
        };
    }

    pub fn apply(&mut self, chord: &KeyChord) {
        let changed = match self.field {
            EditorField::Description => self.description.apply(chord),
            EditorField::Content => self.content.apply(chord),
        };
        self.mark_edited(changed);
    }

    pub fn insert_newline(&mut self) {
        if self.field == EditorField::Content {
            self.content.insert('\n');
            self.mark_edited(true);
        }
    }

    fn mark_edited(&mut self, changed: bool) {
        if !changed {
            return;
        }
        match self.field {
            EditorField::Description => self.description_edited = true,
            EditorField::Content => self.content_edited = true,
        }
    }

    /// `(description, content)` as submitted to the save use case.
    pub fn submission(&self) -> (Option<String>, Option<String>) {
        (
            self.description_edited.then(|| self.description.text().to_string()),
            self.content_edited.then(|| self.content.text().to_string()),
        )
    }
}
