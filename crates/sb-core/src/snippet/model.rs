use serde::{Deserialize, Serialize};

use crate::ids::SnippetId;

/// A stored text fragment with its timestamps.
///
/// All timestamps are unix milliseconds. A snippet carrying
/// `deleted_at_ms` is soft-deleted: it stays in storage but never shows up
/// in a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: SnippetId,
    pub description: String,
    pub content: String,
    pub created_at_ms: i64,
    #[serde(default)]
    pub updated_at_ms: Option<i64>,
    #[serde(default)]
    pub last_accessed_at_ms: Option<i64>,
    #[serde(default)]
    pub deleted_at_ms: Option<i64>,
}

impl Snippet {
    pub fn new(
        id: SnippetId,
        description: impl Into<String>,
        content: impl Into<String>,
        created_at_ms: i64,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            content: content.into(),
            created_at_ms,
            updated_at_ms: None,
            last_accessed_at_ms: None,
            deleted_at_ms: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at_ms.is_some()
    }

    /// Sort key for listings: last access, falling back to creation.
    pub fn recency_ms(&self) -> i64 {
        self.last_accessed_at_ms.unwrap_or(self.created_at_ms)
    }

    /// Latest stamp of any kind. Two copies of the same snippet are
    /// reconciled by keeping the one with the higher revision.
    pub fn revision_ms(&self) -> i64 {
        [
            Some(self.created_at_ms),
            self.updated_at_ms,
            self.last_accessed_at_ms,
            self.deleted_at_ms,
        ]
        .into_iter()
        .flatten()
        .max()
        .unwrap_or(self.created_at_ms)
    }

    pub fn touch(&mut self, now_ms: i64) {
        self.last_accessed_at_ms = Some(now_ms);
    }

    pub fn soft_delete(&mut self, now_ms: i64) {
        self.deleted_at_ms = Some(now_ms);
    }

    pub fn apply_edit(&mut self, description: String, content: String, now_ms: i64) {
        self.description = description;
        self.content = content;
        self.updated_at_ms = Some(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet() -> Snippet {
        Snippet::new(SnippetId::from("s-1"), "greeting", "hello world", 1_000)
    }

    #[test]
    fn recency_falls_back_to_creation_time() {
        let mut s = snippet();
        assert_eq!(s.recency_ms(), 1_000);

        s.touch(5_000);
        assert_eq!(s.recency_ms(), 5_000);
    }

    #[test]
    fn revision_tracks_latest_stamp() {
        let mut s = snippet();
        s.touch(2_000);
        s.apply_edit("greeting".into(), "hi".into(), 3_000);
        assert_eq!(s.revision_ms(), 3_000);

        s.soft_delete(4_000);
        assert_eq!(s.revision_ms(), 4_000);
        assert!(s.is_deleted());
    }

    #[test]
    fn deserializes_without_optional_stamps() {
        let json = r#"{"id":"s-2","description":"d","content":"c","created_at_ms":7}"#;
        let s: Snippet = serde_json::from_str(json).unwrap();
        assert_eq!(s.id.as_str(), "s-2");
        assert_eq!(s.last_accessed_at_ms, None);
        assert_eq!(s.deleted_at_ms, None);
    }
}
