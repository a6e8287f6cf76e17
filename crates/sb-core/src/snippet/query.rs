use super::Snippet;

/// A free-text search split into lowercase terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    terms: Vec<String>,
}

impl SearchQuery {
    pub fn parse(input: &str) -> Self {
        Self {
            terms: input.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Every term must occur in the description or the content.
    pub fn matches(&self, snippet: &Snippet) -> bool {
        let description = snippet.description.to_lowercase();
        let content = snippet.content.to_lowercase();
        self.terms
            .iter()
            .all(|term| description.contains(term.as_str()) || content.contains(term.as_str()))
    }
}

/// Visible snippets for `query`, most recently used first.
///
/// Soft-deleted snippets are dropped. The sort is stable, so snippets
/// with the same recency keep their storage order.
pub fn filter_and_sort(snippets: &[Snippet], query: &SearchQuery) -> Vec<Snippet> {
    let mut visible: Vec<Snippet> = snippets
        .iter()
        .filter(|s| !s.is_deleted() && query.matches(s))
        .cloned()
        .collect();
    visible.sort_by(|a, b| b.recency_ms().cmp(&a.recency_ms()));
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SnippetId;

    fn snippet(id: &str, description: &str, content: &str, created: i64) -> Snippet {
        Snippet::new(SnippetId::from(id), description, content, created)
    }

    #[test]
    fn parse_splits_on_any_whitespace() {
        let q = SearchQuery::parse("  Git   push\t--force ");
        assert_eq!(q.terms(), ["git", "push", "--force"]);
    }

    #[test]
    fn empty_query_matches_everything() {
        let q = SearchQuery::parse("   ");
        assert!(q.is_empty());
        assert!(q.matches(&snippet("a", "", "", 0)));
    }

    #[test]
    fn every_term_must_match_somewhere() {
        let s = snippet("a", "Docker cleanup", "docker system prune -af", 0);
        assert!(SearchQuery::parse("DOCKER prune").matches(&s));
        assert!(SearchQuery::parse("cleanup -af").matches(&s));
        assert!(!SearchQuery::parse("docker volume").matches(&s));
    }

    #[test]
    fn soft_deleted_snippets_are_never_listed() {
        let mut gone = snippet("gone", "docker", "x", 10);
        gone.soft_delete(20);
        let kept = snippet("kept", "docker", "y", 5);

        for input in ["", "docker", "x"] {
            let visible = filter_and_sort(&[gone.clone(), kept.clone()], &SearchQuery::parse(input));
            assert!(visible.iter().all(|s| s.id.as_str() != "gone"), "query {input:?}");
        }
    }

    #[test]
    fn sorts_by_access_then_creation_descending() {
        let old = snippet("old", "a", "", 100);
        let mut accessed = snippet("accessed", "a", "", 50);
        accessed.touch(500);
        let newest = snippet("newest", "a", "", 300);

        let visible = filter_and_sort(&[old, accessed, newest], &SearchQuery::default());
        let ids: Vec<&str> = visible.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["accessed", "newest", "old"]);
    }

    #[test]
    fn ties_keep_storage_order() {
        let first = snippet("first", "a", "", 100);
        let second = snippet("second", "a", "", 100);
        let third = snippet("third", "a", "", 100);

        let visible = filter_and_sort(&[first, second, third], &SearchQuery::default());
        let ids: Vec<&str> = visible.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }
}
