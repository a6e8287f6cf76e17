use anyhow::{ensure, Result};
use sb_core::Snippet;

use crate::db::models::{NewSnippetRow, SnippetRow};
use crate::db::ports::{InsertMapper, RowMapper};

pub struct SnippetRowMapper;

impl InsertMapper<Snippet, NewSnippetRow> for SnippetRowMapper {
    fn to_row(&self, domain: &Snippet) -> Result<NewSnippetRow> {
        Ok(NewSnippetRow {
            id: domain.id.as_str().to_string(),
            description: domain.description.clone(),
            content: domain.content.clone(),
            created_at_ms: domain.created_at_ms,
            updated_at_ms: domain.updated_at_ms,
            last_accessed_at_ms: domain.last_accessed_at_ms,
            deleted_at_ms: domain.deleted_at_ms,
        })
    }
}

impl RowMapper<SnippetRow, Snippet> for SnippetRowMapper {
    fn to_domain(&self, row: &SnippetRow) -> Result<Snippet> {
        ensure!(!row.id.is_empty(), "snippet row with empty id");

        Ok(Snippet {
            id: row.id.clone().into(),
            description: row.description.clone(),
            content: row.content.clone(),
            created_at_ms: row.created_at_ms,
            updated_at_ms: row.updated_at_ms,
            last_accessed_at_ms: row.last_accessed_at_ms,
            deleted_at_ms: row.deleted_at_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sb_core::SnippetId;

    #[test]
    fn keeps_absent_stamps_absent() {
        let mapper = SnippetRowMapper;
        let mut snippet = Snippet::new(SnippetId::from("s1"), "desc", "body", 100);
        snippet.touch(150);

        let row = mapper.to_row(&snippet).unwrap();
        assert_eq!(row.last_accessed_at_ms, Some(150));
        assert_eq!(row.deleted_at_ms, None);

        let back = mapper
            .to_domain(&SnippetRow {
                id: row.id,
                description: row.description,
                content: row.content,
                created_at_ms: row.created_at_ms,
                updated_at_ms: row.updated_at_ms,
                last_accessed_at_ms: row.last_accessed_at_ms,
                deleted_at_ms: row.deleted_at_ms,
            })
            .unwrap();
        assert_eq!(back, snippet);
    }

    #[test]
    fn rejects_rows_without_id() {
        let row = SnippetRow {
            id: String::new(),
            description: "d".into(),
            content: "c".into(),
            created_at_ms: 0,
            updated_at_ms: None,
            last_accessed_at_ms: None,
            deleted_at_ms: None,
        };
        assert!(SnippetRowMapper.to_domain(&row).is_err());
    }
}
