use diesel::prelude::*;

use crate::db::schema::t_snippet;

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = t_snippet)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SnippetRow {
    pub id: String,
    pub description: String,
    pub content: String,
    pub created_at_ms: i64,
    pub updated_at_ms: Option<i64>,
    pub last_accessed_at_ms: Option<i64>,
    pub deleted_at_ms: Option<i64>,
}

/// Full row image used for inserts and whole-record overwrites.
///
/// `None` stamps are written as NULL rather than skipped.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = t_snippet)]
#[diesel(treat_none_as_null = true)]
pub struct NewSnippetRow {
    pub id: String,
    pub description: String,
    pub content: String,
    pub created_at_ms: i64,
    pub updated_at_ms: Option<i64>,
    pub last_accessed_at_ms: Option<i64>,
    pub deleted_at_ms: Option<i64>,
}
