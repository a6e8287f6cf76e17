use anyhow::Result;
use diesel::prelude::*;
use sb_core::ids::SnippetId;
use sb_core::ports::SnippetRepositoryPort;
use sb_core::Snippet;

use crate::db::models::{NewSnippetRow, SnippetRow};
use crate::db::ports::{DbExecutor, InsertMapper, RowMapper};
use crate::db::schema::t_snippet;

pub struct DieselSnippetRepository<E, M> {
    executor: E,
    mapper: M,
}

impl<E, M> DieselSnippetRepository<E, M> {
    pub fn new(executor: E, mapper: M) -> Self {
        Self { executor, mapper }
    }
}

#[async_trait::async_trait]
impl<E, M> SnippetRepositoryPort for DieselSnippetRepository<E, M>
where
    E: DbExecutor,
    M: InsertMapper<Snippet, NewSnippetRow> + RowMapper<SnippetRow, Snippet>,
{
    async fn insert(&self, snippet: &Snippet) -> Result<()> {
        self.executor.run(|conn| {
            let row = self.mapper.to_row(snippet)?;
            diesel::insert_into(t_snippet::table).values(&row).execute(conn)?;
            Ok(())
        })
    }

    async fn update(&self, snippet: &Snippet) -> Result<bool> {
        self.executor.run(|conn| {
            let row = self.mapper.to_row(snippet)?;
            let affected = diesel::update(t_snippet::table.find(row.id.as_str()))
                .set(&row)
                .execute(conn)?;
            Ok(affected > 0)
        })
    }

    async fn get(&self, id: &SnippetId) -> Result<Option<Snippet>> {
        self.executor.run(|conn| {
            let row = t_snippet::table
                .find(id.as_str())
                .select(SnippetRow::as_select())
                .first::<SnippetRow>(conn)
                .optional()?;

            row.map(|r| self.mapper.to_domain(&r)).transpose()
        })
    }

    async fn list_all(&self) -> Result<Vec<Snippet>> {
        self.executor.run(|conn| {
            let rows = t_snippet::table
                .order((t_snippet::created_at_ms.asc(), t_snippet::id.asc()))
                .select(SnippetRow::as_select())
                .load::<SnippetRow>(conn)?;

            rows.iter().map(|row| self.mapper.to_domain(row)).collect()
        })
    }

    async fn touch(&self, id: &SnippetId, accessed_at_ms: i64) -> Result<bool> {
        self.executor.run(|conn| {
            let affected = diesel::update(t_snippet::table.find(id.as_str()))
                .set(t_snippet::last_accessed_at_ms.eq(Some(accessed_at_ms)))
                .execute(conn)?;
            Ok(affected > 0)
        })
    }

    async fn soft_delete(&self, id: &SnippetId, deleted_at_ms: i64) -> Result<bool> {
        self.executor.run(|conn| {
            let affected = diesel::update(t_snippet::table.find(id.as_str()))
                .set(t_snippet::deleted_at_ms.eq(Some(deleted_at_ms)))
                .execute(conn)?;
            Ok(affected > 0)
        })
    }

    async fn upsert_many(&self, snippets: &[Snippet]) -> Result<()> {
        self.executor.run(|conn| {
            let rows = snippets
                .iter()
                .map(|s| self.mapper.to_row(s))
                .collect::<Result<Vec<_>>>()?;

            conn.transaction(|conn| {
                for row in &rows {
                    diesel::insert_into(t_snippet::table)
                        .values(row)
                        .on_conflict(t_snippet::id)
                        .do_update()
                        .set(row)
                        .execute(conn)?;
                }
                Ok(())
            })
        })
    }
}
