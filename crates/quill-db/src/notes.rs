//! Note repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use quill_core::{Error, NewNote, Note, NotePatch, NoteRepository, PaginatedNotes, Result};

/// SQLite implementation of NoteRepository.
#[derive(Clone)]
pub struct SqliteNoteRepository {
    pool: SqlitePool,
}

impl SqliteNoteRepository {
    /// Create a new SqliteNoteRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const NOTE_COLUMNS: &str = "id, title, content, user_id, created_at, updated_at";

/// Most-recently-updated first; equal timestamps fall back to insertion
/// order via rowid.
const NOTE_ORDER: &str = "ORDER BY updated_at DESC, rowid ASC";

fn map_row_to_note(row: SqliteRow) -> Note {
    Note {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        user_id: row.get("user_id"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl NoteRepository for SqliteNoteRepository {
    async fn find_all(&self) -> Result<Vec<Note>> {
        let rows = sqlx::query(&format!("SELECT {} FROM notes {}", NOTE_COLUMNS, NOTE_ORDER))
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(rows.into_iter().map(map_row_to_note).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>> {
        let row = sqlx::query(&format!("SELECT {} FROM notes WHERE id = ?", NOTE_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(row.map(map_row_to_note))
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Note>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM notes WHERE user_id = ? {}",
            NOTE_COLUMNS, NOTE_ORDER
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows.into_iter().map(map_row_to_note).collect())
    }

    async fn find_by_user_id_and_note_id(
        &self,
        user_id: Uuid,
        note_id: Uuid,
    ) -> Result<Option<Note>> {
        // Single query keyed by both id and owner: "wrong owner" and
        // "nonexistent" collapse into the same outcome.
        let row = sqlx::query(&format!(
            "SELECT {} FROM notes WHERE id = ? AND user_id = ?",
            NOTE_COLUMNS
        ))
        .bind(note_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(row.map(map_row_to_note))
    }

    async fn insert(&self, note: NewNote) -> Result<Note> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO notes (id, title, content, user_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(&note.title)
        .bind(&note.content)
        .bind(note.user_id)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(Note {
            id,
            title: note.title,
            content: note.content,
            user_id: note.user_id,
            created_at: now,
            updated_at: now,
        })
    }

    async fn update(&self, id: Uuid, patch: NotePatch) -> Result<Option<Note>> {
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut updates: Vec<&str> = vec!["updated_at = ?"];
        if patch.title.is_some() {
            updates.push("title = ?");
        }
        if patch.content.is_some() {
            updates.push("content = ?");
        }

        let query = format!("UPDATE notes SET {} WHERE id = ?", updates.join(", "));

        let mut q = sqlx::query(&query).bind(Utc::now());
        if let Some(title) = patch.title {
            q = q.bind(title);
        }
        if let Some(content) = patch.content {
            q = q.bind(content);
        }
        q.bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        self.find_by_id(id).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_user_id_paginated(
        &self,
        user_id: Uuid,
        page: i64,
        limit: i64,
        search: Option<&str>,
    ) -> Result<PaginatedNotes> {
        let page = page.max(1);
        let limit = limit.max(1);
        let search = search.filter(|s| !s.is_empty());

        // Always constrain to the owner; the title filter is a
        // case-sensitive substring match (LIKE is case-insensitive for
        // ASCII in SQLite, instr is not).
        let mut filter = String::from("user_id = ?");
        if search.is_some() {
            filter.push_str(" AND instr(title, ?) > 0");
        }

        // Total over the filtered set, ignoring page/limit.
        let count_query = format!("SELECT COUNT(*) FROM notes WHERE {}", filter);
        let mut count_q = sqlx::query_scalar::<_, i64>(&count_query).bind(user_id);
        if let Some(s) = search {
            count_q = count_q.bind(s);
        }
        let total = count_q.fetch_one(&self.pool).await.map_err(Error::Database)?;

        let page_query = format!(
            "SELECT {} FROM notes WHERE {} {} LIMIT ? OFFSET ?",
            NOTE_COLUMNS, filter, NOTE_ORDER
        );
        let mut page_q = sqlx::query(&page_query).bind(user_id);
        if let Some(s) = search {
            page_q = page_q.bind(s);
        }
        // Saturate so an absurdly large page yields an empty result
        // instead of overflowing the offset.
        let offset = (page - 1).saturating_mul(limit);
        let rows = page_q
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;

        let items = rows.into_iter().map(map_row_to_note).collect();
        Ok(PaginatedNotes::new(items, total, page, limit))
    }
}
