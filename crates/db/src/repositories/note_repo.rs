//! Repository for the `notes` table.

use notes_core::note::{CreateNote, UpdateNote};
use notes_core::types::new_note_id;
use sqlx::PgPool;

use crate::models::note::NoteRow;

/// Column list for notes queries.
const COLUMNS: &str = "id, title, content, completed, created_at, updated_at";

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a new note, returning the created row.
    ///
    /// A missing title is bound as `NULL` and rejected by the `NOT NULL`
    /// constraint.
    pub async fn create(pool: &PgPool, input: &CreateNote) -> Result<NoteRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (id, title, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NoteRow>(&query)
            .bind(new_note_id())
            .bind(&input.title)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// List every note, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<NoteRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes ORDER BY created_at ASC, id ASC");
        sqlx::query_as::<_, NoteRow>(&query).fetch_all(pool).await
    }

    /// Find a note by its ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<NoteRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        sqlx::query_as::<_, NoteRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update the provided fields of a note, returning the updated row.
    ///
    /// `content` is only touched when the update carries it, so an explicit
    /// `null` clears the column while an absent field keeps it.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateNote,
    ) -> Result<Option<NoteRow>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET
                title = COALESCE($2, title),
                content = CASE WHEN $3 THEN $4 ELSE content END,
                completed = COALESCE($5, completed),
                updated_at = GREATEST(NOW(), updated_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NoteRow>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.content.is_some())
            .bind(input.content.clone().flatten())
            .bind(input.completed)
            .fetch_optional(pool)
            .await
    }

    /// Delete a note. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
