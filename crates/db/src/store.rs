//! [`NoteStore`] implementation over a Postgres pool.

use async_trait::async_trait;
use notes_core::error::CoreError;
use notes_core::note::{CreateNote, Note, UpdateNote};
use notes_core::store::{note_not_found, NoteStore};

use crate::repositories::NoteRepo;
use crate::DbPool;

/// Postgres-backed note store. Cheap to clone (the pool is reference counted).
#[derive(Debug, Clone)]
pub struct PgNoteStore {
    pool: DbPool,
}

impl PgNoteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Wrap a sqlx failure as an internal store error, keeping its message for
/// the server log.
fn database_error(err: sqlx::Error) -> CoreError {
    tracing::debug!(error = %err, "Note query failed");
    CoreError::Internal(format!("database error: {err}"))
}

#[async_trait]
impl NoteStore for PgNoteStore {
    async fn insert(&self, input: &CreateNote) -> Result<Note, CoreError> {
        NoteRepo::create(&self.pool, input)
            .await
            .map(Note::from)
            .map_err(database_error)
    }

    async fn find_all(&self) -> Result<Vec<Note>, CoreError> {
        let rows = NoteRepo::list(&self.pool).await.map_err(database_error)?;
        Ok(rows.into_iter().map(Note::from).collect())
    }

    async fn update_by_id(&self, id: &str, input: &UpdateNote) -> Result<Note, CoreError> {
        NoteRepo::update(&self.pool, id, input)
            .await
            .map_err(database_error)?
            .map(Note::from)
            .ok_or_else(|| note_not_found(id))
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), CoreError> {
        let deleted = NoteRepo::delete(&self.pool, id)
            .await
            .map_err(database_error)?;
        if !deleted {
            return Err(note_not_found(id));
        }
        Ok(())
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool).await.map_err(database_error)
    }
}
