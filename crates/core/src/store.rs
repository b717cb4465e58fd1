//! The persistence collaborator behind the notes service.
//!
//! Handlers only ever see a [`SharedNoteStore`]; the Postgres backend lives in
//! `notes-db` and [`crate::memory::MemoryNoteStore`] serves tests and local
//! development.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::note::{CreateNote, Note, UpdateNote};

/// Entity name used in [`CoreError::NotFound`] for notes.
pub const NOTE_ENTITY: &str = "Note";

/// Create/read/update/delete primitives keyed by note id.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Persist a new note. The store assigns `id`, timestamps and
    /// `completed = false`, and rejects an input without a title.
    async fn insert(&self, input: &CreateNote) -> Result<Note, CoreError>;

    /// Every stored note, in insertion order.
    async fn find_all(&self) -> Result<Vec<Note>, CoreError>;

    /// Apply a partial update and refresh `updated_at`.
    ///
    /// Fails with [`CoreError::NotFound`] when `id` does not exist.
    async fn update_by_id(&self, id: &str, input: &UpdateNote) -> Result<Note, CoreError>;

    /// Permanently remove a note.
    ///
    /// Fails with [`CoreError::NotFound`] when `id` does not exist.
    async fn delete_by_id(&self, id: &str) -> Result<(), CoreError>;

    /// Check that the backing store is reachable.
    async fn health_check(&self) -> Result<(), CoreError>;
}

/// Injected store handle held by the application state.
pub type SharedNoteStore = Arc<dyn NoteStore>;

/// Build the not-found error for a note id.
pub fn note_not_found(id: &str) -> CoreError {
    CoreError::NotFound {
        entity: NOTE_ENTITY,
        id: id.to_string(),
    }
}
