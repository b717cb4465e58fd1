//! In-process [`NoteStore`] backed by a `Vec` behind a `RwLock`.
//!
//! Used by the test suites and selected at runtime with
//! `DATABASE_URL=memory://`. Contents are lost when the process exits.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::CoreError;
use crate::note::{CreateNote, Note, UpdateNote};
use crate::store::{note_not_found, NoteStore};
use crate::types::new_note_id;

#[derive(Debug, Default)]
pub struct MemoryNoteStore {
    notes: RwLock<Vec<Note>>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.notes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.notes.read().await.is_empty()
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn insert(&self, input: &CreateNote) -> Result<Note, CoreError> {
        let title = input
            .title
            .clone()
            .ok_or_else(|| CoreError::Validation("title is required".to_string()))?;

        let now = Utc::now();
        let note = Note {
            id: new_note_id(),
            title,
            content: input.content.clone(),
            completed: false,
            created_at: now,
            updated_at: now,
        };

        self.notes.write().await.push(note.clone());
        Ok(note)
    }

    async fn find_all(&self) -> Result<Vec<Note>, CoreError> {
        Ok(self.notes.read().await.clone())
    }

    async fn update_by_id(&self, id: &str, input: &UpdateNote) -> Result<Note, CoreError> {
        let mut notes = self.notes.write().await;
        let note = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| note_not_found(id))?;

        input.apply_to(note);
        // Never move backwards, even if the wall clock does.
        note.updated_at = Utc::now().max(note.updated_at);
        Ok(note.clone())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), CoreError> {
        let mut notes = self.notes.write().await;
        let index = notes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| note_not_found(id))?;
        notes.remove(index);
        Ok(())
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
