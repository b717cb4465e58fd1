//! Page state for the notes screen: the local list, the form, the editing
//! selection, the loading flag and the error banner.
//!
//! The list only ever changes after the server confirms a request. Failed
//! requests set the banner and leave the list untouched.

use notes_core::note::{validate_title, CreateNote, Note, UpdateNote};

use crate::api::NotesBackend;
use crate::error::ClientError;

/// Values currently typed into the note form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    pub title: String,
    pub content: String,
}

impl NoteForm {
    fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone().unwrap_or_default(),
        }
    }

    fn title(&self) -> String {
        self.title.trim().to_string()
    }

    /// A blank content box means "no content".
    fn content(&self) -> Option<String> {
        if self.content.trim().is_empty() {
            None
        } else {
            Some(self.content.clone())
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// Rejected locally; no request was sent.
    #[error("Title is required")]
    TitleRequired,

    #[error("Note {0} is not in the list")]
    UnknownNote(String),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// What a successful form submission did.
#[derive(Debug, Clone, PartialEq)]
pub enum Submitted {
    Created(Note),
    Updated(Note),
}

pub struct NotesPage<B> {
    backend: B,
    notes: Vec<Note>,
    form: NoteForm,
    editing: Option<Note>,
    loading: bool,
    error: Option<String>,
}

impl<B: NotesBackend> NotesPage<B> {
    /// A page that has not fetched anything yet; it shows the loading state
    /// until the first [`load`](Self::load) completes.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            notes: Vec::new(),
            form: NoteForm::default(),
            editing: None,
            loading: true,
            error: None,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn find(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn form(&self) -> &NoteForm {
        &self.form
    }

    pub fn editing(&self) -> Option<&Note> {
        self.editing.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message for the error banner, if the last action failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.form.content = content.into();
    }

    /// Replace the local list with the server's.
    pub async fn load(&mut self) -> Result<(), PageError> {
        self.loading = true;
        self.error = None;

        let result = self.backend.list_notes().await;
        self.loading = false;

        let notes = self.record(result)?;
        tracing::debug!(count = notes.len(), "Notes loaded");
        self.notes = notes;
        Ok(())
    }

    /// Select a listed note for editing and copy its fields into the form.
    pub fn start_edit(&mut self, id: &str) -> Result<(), PageError> {
        let note = self
            .find(id)
            .cloned()
            .ok_or_else(|| PageError::UnknownNote(id.to_string()))?;
        self.form = NoteForm::from_note(&note);
        self.editing = Some(note);
        Ok(())
    }

    /// Drop the editing selection and clear the form.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.form = NoteForm::default();
    }

    /// Submit the form: update the selected note, or create a new one.
    ///
    /// A blank title is rejected before any request is made.
    pub async fn submit(&mut self) -> Result<Submitted, PageError> {
        self.error = None;

        if let Err(message) = validate_title(&self.form.title) {
            self.error = Some(message);
            return Err(PageError::TitleRequired);
        }

        let submitted = match self.editing.as_ref() {
            Some(original) => {
                let update = self.changed_fields(original);
                let result = self.backend.update_note(&original.id, &update).await;
                let note = self.record(result)?;
                self.upsert(note.clone());
                Submitted::Updated(note)
            }
            None => {
                let input = CreateNote::new(self.form.title(), self.form.content());
                let result = self.backend.create_note(&input).await;
                let note = self.record(result)?;
                self.notes.push(note.clone());
                Submitted::Created(note)
            }
        };

        self.cancel_edit();
        Ok(submitted)
    }

    /// Delete a note once `confirm` agrees. Returns `false` if the user
    /// declined, in which case nothing is sent.
    pub async fn delete<F>(&mut self, id: &str, confirm: F) -> Result<bool, PageError>
    where
        F: FnOnce(&str) -> bool,
    {
        if !confirm(id) {
            return Ok(false);
        }
        self.error = None;

        let result = self.backend.delete_note(id).await;
        self.record(result)?;

        self.notes.retain(|n| n.id != id);
        if self.editing.as_ref().is_some_and(|n| n.id == id) {
            self.cancel_edit();
        }
        Ok(true)
    }

    /// Flip `completed` on a listed note, sending only that field.
    pub async fn toggle_completed(&mut self, id: &str) -> Result<Note, PageError> {
        self.error = None;

        let completed = self
            .find(id)
            .map(|n| n.completed)
            .ok_or_else(|| PageError::UnknownNote(id.to_string()))?;

        let result = self
            .backend
            .update_note(id, &UpdateNote::completed(!completed))
            .await;
        let note = self.record(result)?;
        self.upsert(note.clone());
        Ok(note)
    }

    /// Fields of the form that differ from the note being edited.
    fn changed_fields(&self, original: &Note) -> UpdateNote {
        let mut update = UpdateNote::default();

        let title = self.form.title();
        if title != original.title {
            update.title = Some(title);
        }

        let content = self.form.content();
        if content != original.content {
            update.content = Some(content);
        }

        update
    }

    /// Replace the note with the same id, or append it if it is not listed.
    fn upsert(&mut self, note: Note) {
        match self.notes.iter_mut().find(|n| n.id == note.id) {
            Some(slot) => *slot = note,
            None => self.notes.push(note),
        }
    }

    /// Put a failed request's message on the banner.
    fn record<T>(&mut self, result: Result<T, ClientError>) -> Result<T, PageError> {
        result.map_err(|err| {
            tracing::error!(error = %err, "Request failed");
            self.error = Some(err.to_string());
            PageError::Client(err)
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
