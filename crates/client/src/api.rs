//! REST client for the notes API.
//!
//! Wraps the four note endpoints (list, create, update, delete) using
//! [`reqwest`]. Non-2xx answers become [`ClientError::Api`] carrying the
//! message from the server's `{ "error": ... }` body.

use async_trait::async_trait;
use notes_core::note::{CreateNote, Note, UpdateNote};
use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// The operations the page needs from the server.
///
/// [`NotesApi`] is the HTTP implementation; tests substitute their own.
#[async_trait]
pub trait NotesBackend: Send + Sync {
    async fn list_notes(&self) -> Result<Vec<Note>, ClientError>;

    async fn create_note(&self, input: &CreateNote) -> Result<Note, ClientError>;

    async fn update_note(&self, id: &str, input: &UpdateNote) -> Result<Note, ClientError>;

    async fn delete_note(&self, id: &str) -> Result<(), ClientError>;
}

/// Error body produced by the service.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for one notes API instance.
#[derive(Debug, Clone)]
pub struct NotesApi {
    client: reqwest::Client,
    api_url: Url,
}

impl NotesApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            client,
            api_url: config.api_url.clone(),
        }
    }

    /// `{api_url}/notes[/{id}]`, with the id percent-encoded as one segment.
    fn notes_url(&self, id: Option<&str>) -> Result<Url, ClientError> {
        let mut url = self.api_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| ClientError::InvalidUrl {
                url: self.api_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            })?;
            segments.pop_if_empty().push("notes");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. On failure, extract
    /// the `error` field of the JSON body, falling back to the raw text and
    /// then to the status reason.
    async fn ensure_success(
        response: reqwest::Response,
        action: &'static str,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = error_message(status, &text);
        tracing::warn!(status = status.as_u16(), %message, "Error {action}");

        Err(ClientError::Api {
            action,
            status: status.as_u16(),
            message,
        })
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: Result<reqwest::Response, reqwest::Error>,
        action: &'static str,
    ) -> Result<T, ClientError> {
        let response = response.map_err(|source| ClientError::Request { action, source })?;
        let response = Self::ensure_success(response, action).await?;
        response
            .json::<T>()
            .await
            .map_err(|source| ClientError::Request { action, source })
    }
}

/// Pick the message shown to the user for a failed response.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.error;
    }
    if !body.trim().is_empty() {
        return body.trim().to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("unknown error")
        .to_string()
}

#[async_trait]
impl NotesBackend for NotesApi {
    /// `GET /notes`
    async fn list_notes(&self) -> Result<Vec<Note>, ClientError> {
        const ACTION: &str = "fetching notes";
        let url = self.notes_url(None)?;
        Self::parse_response(self.client.get(url).send().await, ACTION).await
    }

    /// `POST /notes`
    async fn create_note(&self, input: &CreateNote) -> Result<Note, ClientError> {
        const ACTION: &str = "creating note";
        let url = self.notes_url(None)?;
        let response = self.client.post(url).json(input).send().await;
        let note: Note = Self::parse_response(response, ACTION).await?;
        tracing::debug!(note_id = %note.id, "Note created");
        Ok(note)
    }

    /// `PUT /notes/{id}` with only the fields present in `input`.
    async fn update_note(&self, id: &str, input: &UpdateNote) -> Result<Note, ClientError> {
        const ACTION: &str = "updating note";
        let url = self.notes_url(Some(id))?;
        let response = self.client.put(url).json(input).send().await;
        Self::parse_response(response, ACTION).await
    }

    /// `DELETE /notes/{id}`; succeeds once the server answers 2xx (204).
    async fn delete_note(&self, id: &str) -> Result<(), ClientError> {
        const ACTION: &str = "deleting note";
        let url = self.notes_url(Some(id))?;
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|source| ClientError::Request {
                action: ACTION,
                source,
            })?;
        Self::ensure_success(response, ACTION).await?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
