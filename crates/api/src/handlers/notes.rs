//! Handlers for the note resource.
//!
//! Each handler makes exactly one store call and maps the outcome to a
//! status code; input shape is not checked here. A body that cannot be
//! decoded fails the same way the store call would.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use notes_core::error::CoreError;
use notes_core::note::{CreateNote, UpdateNote};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /notes
///
/// Create a note. The store assigns `id`, timestamps and `completed = false`.
pub async fn create_note(
    State(state): State<AppState>,
    body: Result<Json<CreateNote>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = request_body(body).map_err(AppError::CreateFailed)?;
    let note = state
        .store
        .insert(&input)
        .await
        .map_err(AppError::CreateFailed)?;

    tracing::info!(note_id = %note.id, "Note created");

    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /notes
///
/// List every note in insertion order.
pub async fn list_notes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let notes = state
        .store
        .find_all()
        .await
        .map_err(AppError::FetchFailed)?;

    Ok(Json(notes))
}

/// PUT /notes/{id}
///
/// Apply a partial update; omitted fields keep their value.
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateNote>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = request_body(body).map_err(AppError::UpdateFailed)?;
    let note = state
        .store
        .update_by_id(&id, &input)
        .await
        .map_err(AppError::UpdateFailed)?;

    tracing::info!(note_id = %id, "Note updated");

    Ok(Json(note))
}

/// DELETE /notes/{id}
///
/// Permanently delete a note.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    state
        .store
        .delete_by_id(&id)
        .await
        .map_err(AppError::DeleteFailed)?;

    tracing::info!(note_id = %id, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Unwrap a JSON body. A request without a JSON content type carries no
/// fields and is passed on as an empty input.
fn request_body<T: Default>(body: Result<Json<T>, JsonRejection>) -> Result<T, CoreError> {
    match body {
        Ok(Json(input)) => Ok(input),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(CoreError::Validation(rejection.body_text())),
    }
}
