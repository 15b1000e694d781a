//! HTTP request handlers for the notes API.
//!
//! # Responsibility
//! - One stateless handler per store operation.
//! - Translate store outcomes into status codes and JSON payloads.
//!
//! # Invariants
//! - Handlers never hold the store lock across an await point.
//! - An absent `content` field answers the 400 envelope, not a framework
//!   422.

use crate::error::{ApiError, MessageBody};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use log::{error, info};
use postit_core::{Note, NoteId};
use serde::Deserialize;
use std::time::Instant;

/// Creation payload. `content` stays optional so its absence reaches
/// store validation instead of failing JSON extraction.
#[derive(Debug, Deserialize)]
pub struct CreateNoteBody {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// `GET /api/notes`: full ordered snapshot.
pub async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, ApiError> {
    let started_at = Instant::now();

    match state.with_service(|service| service.list_notes()) {
        Ok(notes) => {
            info!(
                "event=notes_list module=api status=ok count={} duration_ms={}",
                notes.len(),
                started_at.elapsed().as_millis()
            );
            Ok(Json(notes))
        }
        Err(err) => {
            error!(
                "event=notes_list module=api status=error duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            );
            Err(err)
        }
    }
}

/// `POST /api/notes`: create one note, 201 with the stored row.
pub async fn create_note(
    State(state): State<AppState>,
    Json(body): Json<CreateNoteBody>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let started_at = Instant::now();
    let CreateNoteBody { title, content } = body;
    let content = content.unwrap_or_default();

    match state.with_service(|service| service.create_note(title, content)) {
        Ok(note) => {
            info!(
                "event=note_create module=api status=ok id={} duration_ms={}",
                note.id,
                started_at.elapsed().as_millis()
            );
            Ok((StatusCode::CREATED, Json(note)))
        }
        Err(err) => {
            error!(
                "event=note_create module=api status=error duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            );
            Err(err)
        }
    }
}

/// `DELETE /api/notes/:id`: 200 on removal, 404 when the id is absent.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<NoteId>,
) -> Result<Json<MessageBody>, ApiError> {
    let started_at = Instant::now();

    let deleted = match state.with_service(|service| service.delete_note(id)) {
        Ok(deleted) => deleted,
        Err(err) => {
            error!(
                "event=note_delete module=api status=error id={id} duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            );
            return Err(err);
        }
    };

    if !deleted {
        info!(
            "event=note_delete module=api status=not_found id={id} duration_ms={}",
            started_at.elapsed().as_millis()
        );
        return Err(ApiError::NotFound("Note not found".to_string()));
    }

    info!(
        "event=note_delete module=api status=ok id={id} duration_ms={}",
        started_at.elapsed().as_millis()
    );
    Ok(Json(MessageBody::new("Note deleted")))
}

/// `GET /health`: liveness probe, plain text.
pub async fn health() -> &'static str {
    postit_core::ping()
}
