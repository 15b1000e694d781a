//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted note record and the creation input shape.
//! - Enforce creation validation before anything reaches storage.
//!
//! # Invariants
//! - `id` is assigned by storage and never reused for another note.
//! - Persisted notes always carry non-empty `content`.
//! - `title` is never empty; blank input collapses to the placeholder.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned row id for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = i64;

/// Placeholder title applied when a note is created without one.
pub const DEFAULT_NOTE_TITLE: &str = "Untitled Note";

/// Persisted note record as stored and served over the wire.
///
/// Field names serialize in camelCase to match the HTTP contract
/// (`createdAt` / `updatedAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Primary key assigned by the store at insertion.
    pub id: NoteId,
    /// Display title. Defaults to [`DEFAULT_NOTE_TITLE`] when omitted.
    pub title: String,
    /// Note body. Required and non-empty for every persisted row.
    pub content: String,
    /// Creation time in epoch milliseconds, set by the store.
    pub created_at: i64,
    /// Last modification time in epoch milliseconds, set by the store.
    pub updated_at: i64,
}

/// Creation input carried from callers into the store.
///
/// `title` stays optional here; the effective title is resolved at
/// persistence time so the placeholder rule lives in exactly one place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewNote {
    /// Optional display title. Blank strings count as absent.
    pub title: Option<String>,
    /// Note body. Must be non-empty to pass validation.
    pub content: String,
}

impl NewNote {
    /// Builds a creation input from caller-supplied fields.
    pub fn new(title: Option<String>, content: impl Into<String>) -> Self {
        Self {
            title,
            content: content.into(),
        }
    }

    /// Resolves the title that will be persisted.
    ///
    /// Trimmed non-empty input wins; missing or blank input collapses to
    /// [`DEFAULT_NOTE_TITLE`].
    pub fn effective_title(&self) -> String {
        match self.title.as_deref().map(str::trim) {
            Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
            _ => DEFAULT_NOTE_TITLE.to_string(),
        }
    }

    /// Checks creation invariants.
    ///
    /// # Errors
    /// Returns [`NoteValidationError::EmptyContent`] when `content` is empty.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.content.is_empty() {
            return Err(NoteValidationError::EmptyContent);
        }
        Ok(())
    }
}

/// Validation failure raised before any SQL mutation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// `content` was empty or absent at creation.
    EmptyContent,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "note content must not be empty"),
        }
    }
}

impl Error for NoteValidationError {}
